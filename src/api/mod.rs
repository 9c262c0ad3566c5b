//! API Module
//!
//! HTTP handlers and routing for the storefront REST API.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /cache-stats` - Response cache statistics
//! - `/api/v1/category/*` - Category CRUD, cached for 3 minutes
//! - `/api/v1/product/*` - Products, search and reviews, cached for 5 minutes

pub mod category;
pub mod handlers;
pub mod product;
pub mod routes;

pub use handlers::{cache_stats_handler, health_handler, not_found_handler, AppState};
pub use routes::create_router;
