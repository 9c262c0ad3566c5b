//! Storefront - catalog API with an in-memory TTL response cache
//!
//! Cached GET responses are keyed by request path, expire lazily on read and
//! are swept periodically; write routes invalidate keys by substring.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod tasks;

pub use api::{create_router, AppState};
pub use cache::{SharedCache, TtlCache};
pub use config::Config;
pub use error::AppError;
pub use tasks::spawn_sweep_task;
