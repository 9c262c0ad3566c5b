//! Request and Response models for the storefront API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CategoryRequest, FilterRequest, ProductRequest, ReviewRequest};
pub use responses::{
    CacheStatsBody, CacheStatsResponse, CategoryProductsResponse, CategoryResponse, CountResponse,
    HealthResponse, MessageResponse, NotFoundResponse, ProductResponse, ProductsResponse,
    ReviewsResponse,
};
