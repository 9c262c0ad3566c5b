//! HTTP Middleware Module
//!
//! Response caching for GET routes and pattern invalidation for mutating
//! routes. Both are plain `axum::middleware::from_fn_with_state` functions
//! sharing one [`crate::cache::SharedCache`].

pub mod invalidation;
pub mod response_cache;

pub use invalidation::{invalidate_cache, Invalidation};
pub use response_cache::{cache_key, cache_response, ResponseCache};
