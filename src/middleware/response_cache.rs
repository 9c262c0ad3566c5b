//! Response cache middleware for GET routes.
//!
//! On a hit the cached JSON is returned and the route handler never runs.
//! On a miss the handler runs, and a successful JSON body is stored under
//! the request's key before the response goes out.
//!
//! # Example
//!
//! ```ignore
//! use axum::{middleware, routing::get, Router};
//!
//! let products = Router::new()
//!     .route("/product-count", get(product_count))
//!     .layer(middleware::from_fn_with_state(
//!         ResponseCache::new(cache.clone(), 300_000),
//!         cache_response,
//!     ));
//! ```

use axum::{
    body::Body,
    extract::{OriginalUri, Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::{SharedCache, KEY_PREFIX};
use crate::error::AppError;

/// State for [`cache_response`]: the shared cache plus this route group's TTL.
#[derive(Clone)]
pub struct ResponseCache {
    cache: SharedCache,
    ttl_ms: u64,
}

impl ResponseCache {
    pub fn new(cache: SharedCache, ttl_ms: u64) -> Self {
        Self { cache, ttl_ms }
    }
}

/// Builds the cache key for `request`: the prefix followed by the raw path
/// and query of the URI the client sent.
///
/// The query string is not normalized, so `?a=1&b=2` and `?b=2&a=1` map to
/// different keys.
pub fn cache_key(request: &Request) -> String {
    let uri = request
        .extensions()
        .get::<OriginalUri>()
        .map(|original| &original.0)
        .unwrap_or_else(|| request.uri());
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    format!("{KEY_PREFIX}{path_and_query}")
}

/// Serves GET requests from the cache and fills it on a miss.
///
/// Non-GET requests pass through untouched. Responses that are not 2xx, or
/// whose body is not JSON, are returned as-is and never stored.
pub async fn cache_response(
    State(layer): State<ResponseCache>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let key = cache_key(&request);

    let cached = layer.cache.write().await.get(&key);
    if let Some(value) = cached {
        return Json(value).into_response();
    }

    let response = next.run(request).await;
    if !response.status().is_success() {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            warn!(key = %key, error = %err, "failed to buffer response body");
            return AppError::Internal("Failed to read response body".into()).into_response();
        }
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(value) => layer.cache.write().await.set(key, value, layer.ttl_ms),
        Err(_) => debug!(key = %key, "response body is not JSON, skipping cache"),
    }

    Response::from_parts(parts, Body::from(bytes))
}
