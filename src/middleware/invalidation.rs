//! Cache invalidation middleware for mutating routes.
//!
//! After the wrapped handler has produced its response, every cache key
//! containing one of the configured patterns is deleted, and only then is
//! the response handed back. The match is a plain substring test over all
//! current keys, so `"product"` clears every cached product listing, not
//! just the entry for the product that changed.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::cache::SharedCache;

/// State for [`invalidate_cache`]: the shared cache and the patterns to purge.
#[derive(Clone)]
pub struct Invalidation {
    cache: SharedCache,
    patterns: Arc<[String]>,
}

impl Invalidation {
    pub fn new<I, S>(cache: SharedCache, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cache,
            patterns: patterns.into_iter().map(Into::<String>::into).collect(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

/// Runs the handler, then deletes matching cache keys before returning its
/// response. Invalidation happens whatever the response status.
pub async fn invalidate_cache(
    State(invalidation): State<Invalidation>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    let mut cache = invalidation.cache.write().await;
    for pattern in invalidation.patterns.iter() {
        let removed = cache.invalidate_matching(pattern);
        debug!(pattern = %pattern, removed, status = %response.status(), "cache invalidation");
    }

    response
}
