//! API Handlers
//!
//! Shared application state plus the diagnostic endpoints: health, cache
//! statistics and the not-found fallback.

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    Json,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::cache::{self, SharedCache, TtlCache};
use crate::catalog::CatalogStore;
use crate::config::{Config, CATEGORY_CACHE_TTL_MS, PRODUCT_CACHE_TTL_MS};
use crate::error::{AppError, Result};
use crate::models::{CacheStatsResponse, HealthResponse, NotFoundResponse};

/// Application state shared across all handlers.
///
/// The cache handle is the same one given to the response-cache and
/// invalidation middleware and to the sweep task.
#[derive(Clone)]
pub struct AppState {
    /// Shared response cache
    pub cache: SharedCache,
    /// Thread-safe catalog store
    pub catalog: Arc<RwLock<CatalogStore>>,
    /// TTL for cached category responses
    pub category_cache_ttl_ms: u64,
    /// TTL for cached product responses
    pub product_cache_ttl_ms: u64,
}

impl AppState {
    /// Creates a new AppState with the default route TTLs.
    pub fn new(cache: TtlCache, catalog: CatalogStore) -> Self {
        Self {
            cache: cache::shared(cache),
            catalog: Arc::new(RwLock::new(catalog)),
            category_cache_ttl_ms: CATEGORY_CACHE_TTL_MS,
            product_cache_ttl_ms: PRODUCT_CACHE_TTL_MS,
        }
    }

    /// Creates a new AppState from configuration, with an empty catalog.
    pub fn from_config(config: &Config) -> Self {
        Self {
            category_cache_ttl_ms: config.category_cache_ttl_ms,
            product_cache_ttl_ms: config.product_cache_ttl_ms,
            ..Self::new(
                TtlCache::new(config.default_cache_ttl_ms),
                CatalogStore::new(),
            )
        }
    }
}

/// Parses a path id, mapping garbage to a 400.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidRequest("Invalid ID format".into()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::running())
}

/// Handler for GET /cache-stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let snapshot = state.cache.read().await.stats();
    Json(CacheStatsResponse::new(snapshot))
}

/// Fallback for unmatched routes
pub async fn not_found_handler(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<NotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            success: false,
            message: "Route not found".to_string(),
            path: uri.to_string(),
        }),
    )
}
