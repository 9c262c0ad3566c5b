//! API Routes
//!
//! Configures the Axum router with all storefront endpoints and wires the
//! response cache and invalidation middleware around the catalog routes.

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::category;
use super::handlers::{cache_stats_handler, health_handler, not_found_handler, AppState};
use super::product;
use crate::middleware::{cache_response, invalidate_cache, Invalidation, ResponseCache};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /health` - Health check endpoint
/// - `GET /cache-stats` - Cache statistics
/// - `/api/v1/category/*` - Category routes behind the response cache
/// - `/api/v1/product/*` - Product routes behind the response cache
///
/// Anything else falls through to a JSON 404.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/cache-stats", get(cache_stats_handler))
        .nest("/api/v1/category", category_routes(&state))
        .nest("/api/v1/product", product_routes(&state))
        .fallback(not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn invalidating(state: &AppState, pattern: &str, routes: Router<AppState>) -> Router<AppState> {
    routes.layer(middleware::from_fn_with_state(
        Invalidation::new(state.cache.clone(), [pattern]),
        invalidate_cache,
    ))
}

fn cached(state: &AppState, ttl_ms: u64, routes: Router<AppState>) -> Router<AppState> {
    routes.layer(middleware::from_fn_with_state(
        ResponseCache::new(state.cache.clone(), ttl_ms),
        cache_response,
    ))
}

fn category_routes(state: &AppState) -> Router<AppState> {
    let writes = Router::new()
        .route("/create-category", post(category::create_category))
        .route("/update-category/:id", put(category::update_category))
        .route("/delete-category/:id", delete(category::delete_category));

    let routes = Router::new()
        .route("/get-category", get(category::list_categories))
        .route("/single-category/:slug", get(category::single_category))
        .merge(invalidating(state, "category", writes));

    cached(state, state.category_cache_ttl_ms, routes)
}

fn product_routes(state: &AppState) -> Router<AppState> {
    let writes = Router::new()
        .route("/create-product", post(product::create_product))
        .route("/update-product/:pid", put(product::update_product))
        .route("/delete-product/:pid", delete(product::delete_product));

    let review = Router::new().route("/review/:productId", post(product::add_review));

    let routes = Router::new()
        .route("/get-product", get(product::latest_products))
        .route("/get-product/:slug", get(product::single_product))
        .route("/product-filters", post(product::filter_products))
        .route("/product-count", get(product::product_count))
        .route("/product-list/:page", get(product::product_list))
        .route("/search/:keyword", get(product::search_products))
        .route("/search-suggestions/:keyword", get(product::search_suggestions))
        .route("/related-product/:pid/:cid", get(product::related_products))
        .route("/product-category/:slug", get(product::category_products))
        .route("/reviews/:productId", get(product::product_reviews))
        .merge(invalidating(state, "product", writes))
        .merge(invalidating(state, "reviews", review));

    cached(state, state.product_cache_ttl_ms, routes)
}
