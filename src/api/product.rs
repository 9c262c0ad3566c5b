//! Product Handlers
//!
//! Listing, search, filtering and review endpoints under `/api/v1/product`.
//! Write handlers are wrapped by the invalidation middleware in the router;
//! none of them touch the cache directly.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::handlers::{parse_id, AppState};
use crate::catalog::{Product, Suggestion, LATEST_LIMIT};
use crate::error::{AppError, Result};
use crate::models::{
    CategoryProductsResponse, CountResponse, FilterRequest, MessageResponse, ProductRequest,
    ProductResponse, ProductsResponse, ReviewRequest, ReviewsResponse,
};

/// Handler for POST /create-product
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>)> {
    let input = req.validate()?;
    let product = state.catalog.write().await.create_product(input)?;
    Ok((
        StatusCode::CREATED,
        Json(ProductResponse::new("Product Created Successfully", product)),
    ))
}

/// Handler for PUT /update-product/:pid
pub async fn update_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<ProductResponse>> {
    let pid = parse_id(&pid)?;
    let input = req.validate()?;
    let product = state.catalog.write().await.update_product(pid, input)?;
    Ok(Json(ProductResponse::new(
        "Product Updated Successfully",
        product,
    )))
}

/// Handler for DELETE /delete-product/:pid
pub async fn delete_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<Json<MessageResponse>> {
    let pid = parse_id(&pid)?;
    state.catalog.write().await.delete_product(pid)?;
    Ok(Json(MessageResponse::ok("Product Deleted successfully")))
}

/// Handler for GET /get-product
pub async fn latest_products(State(state): State<AppState>) -> Json<ProductsResponse> {
    let products = state.catalog.read().await.latest_products(LATEST_LIMIT);
    Json(ProductsResponse::counted("All Products", products))
}

/// Handler for GET /get-product/:slug
pub async fn single_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductResponse>> {
    let product = state.catalog.read().await.product_by_slug(&slug)?.clone();
    Ok(Json(ProductResponse::new("Single Product Fetched", product)))
}

/// Handler for POST /product-filters
pub async fn filter_products(
    State(state): State<AppState>,
    Json(req): Json<FilterRequest>,
) -> Result<Json<ProductsResponse>> {
    let (filter, sort) = req.into_filter()?;
    let products = state.catalog.read().await.filter_products(&filter, sort);
    Ok(Json(ProductsResponse::new(products)))
}

/// Handler for GET /product-count
pub async fn product_count(State(state): State<AppState>) -> Json<CountResponse> {
    Json(CountResponse {
        success: true,
        total: state.catalog.read().await.product_count(),
    })
}

/// Handler for GET /product-list/:page
pub async fn product_list(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Json<ProductsResponse>> {
    let page: usize = page
        .parse()
        .map_err(|_| AppError::InvalidRequest("Invalid page number".into()))?;
    let products = state.catalog.read().await.product_page(page);
    Ok(Json(ProductsResponse::new(products)))
}

/// Handler for GET /search/:keyword
///
/// Responds with a bare array of products.
pub async fn search_products(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Json<Vec<Product>> {
    Json(state.catalog.read().await.search(&keyword))
}

/// Handler for GET /search-suggestions/:keyword
pub async fn search_suggestions(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Json<Vec<Suggestion>> {
    Json(state.catalog.read().await.suggestions(&keyword))
}

/// Handler for GET /related-product/:pid/:cid
pub async fn related_products(
    State(state): State<AppState>,
    Path((pid, cid)): Path<(String, String)>,
) -> Result<Json<ProductsResponse>> {
    let (pid, cid) = (parse_id(&pid)?, parse_id(&cid)?);
    let products = state.catalog.read().await.related_products(pid, cid);
    Ok(Json(ProductsResponse::new(products)))
}

/// Handler for GET /product-category/:slug
pub async fn category_products(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryProductsResponse>> {
    let (category, products) = state.catalog.read().await.products_in_category(&slug)?;
    Ok(Json(CategoryProductsResponse {
        success: true,
        category,
        products,
    }))
}

/// Handler for POST /review/:productId
pub async fn add_review(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ProductResponse>> {
    let product_id = parse_id(&product_id)?;
    let product = state.catalog.write().await.add_review(
        product_id,
        &req.user,
        req.rating,
        &req.comment,
    )?;
    Ok(Json(ProductResponse::new("Review added successfully", product)))
}

/// Handler for GET /reviews/:productId
pub async fn product_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ReviewsResponse>> {
    let product_id = parse_id(&product_id)?;
    let reviews = state.catalog.read().await.reviews(product_id)?;
    Ok(Json(reviews.into()))
}
