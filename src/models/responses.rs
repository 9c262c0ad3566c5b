//! Response DTOs for the storefront API
//!
//! Defines the structure of outgoing HTTP response bodies. Field names follow
//! the storefront client's expectations (`camelCase`, `success` flags).

use serde::Serialize;

use crate::cache::CacheStatsSnapshot;
use crate::catalog::{Category, Product, ProductReviews, Review};

/// Response body for `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    /// Current timestamp in RFC 3339 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn running() -> Self {
        Self {
            success: true,
            message: "Server is running".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Cache figures reported by `GET /cache-stats`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatsBody {
    pub hits: u64,
    pub misses: u64,
    pub sets: u64,
    pub deletes: u64,
    pub total_requests: u64,
    /// Percentage, two decimals
    pub hit_rate: f64,
    pub size: usize,
    pub keys: Vec<String>,
}

impl From<CacheStatsSnapshot> for CacheStatsBody {
    fn from(snapshot: CacheStatsSnapshot) -> Self {
        Self {
            hit_rate: snapshot.hit_rate_percent(),
            hits: snapshot.hits,
            misses: snapshot.misses,
            sets: snapshot.sets,
            deletes: snapshot.deletes,
            total_requests: snapshot.total_requests,
            size: snapshot.size,
            keys: snapshot.keys,
        }
    }
}

/// Response body for `GET /cache-stats`
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub success: bool,
    pub message: String,
    pub stats: CacheStatsBody,
}

impl CacheStatsResponse {
    pub fn new(snapshot: CacheStatsSnapshot) -> Self {
        Self {
            success: true,
            message: "Cache statistics".to_string(),
            stats: snapshot.into(),
        }
    }
}

/// Plain acknowledgement, e.g. after a delete
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// A single category or the category list, under the `category` field
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse<T> {
    pub success: bool,
    pub message: String,
    pub category: T,
}

impl<T> CategoryResponse<T> {
    pub fn new(message: impl Into<String>, category: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            category,
        }
    }
}

/// A single product
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub success: bool,
    pub message: String,
    pub product: Product,
}

impl ProductResponse {
    pub fn new(message: impl Into<String>, product: Product) -> Self {
        Self {
            success: true,
            message: message.into(),
            product,
        }
    }
}

/// A list of products
#[derive(Debug, Clone, Serialize)]
pub struct ProductsResponse {
    pub success: bool,
    #[serde(rename = "counTotal", skip_serializing_if = "Option::is_none")]
    pub count_total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub products: Vec<Product>,
}

impl ProductsResponse {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            success: true,
            count_total: None,
            message: None,
            products,
        }
    }

    /// Listing that also reports its length and a message.
    pub fn counted(message: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            count_total: Some(products.len()),
            message: Some(message.into()),
            ..Self::new(products)
        }
    }
}

/// Response body for `GET /product-count`
#[derive(Debug, Clone, Serialize)]
pub struct CountResponse {
    pub success: bool,
    pub total: usize,
}

/// Response body for `GET /product-category/:slug`
#[derive(Debug, Clone, Serialize)]
pub struct CategoryProductsResponse {
    pub success: bool,
    pub category: Category,
    pub products: Vec<Product>,
}

/// Response body for `GET /reviews/:productId`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub success: bool,
    pub message: String,
    pub reviews: Vec<Review>,
    pub average_rating: f64,
    pub total_reviews: u32,
}

impl From<ProductReviews> for ReviewsResponse {
    fn from(reviews: ProductReviews) -> Self {
        Self {
            success: true,
            message: "Reviews fetched successfully".to_string(),
            reviews: reviews.reviews,
            average_rating: reviews.average_rating,
            total_reviews: reviews.total_reviews,
        }
    }
}

/// Response body for unmatched routes
#[derive(Debug, Clone, Serialize)]
pub struct NotFoundResponse {
    pub success: bool,
    pub message: String,
    pub path: String,
}
