//! Catalog Module
//!
//! In-memory product catalog behind the cached API routes: categories,
//! products, reviews, search and filtering.

pub mod filter;
pub mod models;
pub mod search;
mod store;

pub use filter::{ProductFilter, SortBy};
pub use models::{Category, Product, Review, Size, Suggestion};
pub use store::{CatalogStore, NewProduct, ProductReviews, LATEST_LIMIT, PAGE_SIZE, RELATED_LIMIT};
