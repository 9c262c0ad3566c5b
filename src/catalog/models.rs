//! Catalog records: categories, products and their reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// == Category ==
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// == Size ==
/// Garment size; products default to `M`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    XS,
    S,
    #[default]
    M,
    L,
    XL,
    XXL,
}

// == Review ==
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    /// Reviewer identifier
    pub user: String,
    /// 1 to 5 inclusive
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
}

// == Product ==
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    /// Owning category id
    pub category: Uuid,
    pub quantity: u32,
    pub photo: String,
    pub shipping: bool,
    pub size: Size,
    pub reviews: Vec<Review>,
    /// Mean rating rounded to one decimal, 0 with no reviews
    pub average_rating: f64,
    pub total_reviews: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Recomputes `average_rating` and `total_reviews` from `reviews`.
    pub fn refresh_rating(&mut self) {
        self.total_reviews = self.reviews.len() as u32;
        self.average_rating = if self.reviews.is_empty() {
            0.0
        } else {
            let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
            let mean = f64::from(sum) / self.reviews.len() as f64;
            (mean * 10.0).round() / 10.0
        };
    }
}

// == Suggestion ==
/// Autocomplete entry returned by the suggestions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub slug: String,
}

impl From<&Product> for Suggestion {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            slug: product.slug.clone(),
        }
    }
}

// == Slug ==
/// Lowercases `name`, keeps ASCII letters and digits, and collapses every
/// other run of characters into a single `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
