//! Request DTOs for the storefront API
//!
//! Defines the structure of incoming HTTP request bodies and their
//! validation into catalog inputs.

use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::{NewProduct, ProductFilter, Size, SortBy};
use crate::error::{AppError, Result};

/// Request body for creating or renaming a category
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub name: String,
}

/// Request body for creating or updating a product
///
/// Every field is optional at the wire level so that a missing field yields
/// a descriptive validation message rather than a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<Uuid>,
    pub quantity: Option<i64>,
    pub photo: Option<String>,
    #[serde(default)]
    pub shipping: bool,
    #[serde(default)]
    pub size: Size,
}

fn required_text(value: Option<String>, message: &str) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::InvalidRequest(message.to_string()))
}

impl ProductRequest {
    /// Validates required fields and converts into a catalog input.
    pub fn validate(self) -> Result<NewProduct> {
        let name = required_text(self.name, "Name is Required")?;
        let description = required_text(self.description, "Description is Required")?;
        let price = self
            .price
            .filter(|p| p.is_finite())
            .ok_or_else(|| AppError::InvalidRequest("Price is Required".into()))?;
        if price < 0.0 {
            return Err(AppError::InvalidRequest("Price cannot be negative".into()));
        }
        let category = self
            .category
            .ok_or_else(|| AppError::InvalidRequest("Category is Required".into()))?;
        let quantity = self
            .quantity
            .ok_or_else(|| AppError::InvalidRequest("Quantity is Required".into()))?;
        let quantity = u32::try_from(quantity)
            .map_err(|_| AppError::InvalidRequest("Quantity cannot be negative".into()))?;
        let photo = required_text(self.photo, "Photo is Required")?;

        Ok(NewProduct {
            name,
            description,
            price,
            category,
            quantity,
            photo,
            shipping: self.shipping,
            size: self.size,
        })
    }
}

/// Request body for `POST /product-filters`
///
/// `checked` holds category ids; `radio` is either empty or a `[min, max]`
/// price pair.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub checked: Vec<Uuid>,
    #[serde(default)]
    pub radio: Vec<f64>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl FilterRequest {
    pub fn into_filter(self) -> Result<(ProductFilter, SortBy)> {
        let price = match self.radio.as_slice() {
            [] => None,
            [min, max] if min <= max => Some((*min, *max)),
            _ => {
                return Err(AppError::InvalidRequest(
                    "Price range must be [min, max]".into(),
                ))
            }
        };
        let sort = self.sort.as_deref().map(SortBy::parse).unwrap_or_default();

        Ok((
            ProductFilter {
                categories: self.checked,
                price,
            },
            sort,
        ))
    }
}

/// Request body for `POST /review/:productId`
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    /// Reviewer identifier
    pub user: String,
    pub rating: i64,
    #[serde(default)]
    pub comment: String,
}
