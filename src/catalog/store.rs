//! Catalog Store Module
//!
//! In-memory categories and products. Records are kept in insertion order;
//! "newest first" listings walk that order backwards.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::filter::{sort_products, ProductFilter, SortBy};
use super::models::{slugify, Category, Product, Review, Size, Suggestion};
use super::search;
use crate::error::{AppError, Result};

/// Products returned by the "all products" listing
pub const LATEST_LIMIT: usize = 12;

/// Products per page of the paginated listing
pub const PAGE_SIZE: usize = 6;

/// Maximum related products returned
pub const RELATED_LIMIT: usize = 3;

// == New Product ==
/// Validated fields for creating or replacing a product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Uuid,
    pub quantity: u32,
    pub photo: String,
    pub shipping: bool,
    pub size: Size,
}

// == Product Reviews ==
#[derive(Debug, Clone, PartialEq)]
pub struct ProductReviews {
    pub reviews: Vec<Review>,
    pub average_rating: f64,
    pub total_reviews: u32,
}

// == Catalog Store ==
#[derive(Debug, Default)]
pub struct CatalogStore {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    // == Categories ==

    /// Creates a category; its slug is derived from the name.
    pub fn create_category(&mut self, name: &str) -> Result<Category> {
        let (name, slug) = category_name_and_slug(name)?;
        if self.categories.iter().any(|c| c.slug == slug) {
            return Err(AppError::Conflict("Category already exists".into()));
        }

        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            name,
            slug,
            created_at: now,
            updated_at: now,
        };
        info!(id = %category.id, slug = %category.slug, "category created");
        self.categories.push(category.clone());
        Ok(category)
    }

    /// Renames a category and recomputes its slug.
    pub fn update_category(&mut self, id: Uuid, name: &str) -> Result<Category> {
        let (name, slug) = category_name_and_slug(name)?;
        if self.categories.iter().any(|c| c.slug == slug && c.id != id) {
            return Err(AppError::Conflict("Category already exists".into()));
        }

        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound("Category not found".into()))?;
        category.name = name;
        category.slug = slug;
        category.updated_at = Utc::now();
        Ok(category.clone())
    }

    /// All categories in creation order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_by_slug(&self, slug: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|c| c.slug == slug)
            .ok_or_else(|| AppError::NotFound("Category not found".into()))
    }

    /// Removes a category. Products pointing at it are left as they are.
    pub fn delete_category(&mut self, id: Uuid) -> Result<Category> {
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound("Category not found".into()))?;
        Ok(self.categories.remove(index))
    }

    // == Products ==

    pub fn create_product(&mut self, input: NewProduct) -> Result<Product> {
        let slug = self.checked_product_slug(&input, None)?;

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: input.name,
            slug,
            description: input.description,
            price: input.price,
            category: input.category,
            quantity: input.quantity,
            photo: input.photo,
            shipping: input.shipping,
            size: input.size,
            reviews: Vec::new(),
            average_rating: 0.0,
            total_reviews: 0,
            created_at: now,
            updated_at: now,
        };
        info!(id = %product.id, slug = %product.slug, "product created");
        self.products.push(product.clone());
        Ok(product)
    }

    /// Replaces a product's editable fields. Reviews are kept.
    pub fn update_product(&mut self, id: Uuid, input: NewProduct) -> Result<Product> {
        let slug = self.checked_product_slug(&input, Some(id))?;

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Product not found".into()))?;
        product.name = input.name;
        product.slug = slug;
        product.description = input.description;
        product.price = input.price;
        product.category = input.category;
        product.quantity = input.quantity;
        product.photo = input.photo;
        product.shipping = input.shipping;
        product.size = input.size;
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    fn checked_product_slug(&self, input: &NewProduct, existing: Option<Uuid>) -> Result<String> {
        if !self.categories.iter().any(|c| c.id == input.category) {
            return Err(AppError::InvalidRequest("Category not found".into()));
        }

        let slug = slugify(&input.name);
        if slug.is_empty() {
            return Err(AppError::InvalidRequest(
                "Name must contain letters or digits".into(),
            ));
        }
        if self
            .products
            .iter()
            .any(|p| p.slug == slug && Some(p.id) != existing)
        {
            return Err(AppError::Conflict("Product already exists".into()));
        }
        Ok(slug)
    }

    /// Newest products first, at most `limit`.
    pub fn latest_products(&self, limit: usize) -> Vec<Product> {
        self.products.iter().rev().take(limit).cloned().collect()
    }

    pub fn product_by_slug(&self, slug: &str) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| AppError::NotFound("Product not found".into()))
    }

    pub fn delete_product(&mut self, id: Uuid) -> Result<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Product not found".into()))?;
        Ok(self.products.remove(index))
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// One page of the newest-first listing. Pages start at 1; 0 is read as 1.
    pub fn product_page(&self, page: usize) -> Vec<Product> {
        let skip = page.max(1).saturating_sub(1).saturating_mul(PAGE_SIZE);
        self.products
            .iter()
            .rev()
            .skip(skip)
            .take(PAGE_SIZE)
            .cloned()
            .collect()
    }

    /// Other products of category `cid`, excluding `pid`.
    pub fn related_products(&self, pid: Uuid, cid: Uuid) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == cid && p.id != pid)
            .take(RELATED_LIMIT)
            .cloned()
            .collect()
    }

    pub fn products_in_category(&self, slug: &str) -> Result<(Category, Vec<Product>)> {
        let category = self.category_by_slug(slug)?.clone();
        let products = self
            .products
            .iter()
            .filter(|p| p.category == category.id)
            .cloned()
            .collect();
        Ok((category, products))
    }

    pub fn filter_products(&self, filter: &ProductFilter, sort: SortBy) -> Vec<Product> {
        let mut products = filter.apply(&self.products);
        sort_products(&mut products, sort);
        products
    }

    // == Search ==

    pub fn search(&self, keyword: &str) -> Vec<Product> {
        search::search(&self.products, keyword)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn suggestions(&self, keyword: &str) -> Vec<Suggestion> {
        search::suggestions(&self.products, keyword)
    }

    // == Reviews ==

    /// Adds `user`'s review and refreshes the product's rating figures.
    pub fn add_review(
        &mut self,
        product_id: Uuid,
        user: &str,
        rating: i64,
        comment: &str,
    ) -> Result<Product> {
        let rating = u8::try_from(rating)
            .ok()
            .filter(|r| (1..=5).contains(r))
            .ok_or_else(|| AppError::InvalidRequest("Rating must be between 1 and 5".into()))?;
        if user.trim().is_empty() {
            return Err(AppError::InvalidRequest("User is required".into()));
        }
        if comment.trim().is_empty() {
            return Err(AppError::InvalidRequest("Comment is required".into()));
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| AppError::NotFound("Product not found".into()))?;
        if product.reviews.iter().any(|r| r.user == user) {
            return Err(AppError::InvalidRequest(
                "You have already reviewed this product".into(),
            ));
        }

        product.reviews.push(Review {
            user: user.to_string(),
            rating,
            comment: comment.to_string(),
            date: Utc::now(),
        });
        product.refresh_rating();
        Ok(product.clone())
    }

    pub fn reviews(&self, product_id: Uuid) -> Result<ProductReviews> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| AppError::NotFound("Product not found".into()))?;
        Ok(ProductReviews {
            reviews: product.reviews.clone(),
            average_rating: product.average_rating,
            total_reviews: product.total_reviews,
        })
    }
}

fn category_name_and_slug(name: &str) -> Result<(String, String)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidRequest("Name is required".into()));
    }
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(AppError::InvalidRequest(
            "Name must contain letters or digits".into(),
        ));
    }
    Ok((name.to_string(), slug))
}
