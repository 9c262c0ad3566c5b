//! Multi-criteria product filtering and sorting.

use uuid::Uuid;

use super::models::Product;

// == Product Filter ==
/// Category and price criteria; an empty filter keeps every product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Allowed category ids; empty means any category
    pub categories: Vec<Uuid>,
    /// Inclusive `(min, max)` price bounds
    pub price: Option<(f64, f64)>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok =
            self.categories.is_empty() || self.categories.contains(&product.category);
        let price_ok = match self.price {
            Some((min, max)) => product.price >= min && product.price <= max,
            None => true,
        };
        category_ok && price_ok
    }

    /// Keeps matching products, preserving their order.
    pub fn apply<'a, I>(&self, products: I) -> Vec<Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products
            .into_iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

// == Sort Order ==
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Keep the incoming order
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Name,
    RatingHigh,
    RatingLow,
}

impl SortBy {
    /// Parses a sort label; anything unrecognised means relevance.
    pub fn parse(label: &str) -> Self {
        match label {
            "price-low" => SortBy::PriceLow,
            "price-high" => SortBy::PriceHigh,
            "name" => SortBy::Name,
            "rating-high" => SortBy::RatingHigh,
            "rating-low" => SortBy::RatingLow,
            _ => SortBy::Relevance,
        }
    }
}

/// Sorts in place. The sort is stable, so equal keys keep their order.
pub fn sort_products(products: &mut [Product], sort: SortBy) {
    match sort {
        SortBy::Relevance => {}
        SortBy::PriceLow => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceHigh => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::Name => products.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        }),
        SortBy::RatingHigh => {
            products.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating))
        }
        SortBy::RatingLow => {
            products.sort_by(|a, b| a.average_rating.total_cmp(&b.average_rating))
        }
    }
}
