//! Product search and autocomplete suggestions.
//!
//! Search first runs a weighted word match (name terms weigh 10, description
//! terms weigh 5). When that finds nothing it falls back to a
//! case-insensitive substring match of the whole keyword.

use super::models::{Product, Suggestion};

const NAME_WEIGHT: u32 = 10;
const DESCRIPTION_WEIGHT: u32 = 5;

/// Maximum number of suggestions returned
pub const SUGGESTION_LIMIT: usize = 5;

/// Keywords shorter than this yield no suggestions
pub const SUGGESTION_MIN_CHARS: usize = 2;

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

/// Weighted word-match score of `product` against `terms`; 0 means no match.
pub fn text_score(product: &Product, terms: &[String]) -> u32 {
    let count = |text: &str| -> u32 {
        words(text)
            .filter(|w| terms.iter().any(|t| t == w))
            .count() as u32
    };

    count(&product.name) * NAME_WEIGHT + count(&product.description) * DESCRIPTION_WEIGHT
}

/// Products with a positive text score, best first. Ties keep input order.
fn text_matches<'a>(products: &'a [Product], keyword: &str) -> Vec<&'a Product> {
    let terms: Vec<String> = words(keyword).collect();
    if terms.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(u32, &Product)> = products
        .iter()
        .map(|p| (text_score(p, &terms), p))
        .filter(|(score, _)| *score > 0)
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, p)| p).collect()
}

/// Products whose name or description contains `keyword`, ignoring case.
fn substring_matches<'a>(products: &'a [Product], keyword: &str) -> Vec<&'a Product> {
    let needle = keyword.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .collect()
}

// == Search ==
/// Full search. A blank keyword returns nothing; otherwise the fallback
/// matches the keyword exactly as given, surrounding whitespace included.
pub fn search<'a>(products: &'a [Product], keyword: &str) -> Vec<&'a Product> {
    if keyword.trim().is_empty() {
        return Vec::new();
    }

    let ranked = text_matches(products, keyword);
    if !ranked.is_empty() {
        return ranked;
    }
    substring_matches(products, keyword)
}

// == Suggestions ==
/// Up to five `{name, slug}` pairs for autocomplete.
///
/// Ranked matches keep their score order; fallback matches are ordered by
/// name.
pub fn suggestions(products: &[Product], keyword: &str) -> Vec<Suggestion> {
    if keyword.chars().count() < SUGGESTION_MIN_CHARS || keyword.trim().is_empty() {
        return Vec::new();
    }

    let ranked = text_matches(products, keyword);
    let picked: Vec<&Product> = if !ranked.is_empty() {
        ranked.into_iter().take(SUGGESTION_LIMIT).collect()
    } else {
        let mut fallback = substring_matches(products, keyword);
        fallback.sort_by(|a, b| a.name.cmp(&b.name));
        fallback.into_iter().take(SUGGESTION_LIMIT).collect()
    };

    picked.into_iter().map(Suggestion::from).collect()
}
