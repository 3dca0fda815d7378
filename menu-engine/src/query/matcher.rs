//! Product Matchers
//!
//! Per-product predicates for the filter pipeline: free-text search,
//! tag-set operators, price bounds. All functions are pure; the pipeline
//! decides which to apply.

use std::collections::HashSet;

use shared::models::Product;
use shared::query::{MenuFilter, PriceRange};

use super::TagIndex;

/// Normalize a raw search term: trim and lowercase
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize a term for slug comparison (slugs are hyphen-separated)
pub fn slug_term(term: &str) -> String {
    term.replace(' ', "-")
}

/// Whether a product matches a normalized search term.
///
/// Matches on substrings of name, slug (hyphen-normalized term), and
/// description, or on a bound tag's display name.
pub fn matches_search(product: &Product, term: &str, tags: &TagIndex) -> bool {
    if term.is_empty() {
        return true;
    }

    if product.name.to_lowercase().contains(term) {
        return true;
    }
    if product.slug.to_lowercase().contains(&slug_term(term)) {
        return true;
    }
    if let Some(description) = &product.description
        && description.to_lowercase().contains(term)
    {
        return true;
    }

    product
        .tags
        .iter()
        .filter_map(|bind| tags.name(&bind.tag_id))
        .any(|name| name.contains(term))
}

/// Whether a product passes every tag-set dimension present in the filter.
///
/// Given the product's tag-id set T:
/// - ALL:     every listed id is in T
/// - ANY:     at least one listed id is in T
/// - NOT_ALL: reject only when T contains the whole listed set
/// - NOT_ANY: reject when T contains any listed id
///
/// Empty id lists are treated as "dimension absent".
pub fn matches_tag_sets(product: &Product, filter: &MenuFilter) -> bool {
    let tag_set: HashSet<&str> = product.tags.iter().map(|b| b.tag_id.as_str()).collect();
    let has = |id: &String| tag_set.contains(id.as_str());

    if let Some(ids) = &filter.tags_id_all
        && !ids.is_empty()
        && !ids.iter().all(has)
    {
        return false;
    }
    if let Some(ids) = &filter.tags_id_any
        && !ids.is_empty()
        && !ids.iter().any(has)
    {
        return false;
    }
    if let Some(ids) = &filter.tags_id_not_all
        && !ids.is_empty()
        && ids.iter().all(has)
    {
        return false;
    }
    if let Some(ids) = &filter.tags_id_not_any
        && !ids.is_empty()
        && ids.iter().any(has)
    {
        return false;
    }

    true
}

/// Whether a product passes a price range.
///
/// Unpriced products pass through; an unsatisfiable range (min > max)
/// rejects everything, priced or not.
pub fn matches_price(product: &Product, range: &PriceRange) -> bool {
    if range.is_unsatisfiable() {
        return false;
    }
    match product.price {
        Some(price) => range.contains(price),
        None => true,
    }
}
