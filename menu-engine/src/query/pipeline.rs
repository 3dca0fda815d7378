//! Filter Pipeline
//!
//! Applies the AND-composed filter dimensions to an organized view. Each
//! dimension, if present, narrows the result; the stages commute (pure set
//! intersection) but run in a fixed reference order so that cheap
//! category scoping precedes per-product checks.

use shared::models::Product;
use shared::query::MenuFilter;

use crate::organizer::OrganizedCategory;

use super::TagIndex;
use super::matcher::{matches_price, matches_search, matches_tag_sets, normalize_term};

/// Narrow an organized view by a filter.
///
/// Stage order: search → category scope → tag sets → price range →
/// active flag. Only the search stage governs category retention: a
/// category left without matching products is dropped from the result
/// (matching by category name alone does not retain it). Category scoping
/// always clears the uncategorized bucket, since an uncategorized product
/// can belong to no scope. Other stages keep emptied categories in place.
pub fn apply_filters(
    organized: &[OrganizedCategory],
    uncategorized: &[Product],
    filter: &MenuFilter,
    tags: &TagIndex,
) -> (Vec<OrganizedCategory>, Vec<Product>) {
    let mut organized: Vec<OrganizedCategory> = organized.to_vec();
    let mut uncategorized: Vec<Product> = uncategorized.to_vec();

    // Search
    if let Some(raw) = &filter.search_term {
        let term = normalize_term(raw);
        if !term.is_empty() {
            for oc in &mut organized {
                oc.products.retain(|p| matches_search(p, &term, tags));
            }
            organized.retain(|oc| !oc.products.is_empty());
            uncategorized.retain(|p| matches_search(p, &term, tags));
        }
    }

    // Category scope
    if let Some(id) = &filter.category_id {
        organized.retain(|oc| &oc.category.id == id);
        uncategorized.clear();
    }
    if let Some(ids) = &filter.category_ids {
        organized.retain(|oc| ids.contains(&oc.category.id));
        uncategorized.clear();
    }

    // Per-product dimensions: tag sets, price range, active flag
    let keep = |p: &Product| -> bool {
        if !matches_tag_sets(p, filter) {
            return false;
        }
        if let Some(range) = &filter.price_range
            && !matches_price(p, range)
        {
            return false;
        }
        if let Some(active) = filter.is_active
            && p.is_active != active
        {
            return false;
        }
        true
    };

    for oc in &mut organized {
        oc.products.retain(|p| keep(p));
    }
    uncategorized.retain(|p| keep(p));

    (organized, uncategorized)
}
