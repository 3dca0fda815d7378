//! Product Sorter
//!
//! Stable, pluggable sort strategies over product lists. Equal keys keep
//! their relative input order, which is the upstream catalog's canonical
//! order; reproducible pagination depends on this.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use shared::models::Product;
use shared::query::{SortBy, SortOrder};
use thiserror::Error;

/// A sort strategy that could not be satisfied with the supplied context.
///
/// The products come back in stable input order instead; callers inspect
/// the outcome to detect the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortFallback {
    #[error("category-priority sort requested without an anchor category")]
    MissingAnchorCategory,
}

/// Result of a sort request
#[derive(Debug, Clone)]
pub struct SortOutcome {
    pub products: Vec<Product>,
    /// Set when the strategy was unsatisfiable and input order was kept
    pub fallback: Option<SortFallback>,
}

/// Sort a product list with the given strategy and direction.
///
/// `order` reverses the strategy's natural order in the comparator, so
/// ties are never reordered in either direction. `Popularity`'s natural
/// order puts the highest priority first; the other strategies ascend.
/// `CategoryPriority` orders by the product's bind priority to
/// `anchor_category` (missing bind sorts as 0) and falls back to input
/// order when no anchor is supplied.
pub fn sort_products(
    mut products: Vec<Product>,
    sort_by: SortBy,
    order: SortOrder,
    anchor_category: Option<&str>,
) -> SortOutcome {
    match sort_by {
        SortBy::Name => {
            products.sort_by(|a, b| {
                directed(order, a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            });
        }
        SortBy::Price => {
            products
                .sort_by(|a, b| directed(order, a.price.unwrap_or(0).cmp(&b.price.unwrap_or(0))));
        }
        SortBy::Popularity => {
            // natural order is descending priority
            products.sort_by(|a, b| directed(order, b.priority.cmp(&a.priority)));
        }
        SortBy::CategoryPriority => {
            let Some(anchor) = anchor_category else {
                tracing::warn!("category-priority sort without anchor, keeping input order");
                return SortOutcome {
                    products,
                    fallback: Some(SortFallback::MissingAnchorCategory),
                };
            };
            products.sort_by(|a, b| {
                let ka = a.category_priority(anchor).unwrap_or(0);
                let kb = b.category_priority(anchor).unwrap_or(0);
                directed(order, ka.cmp(&kb))
            });
        }
    }

    SortOutcome {
        products,
        fallback: None,
    }
}

fn directed(order: SortOrder, ordering: Ordering) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}
