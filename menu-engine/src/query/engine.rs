//! Menu Query Engine
//!
//! The composite entry point: chains Organizer → Filter Pipeline → Sorter
//! (or relevance ranking) in the documented order and returns one
//! freshly allocated, cache-friendly view.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared::models::{Category, Product, Tag};
use shared::query::{MenuFilter, PaginatedResponse, SortBy};

use crate::organizer::{OrganizedCategory, organize};

use super::TagIndex;
use super::matcher::normalize_term;
use super::pipeline::apply_filters;
use super::scorer::rank_products;
use super::sorter::{SortFallback, sort_products};

/// One query cycle's result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuView {
    /// Categories that survived filtering, in snapshot order
    pub categories: Vec<OrganizedCategory>,
    pub uncategorized: Vec<Product>,
    /// Distinct products across the whole view
    pub total_products: usize,
    pub total_categories: usize,
    /// Set when a requested sort strategy fell back to input order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_fallback: Option<SortFallback>,
}

/// Run one query cycle over a snapshot.
///
/// When `sort_by` is present each product list is sorted with it; the
/// `CategoryPriority` strategy anchors each category list to its own
/// category, while the uncategorized bucket has no anchor and records the
/// fallback instead. Without an explicit sort, a present search term
/// ranks every list by descending relevance (stable ties).
pub fn query_menu(
    categories: &[Category],
    products: &[Product],
    tags: &[Tag],
    filter: &MenuFilter,
) -> MenuView {
    let menu = organize(categories, products);
    let tag_index = TagIndex::build(tags);

    let (mut organized, mut uncategorized) =
        apply_filters(&menu.organized, &menu.uncategorized, filter, &tag_index);

    let mut sort_fallback = None;
    let order = filter.sort_order.unwrap_or_default();
    let term = filter
        .search_term
        .as_deref()
        .map(normalize_term)
        .filter(|t| !t.is_empty());

    if let Some(sort_by) = filter.sort_by {
        for oc in &mut organized {
            let anchor = match sort_by {
                SortBy::CategoryPriority => Some(oc.category.id.clone()),
                _ => None,
            };
            let outcome = sort_products(
                std::mem::take(&mut oc.products),
                sort_by,
                order,
                anchor.as_deref(),
            );
            oc.products = outcome.products;
            if sort_fallback.is_none() {
                sort_fallback = outcome.fallback;
            }
        }
        if !uncategorized.is_empty() {
            let outcome = sort_products(std::mem::take(&mut uncategorized), sort_by, order, None);
            uncategorized = outcome.products;
            if sort_fallback.is_none() {
                sort_fallback = outcome.fallback;
            }
        }
    } else if let Some(term) = &term {
        for oc in &mut organized {
            oc.products = rank_products(&oc.products, term, &tag_index)
                .into_iter()
                .map(|s| s.product)
                .collect();
        }
        uncategorized = rank_products(&uncategorized, term, &tag_index)
            .into_iter()
            .map(|s| s.product)
            .collect();
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for product in organized
        .iter()
        .flat_map(|oc| oc.products.iter())
        .chain(uncategorized.iter())
    {
        seen.insert(product.id.as_str());
    }
    let total_products = seen.len();
    let total_categories = organized.len();

    tracing::debug!(
        total_products,
        total_categories,
        uncategorized = uncategorized.len(),
        "menu query complete"
    );

    MenuView {
        categories: organized,
        uncategorized,
        total_products,
        total_categories,
        sort_fallback,
    }
}

/// Slice a stable-sorted product list into a pagination envelope.
///
/// `page` is 1-based; page 0 is treated as page 1. A zero `limit` yields
/// a single page with everything.
pub fn paginate_products(
    products: Vec<Product>,
    page: u32,
    limit: u32,
) -> PaginatedResponse<Product> {
    if limit == 0 {
        return PaginatedResponse::single_page(products);
    }

    let total = products.len() as u64;
    let page = page.max(1);
    let start = ((page - 1) as usize).saturating_mul(limit as usize);
    let data: Vec<Product> = products
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .collect();

    PaginatedResponse::new(data, total, page, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CategoryBind, Nutrition, TagBind};
    use shared::query::SortOrder;

    fn make_category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            priority: 0,
            is_active: true,
            parent_id: None,
            availability_binds: vec![],
        }
    }

    fn make_product(id: &str, name: &str, category: &str, bind_priority: i32) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: None,
            image: String::new(),
            is_active: true,
            price: Some(1000),
            priority: 0,
            nutrition: Nutrition::default(),
            tags: vec![],
            category_binds: vec![CategoryBind {
                category_id: category.to_string(),
                priority: bind_priority,
            }],
            availability_binds: vec![],
        }
    }

    fn snapshot() -> (Vec<Category>, Vec<Product>, Vec<Tag>) {
        let categories = vec![
            make_category("c:pizza", "Pizza"),
            make_category("c:drinks", "Drinks"),
        ];
        let mut margherita = make_product("p:1", "Margherita", "c:pizza", 2);
        margherita.tags = vec![TagBind {
            tag_id: "t:veg".to_string(),
            priority: 0,
        }];
        let diavola = make_product("p:2", "Diavola", "c:pizza", 1);
        let cola = make_product("p:3", "Cola", "c:drinks", 1);
        let tags = vec![Tag {
            id: "t:veg".to_string(),
            name: "Vegetarian".to_string(),
        }];
        (categories, vec![margherita, diavola, cola], tags)
    }

    #[test]
    fn test_query_menu_unfiltered() {
        let (categories, products, tags) = snapshot();
        let view = query_menu(&categories, &products, &tags, &MenuFilter::all());
        assert_eq!(view.total_categories, 2);
        assert_eq!(view.total_products, 3);
        assert!(view.sort_fallback.is_none());
    }

    #[test]
    fn test_query_menu_category_priority_anchors_per_category() {
        let (categories, products, tags) = snapshot();
        let filter = MenuFilter::all().order_by(SortBy::CategoryPriority);
        let view = query_menu(&categories, &products, &tags, &filter);

        let pizza_ids: Vec<&str> = view.categories[0]
            .products
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        // ordered by each product's bind priority within Pizza
        assert_eq!(pizza_ids, vec!["p:2", "p:1"]);
        // every product is categorized, so no fallback was recorded
        assert!(view.sort_fallback.is_none());
    }

    #[test]
    fn test_query_menu_records_fallback_for_uncategorized() {
        let (categories, mut products, tags) = snapshot();
        let mut loose = make_product("p:9", "Breadsticks", "c:pizza", 0);
        loose.category_binds.clear();
        products.push(loose);

        let filter = MenuFilter::all().order_by(SortBy::CategoryPriority);
        let view = query_menu(&categories, &products, &tags, &filter);
        assert_eq!(
            view.sort_fallback,
            Some(SortFallback::MissingAnchorCategory)
        );
    }

    #[test]
    fn test_query_menu_search_ranks_by_relevance() {
        let (categories, mut products, tags) = snapshot();
        // an exact-name match that appears after a prefix match in input order
        products.push(make_product("p:4", "Margherita Speciale", "c:pizza", 3));
        products.swap(0, 3);

        let filter = MenuFilter::search("margherita");
        let view = query_menu(&categories, &products, &tags, &filter);
        assert_eq!(view.total_categories, 1);
        let ids: Vec<&str> = view.categories[0]
            .products
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        // exact name outranks prefix regardless of input order
        assert_eq!(ids, vec!["p:1", "p:4"]);
    }

    #[test]
    fn test_total_products_counts_distinct_ids() {
        let (mut categories, mut products, tags) = snapshot();
        categories.push(make_category("c:specials", "Specials"));
        // bind an existing product into a second category
        products[0].category_binds.push(CategoryBind {
            category_id: "c:specials".to_string(),
            priority: 0,
        });

        let view = query_menu(&categories, &products, &tags, &MenuFilter::all());
        let occurrences: usize = view.categories.iter().map(|oc| oc.products.len()).sum();
        assert_eq!(occurrences, 4);
        assert_eq!(view.total_products, 3);
    }

    #[test]
    fn test_paginate_products() {
        let products: Vec<Product> = (0..7)
            .map(|i| make_product(&format!("p:{i}"), &format!("Item {i}"), "c:1", 0))
            .collect();

        let page = paginate_products(products.clone(), 2, 3);
        assert_eq!(page.total, 7);
        assert_eq!(page.total_pages, 3);
        let ids: Vec<&str> = page.data.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p:3", "p:4", "p:5"]);

        let tail = paginate_products(products.clone(), 3, 3);
        assert_eq!(tail.data.len(), 1);

        let all = paginate_products(products, 1, 0);
        assert_eq!(all.data.len(), 7);
        assert_eq!(all.total_pages, 1);
    }
}
