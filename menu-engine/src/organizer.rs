//! Menu Organizer
//!
//! Joins the raw category and product collections into the organized view:
//! each category paired with the products bound to it, plus the bucket of
//! products carrying no category bind at all.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use shared::models::{Category, Product};

/// A category together with the products bound to it, in product input order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizedCategory {
    pub category: Category,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Derived view over one snapshot; rebuilt whenever the snapshot changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizedMenu {
    /// Categories in snapshot input order
    pub organized: Vec<OrganizedCategory>,
    /// Products with an empty `category_binds` list, each exactly once
    pub uncategorized: Vec<Product>,
}

/// Build the organized view from one snapshot.
///
/// Products are grouped through a category-id index in a single pass, so
/// the cost is O(products × binds) plus O(categories). Input order is
/// preserved on both axes; a product bound to several known categories
/// appears in each of their lists.
///
/// A product whose binds all reference category IDs absent from the
/// snapshot is excluded from both the per-category lists and the
/// uncategorized bucket: it is bound, so it is not "uncategorized", but
/// none of its targets are in scope.
pub fn organize(categories: &[Category], products: &[Product]) -> OrganizedMenu {
    let known: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();

    let mut by_category: HashMap<&str, Vec<Product>> = HashMap::new();
    let mut uncategorized = Vec::new();

    for product in products {
        if product.category_binds.is_empty() {
            uncategorized.push(product.clone());
            continue;
        }

        let mut placed = false;
        for bind in &product.category_binds {
            if known.contains(bind.category_id.as_str()) {
                by_category
                    .entry(bind.category_id.as_str())
                    .or_default()
                    .push(product.clone());
                placed = true;
            }
        }

        if !placed {
            tracing::debug!(
                product_id = %product.id,
                "every category bind targets an unknown category, excluding from view"
            );
        }
    }

    let organized = categories
        .iter()
        .map(|category| OrganizedCategory {
            products: by_category.remove(category.id.as_str()).unwrap_or_default(),
            category: category.clone(),
        })
        .collect();

    OrganizedMenu {
        organized,
        uncategorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CategoryBind, Nutrition};

    fn make_category(id: &str) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_string(),
            slug: id.to_string(),
            priority: 0,
            is_active: true,
            parent_id: None,
            availability_binds: vec![],
        }
    }

    fn make_product(id: &str, bound_to: &[&str]) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            slug: id.to_string(),
            description: None,
            image: String::new(),
            is_active: true,
            price: None,
            priority: 0,
            nutrition: Nutrition::default(),
            tags: vec![],
            category_binds: bound_to
                .iter()
                .map(|c| CategoryBind {
                    category_id: c.to_string(),
                    priority: 0,
                })
                .collect(),
            availability_binds: vec![],
        }
    }

    #[test]
    fn test_empty_snapshot() {
        let menu = organize(&[], &[]);
        assert!(menu.organized.is_empty());
        assert!(menu.uncategorized.is_empty());
    }

    #[test]
    fn test_products_grouped_in_input_order() {
        let categories = vec![make_category("c1"), make_category("c2")];
        let products = vec![
            make_product("p1", &["c2"]),
            make_product("p2", &["c1"]),
            make_product("p3", &["c2"]),
        ];

        let menu = organize(&categories, &products);
        assert_eq!(menu.organized[0].category.id, "c1");
        let ids: Vec<&str> = menu.organized[1]
            .products
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["p1", "p3"]);
    }

    #[test]
    fn test_unbound_product_lands_in_uncategorized_once() {
        let categories = vec![make_category("c1"), make_category("c2")];
        let products = vec![make_product("loose", &[])];

        let menu = organize(&categories, &products);
        assert_eq!(menu.uncategorized.len(), 1);
        assert!(menu.organized.iter().all(|oc| oc.products.is_empty()));
    }

    #[test]
    fn test_multi_bound_product_appears_in_each_category() {
        let categories = vec![make_category("c1"), make_category("c2")];
        let products = vec![make_product("both", &["c1", "c2"])];

        let menu = organize(&categories, &products);
        assert_eq!(menu.organized[0].products.len(), 1);
        assert_eq!(menu.organized[1].products.len(), 1);
        assert!(menu.uncategorized.is_empty());
    }

    #[test]
    fn test_unknown_bind_excluded_from_both() {
        let categories = vec![make_category("c1")];
        let products = vec![make_product("ghost", &["missing"])];

        let menu = organize(&categories, &products);
        assert!(menu.organized[0].products.is_empty());
        assert!(menu.uncategorized.is_empty());
    }

    #[test]
    fn test_partially_known_binds_keep_known_placements() {
        let categories = vec![make_category("c1")];
        let products = vec![make_product("partial", &["missing", "c1"])];

        let menu = organize(&categories, &products);
        assert_eq!(menu.organized[0].products.len(), 1);
        assert!(menu.uncategorized.is_empty());
    }

    #[test]
    fn test_partition_invariant() {
        let categories = vec![make_category("c1"), make_category("c2")];
        let products = vec![
            make_product("p1", &["c1"]),
            make_product("p2", &[]),
            make_product("p3", &["missing"]),
        ];

        let menu = organize(&categories, &products);
        let categorized: usize = menu.organized.iter().map(|oc| oc.products.len()).sum();
        // p1 categorized, p2 uncategorized, p3 in neither
        assert_eq!(categorized, 1);
        assert_eq!(menu.uncategorized.len(), 1);
    }
}
