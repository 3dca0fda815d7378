//! Menu Validator
//!
//! Structural-health findings over an organized view. Findings are
//! advisory: none of them blocks a query cycle. Each finding kind maps to
//! exactly one remediation string.

use serde::{Deserialize, Serialize};
use shared::models::Product;

use crate::organizer::OrganizedCategory;

use super::distinct_products;

/// Finding kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    EmptyCategories,
    UncategorizedProducts,
    MissingPrice,
    MissingImage,
}

impl IssueKind {
    /// The single remediation for this finding kind
    pub fn recommendation(self) -> &'static str {
        match self {
            Self::EmptyCategories => {
                "Assign products to empty categories or deactivate the categories"
            }
            Self::UncategorizedProducts => {
                "Review category binds so every product belongs to at least one category"
            }
            Self::MissingPrice => "Set a price on unpriced products before they are sold",
            Self::MissingImage => "Upload an image for products that have none",
        }
    }
}

/// A single structural finding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    /// How many entities the finding covers
    pub count: usize,
    pub message: String,
}

/// Validation result over one view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub issues: Vec<ValidationIssue>,
    /// One entry per issue, in issue order
    pub recommendations: Vec<String>,
}

/// Validate the structural health of an organized view.
pub fn validate(organized: &[OrganizedCategory], uncategorized: &[Product]) -> ValidationReport {
    let products = distinct_products(organized, uncategorized);
    let mut issues = Vec::new();

    let empty_categories = organized
        .iter()
        .filter(|oc| oc.products.is_empty())
        .count();
    if empty_categories > 0 {
        issues.push(ValidationIssue {
            kind: IssueKind::EmptyCategories,
            count: empty_categories,
            message: format!("{empty_categories} categories have no products"),
        });
    }

    if !uncategorized.is_empty() {
        issues.push(ValidationIssue {
            kind: IssueKind::UncategorizedProducts,
            count: uncategorized.len(),
            message: format!("{} products are not bound to any category", uncategorized.len()),
        });
    }

    let missing_price = products.iter().filter(|p| p.price.is_none()).count();
    if missing_price > 0 {
        issues.push(ValidationIssue {
            kind: IssueKind::MissingPrice,
            count: missing_price,
            message: format!("{missing_price} products have no price"),
        });
    }

    let missing_image = products.iter().filter(|p| p.image.is_empty()).count();
    if missing_image > 0 {
        issues.push(ValidationIssue {
            kind: IssueKind::MissingImage,
            count: missing_image,
            message: format!("{missing_image} products have no image"),
        });
    }

    let recommendations = issues
        .iter()
        .map(|issue| issue.kind.recommendation().to_string())
        .collect();

    ValidationReport {
        is_valid: issues.is_empty(),
        issues,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Category, CategoryBind, Nutrition};

    use crate::organizer::organize;

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

    fn make_product(id: &str, category: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            slug: id.to_string(),
            description: None,
            image: "hash".to_string(),
            is_active: true,
            price: Some(100),
            priority: 0,
            nutrition: Nutrition::default(),
            tags: vec![],
            category_binds: category
                .map(|c| {
                    vec![CategoryBind {
                        category_id: c.to_string(),
                        priority: 0,
                    }]
                })
                .unwrap_or_default(),
            availability_binds: vec![],
        }
    }

    #[test]
    fn test_healthy_view_is_valid() {
        let categories = vec![make_category("c1")];
        let products = vec![make_product("p1", Some("c1"))];
        let menu = organize(&categories, &products);
        let report = validate(&menu.organized, &menu.uncategorized);

        assert!(report.is_valid);
        assert!(report.issues.is_empty());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_each_finding_kind_is_reported_once() {
        let categories = vec![make_category("c1"), make_category("empty")];
        let mut unpriced = make_product("p1", Some("c1"));
        unpriced.price = None;
        let mut bare = make_product("p2", Some("c1"));
        bare.image.clear();
        let loose = make_product("p3", None);

        let menu = organize(&categories, &[unpriced, bare, loose]);
        let report = validate(&menu.organized, &menu.uncategorized);

        assert!(!report.is_valid);
        let kinds: Vec<IssueKind> = report.issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::EmptyCategories,
                IssueKind::UncategorizedProducts,
                IssueKind::MissingPrice,
                IssueKind::MissingImage,
            ]
        );
        // one recommendation per issue, same order
        assert_eq!(report.recommendations.len(), report.issues.len());
        assert_eq!(
            report.recommendations[2],
            IssueKind::MissingPrice.recommendation()
        );
    }

    #[test]
    fn test_counts_cover_all_flagged_entities() {
        let categories = vec![make_category("c1")];
        let mut a = make_product("p1", Some("c1"));
        a.price = None;
        let mut b = make_product("p2", Some("c1"));
        b.price = None;

        let menu = organize(&categories, &[a, b]);
        let report = validate(&menu.organized, &menu.uncategorized);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].count, 2);
    }
}
