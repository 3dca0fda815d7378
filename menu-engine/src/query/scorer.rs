//! Relevance Scorer
//!
//! Deterministic additive scoring of products and categories against a
//! normalized search term. A score of 0 means "does not match" and the
//! item is excluded from ranked results. Used for ordering a result set;
//! the pipeline's substring predicate handles basic inclusion.

use serde::{Deserialize, Serialize};
use shared::models::{Category, Product};

use super::TagIndex;
use super::matcher::slug_term;

const SCORE_NAME_EXACT: u32 = 100;
const SCORE_NAME_PREFIX: u32 = 80;
const SCORE_NAME_CONTAINS: u32 = 60;
const SCORE_SLUG_EXACT: u32 = 90;
const SCORE_SLUG_CONTAINS: u32 = 50;
const SCORE_DESCRIPTION_CONTAINS: u32 = 30;
const SCORE_TAG_EXACT: u32 = 70;
const SCORE_TAG_CONTAINS: u32 = 40;
const SCORE_ACTIVE_BONUS: u32 = 10;
const SCORE_NUTRITION_KEYWORD: u32 = 20;

const SCORE_CATEGORY_EXACT: u32 = 90;
const SCORE_CATEGORY_PREFIX: u32 = 70;
const SCORE_CATEGORY_CONTAINS: u32 = 50;

const CALORIE_KEYWORDS: &[&str] = &["calorie", "calories", "kcal"];
const PROTEIN_KEYWORDS: &[&str] = &["protein", "proteins"];
const FAT_KEYWORDS: &[&str] = &["fat", "fats"];
const CARB_KEYWORDS: &[&str] = &["carb", "carbs", "carbohydrate", "carbohydrates"];

/// A product paired with its relevance score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredProduct {
    pub product: Product,
    pub score: u32,
}

/// Score a product against a normalized (trimmed, lowercased) term.
///
/// Points are additive across fields; within a field the strongest rule
/// wins (exact supersedes prefix supersedes contains, so nothing is
/// double counted). The active bonus only applies to products that
/// already matched, keeping "score 0" equivalent to "excluded by the
/// substring predicate".
pub fn score_product(product: &Product, term: &str, tags: &TagIndex) -> u32 {
    if term.is_empty() {
        return 0;
    }

    let mut score = 0;

    let name = product.name.to_lowercase();
    if name == term {
        score += SCORE_NAME_EXACT;
    } else if name.starts_with(term) {
        score += SCORE_NAME_PREFIX;
    } else if name.contains(term) {
        score += SCORE_NAME_CONTAINS;
    }

    let slug = product.slug.to_lowercase();
    let slug_needle = slug_term(term);
    if slug == slug_needle {
        score += SCORE_SLUG_EXACT;
    } else if slug.contains(&slug_needle) {
        score += SCORE_SLUG_CONTAINS;
    }

    if let Some(description) = &product.description
        && description.to_lowercase().contains(term)
    {
        score += SCORE_DESCRIPTION_CONTAINS;
    }

    score += tag_score(product, term, tags);
    score += nutrition_keyword_score(product, term);

    if score == 0 {
        return 0;
    }
    if product.is_active {
        score += SCORE_ACTIVE_BONUS;
    }
    score
}

/// Score a category name against a normalized term
pub fn score_category(category: &Category, term: &str) -> u32 {
    if term.is_empty() {
        return 0;
    }
    let name = category.name.to_lowercase();
    if name == term {
        SCORE_CATEGORY_EXACT
    } else if name.starts_with(term) {
        SCORE_CATEGORY_PREFIX
    } else if name.contains(term) {
        SCORE_CATEGORY_CONTAINS
    } else {
        0
    }
}

/// Rank products by descending relevance, dropping non-matches.
///
/// Ties keep the stable input order (the upstream catalog's canonical
/// order) - a documented policy, not an implementation accident.
pub fn rank_products(products: &[Product], term: &str, tags: &TagIndex) -> Vec<ScoredProduct> {
    let mut ranked: Vec<ScoredProduct> = products
        .iter()
        .map(|p| ScoredProduct {
            score: score_product(p, term, tags),
            product: p.clone(),
        })
        .filter(|s| s.score > 0)
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// One award per product: an exact tag-name match supersedes a contains
/// match even when different tags would earn both.
fn tag_score(product: &Product, term: &str, tags: &TagIndex) -> u32 {
    let mut contains = false;
    for bind in &product.tags {
        if let Some(name) = tags.name(&bind.tag_id) {
            if name == term {
                return SCORE_TAG_EXACT;
            }
            if name.contains(term) {
                contains = true;
            }
        }
    }
    if contains { SCORE_TAG_CONTAINS } else { 0 }
}

/// +20 per recognized nutrition keyword group whose nutrient the product
/// populates ("high protein" scores products with protein data).
fn nutrition_keyword_score(product: &Product, term: &str) -> u32 {
    let groups: [(&[&str], bool); 4] = [
        (CALORIE_KEYWORDS, product.nutrition.calories.is_some()),
        (PROTEIN_KEYWORDS, product.nutrition.protein.is_some()),
        (FAT_KEYWORDS, product.nutrition.fat.is_some()),
        (CARB_KEYWORDS, product.nutrition.carbohydrate.is_some()),
    ];

    groups
        .iter()
        .filter(|(keywords, populated)| *populated && keywords.iter().any(|k| term.contains(k)))
        .count() as u32
        * SCORE_NUTRITION_KEYWORD
}
