//! Menu Statistics
//!
//! Aggregate counts and distributions over an organized view. Decimal
//! fields are exact two-decimal roundings; distributions are absent (not
//! zeroed) when their population is empty.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::Product;

use crate::organizer::OrganizedCategory;

use super::distinct_products;

/// Price distribution over products with a defined positive price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceDistribution {
    /// Minor currency units
    pub min: i64,
    pub max: i64,
    pub mean: Decimal,
    pub median: Decimal,
}

/// Tag usage count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagUsage {
    pub tag_id: String,
    pub count: usize,
}

/// Per-nutrient averages, each over the products defining that field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionAverages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbohydrate: Option<Decimal>,
}

/// Aggregate view statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuStatistics {
    /// Distinct products across the view
    pub total_products: usize,
    pub active_products: usize,
    pub inactive_products: usize,
    pub total_categories: usize,
    pub categories_with_products: usize,
    pub empty_categories: usize,
    /// Mean list size over non-empty categories, two decimals
    pub avg_products_per_category: Decimal,
    /// Absent when no product has a defined positive price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceDistribution>,
    /// Top 10 tags by usage (count descending, tag ID ascending)
    pub tag_histogram: Vec<TagUsage>,
    /// Absent when no product exposes any nutrition field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionAverages>,
}

const TAG_HISTOGRAM_LIMIT: usize = 10;

/// Compute statistics over an organized view.
///
/// Pure aggregation: depends only on the view passed in, never on call
/// order, and allocates a fresh report per call.
pub fn compute_statistics(
    organized: &[OrganizedCategory],
    uncategorized: &[Product],
) -> MenuStatistics {
    let products = distinct_products(organized, uncategorized);

    let total_products = products.len();
    let active_products = products.iter().filter(|p| p.is_active).count();

    let categories_with_products = organized
        .iter()
        .filter(|oc| !oc.products.is_empty())
        .count();
    let categorized_occurrences: usize = organized.iter().map(|oc| oc.products.len()).sum();
    let avg_products_per_category = if categories_with_products > 0 {
        (Decimal::from(categorized_occurrences as u64)
            / Decimal::from(categories_with_products as u64))
        .round_dp(2)
    } else {
        Decimal::ZERO
    };

    MenuStatistics {
        total_products,
        active_products,
        inactive_products: total_products - active_products,
        total_categories: organized.len(),
        categories_with_products,
        empty_categories: organized.len() - categories_with_products,
        avg_products_per_category,
        price: price_distribution(&products),
        tag_histogram: tag_histogram(&products),
        nutrition: nutrition_averages(&products),
    }
}

fn price_distribution(products: &[&Product]) -> Option<PriceDistribution> {
    let mut prices: Vec<i64> = products
        .iter()
        .filter_map(|p| p.price)
        .filter(|&price| price > 0)
        .collect();
    if prices.is_empty() {
        return None;
    }
    prices.sort_unstable();

    let sum: i64 = prices.iter().sum();
    let mean = (Decimal::from(sum) / Decimal::from(prices.len() as u64)).round_dp(2);

    let mid = prices.len() / 2;
    let median = if prices.len() % 2 == 1 {
        Decimal::from(prices[mid])
    } else {
        ((Decimal::from(prices[mid - 1]) + Decimal::from(prices[mid])) / Decimal::TWO).round_dp(2)
    };

    Some(PriceDistribution {
        min: prices[0],
        max: prices[prices.len() - 1],
        mean,
        median,
    })
}

fn tag_histogram(products: &[&Product]) -> Vec<TagUsage> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for product in products {
        for bind in &product.tags {
            *counts.entry(bind.tag_id.as_str()).or_default() += 1;
        }
    }

    let mut histogram: Vec<TagUsage> = counts
        .into_iter()
        .map(|(tag_id, count)| TagUsage {
            tag_id: tag_id.to_string(),
            count,
        })
        .collect();
    // deterministic: frequency first, tag ID breaks ties
    histogram.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag_id.cmp(&b.tag_id)));
    histogram.truncate(TAG_HISTOGRAM_LIMIT);
    histogram
}

fn nutrition_averages(products: &[&Product]) -> Option<NutritionAverages> {
    if products.iter().all(|p| p.nutrition.is_empty()) {
        return None;
    }

    let average = |field: fn(&Product) -> Option<i32>| -> Option<Decimal> {
        let values: Vec<i64> = products
            .iter()
            .filter_map(|&p| field(p).map(i64::from))
            .collect();
        if values.is_empty() {
            return None;
        }
        let sum: i64 = values.iter().sum();
        Some((Decimal::from(sum) / Decimal::from(values.len() as u64)).round_dp(2))
    };

    Some(NutritionAverages {
        calories: average(|p| p.nutrition.calories),
        protein: average(|p| p.nutrition.protein),
        fat: average(|p| p.nutrition.fat),
        carbohydrate: average(|p| p.nutrition.carbohydrate),
    })
}
