//! Query request types
//!
//! The request-scoped filter value object and the sort/pagination types
//! that accompany it. Filters compose as a logical AND across dimensions;
//! an absent field means "no constraint from this dimension".

use serde::{Deserialize, Serialize};

/// Sort strategy for product lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    /// Lexicographic by display name (case-insensitive)
    Name,
    /// By price; unpriced products sort as 0
    Price,
    /// By catalog popularity weight, highest first in natural order
    #[serde(alias = "PRIORITY")]
    Popularity,
    /// By the product's bind priority within an anchor category
    #[serde(alias = "CATEGORY")]
    CategoryPriority,
}

/// Sort direction; `Desc` reverses the strategy's natural order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Inclusive price bounds in minor currency units
///
/// `min > max` is an unsatisfiable range: no product, priced or not,
/// can pass it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

impl PriceRange {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    /// True when both bounds exist and contradict each other
    pub fn is_unsatisfiable(&self) -> bool {
        matches!((self.min, self.max), (Some(lo), Some(hi)) if lo > hi)
    }

    /// Whether a defined price falls within the supplied bounds
    pub fn contains(&self, price: i64) -> bool {
        self.min.map_or(true, |lo| price >= lo) && self.max.map_or(true, |hi| price <= hi)
    }
}

/// Menu filter - request-scoped, never persisted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuFilter {
    /// Free-text search term (matched case-insensitively, pre-trimmed by the engine)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    /// Restrict to exactly one category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Restrict to a set of categories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<String>>,
    /// Keep products carrying every listed tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_id_all: Option<Vec<String>>,
    /// Keep products carrying at least one listed tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_id_any: Option<Vec<String>>,
    /// Reject products carrying every listed tag (some-but-not-all is kept)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_id_not_all: Option<Vec<String>>,
    /// Reject products carrying any listed tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_id_not_any: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    /// Keep products whose active flag equals the given value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl MenuFilter {
    /// Filter with no constraints (passes everything through)
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter on a free-text search term
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    /// Restrict to one category
    pub fn for_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Restrict to a category set
    pub fn for_categories(mut self, category_ids: Vec<String>) -> Self {
        self.category_ids = Some(category_ids);
        self
    }

    /// Require every listed tag
    pub fn tags_all(mut self, tag_ids: Vec<String>) -> Self {
        self.tags_id_all = Some(tag_ids);
        self
    }

    /// Require at least one listed tag
    pub fn tags_any(mut self, tag_ids: Vec<String>) -> Self {
        self.tags_id_any = Some(tag_ids);
        self
    }

    /// Reject products carrying the full listed tag set
    pub fn tags_not_all(mut self, tag_ids: Vec<String>) -> Self {
        self.tags_id_not_all = Some(tag_ids);
        self
    }

    /// Reject products carrying any listed tag
    pub fn tags_not_any(mut self, tag_ids: Vec<String>) -> Self {
        self.tags_id_not_any = Some(tag_ids);
        self
    }

    /// Bound prices (minor currency units); either bound may be open
    pub fn price_between(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.price_range = Some(PriceRange::new(min, max));
        self
    }

    /// Constrain the active flag
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Add a sort strategy
    pub fn order_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Reverse the sort direction
    pub fn descending(mut self) -> Self {
        self.sort_order = Some(SortOrder::Desc);
        self
    }

    /// True when no dimension is set
    pub fn is_empty(&self) -> bool {
        self.search_term.is_none()
            && self.category_id.is_none()
            && self.category_ids.is_none()
            && self.tags_id_all.is_none()
            && self.tags_id_any.is_none()
            && self.tags_id_not_all.is_none()
            && self.tags_id_not_any.is_none()
            && self.price_range.is_none()
            && self.is_active.is_none()
    }
}

/// Paginated response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    /// Page number (1-based)
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit > 0 {
            ((total as f64) / (limit as f64)).ceil() as u32
        } else {
            1
        };

        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Single-page response (when pagination is not requested)
    pub fn single_page(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Self {
            data,
            total,
            page: 1,
            limit: total as u32,
            total_pages: 1,
        }
    }
}
