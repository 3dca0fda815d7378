//! Product Model

use serde::{Deserialize, Serialize};

use super::{AvailabilityBind, CategoryBind, TagBind};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// URL-safe handle, hyphen-separated
    pub slug: String,
    pub description: Option<String>,
    /// Image hash or URL; empty string means no image
    #[serde(default)]
    pub image: String,
    pub is_active: bool,
    /// Price in minor currency units (cents); None = not priced for the current context
    pub price: Option<i64>,
    /// Catalog-supplied popularity weight
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub nutrition: Nutrition,
    /// Tag references (junction records)
    #[serde(default)]
    pub tags: Vec<TagBind>,
    /// Category references; empty means uncategorized.
    /// Entries reference distinct category IDs.
    #[serde(default)]
    pub category_binds: Vec<CategoryBind>,
    /// Outlet/channel availability (junction records)
    #[serde(default)]
    pub availability_binds: Vec<AvailabilityBind>,
}

impl Product {
    /// Whether the product carries a tag with the given ID
    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|b| b.tag_id == tag_id)
    }

    /// Bind priority of this product within the given category, if bound
    pub fn category_priority(&self, category_id: &str) -> Option<i32> {
        self.category_binds
            .iter()
            .find(|b| b.category_id == category_id)
            .map(|b| b.priority)
    }
}

/// Nutrition facts; each field is absent when the catalog does not track it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: Option<i32>,
    pub protein: Option<i32>,
    pub fat: Option<i32>,
    pub carbohydrate: Option<i32>,
}

impl Nutrition {
    /// True when no field is populated
    pub fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein.is_none()
            && self.fat.is_none()
            && self.carbohydrate.is_none()
    }
}
