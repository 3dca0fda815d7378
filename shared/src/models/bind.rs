//! Bind Records
//!
//! Many-to-many association records. Each bind carries the ordering
//! priority of the association itself, not of either endpoint.

use serde::{Deserialize, Serialize};

/// Product-to-category association
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBind {
    /// Category reference (String ID)
    pub category_id: String,
    /// Ordering of the product within that category
    #[serde(default)]
    pub priority: i32,
}

/// Product-to-tag association
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagBind {
    /// Tag reference (String ID)
    pub tag_id: String,
    #[serde(default)]
    pub priority: i32,
}

/// Availability of a product or category at an outlet over a fulfillment channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityBind {
    /// Outlet reference (String ID)
    pub outlet_id: String,
    /// Fulfillment channel identifier (owned by the catalog source)
    pub channel: String,
}
