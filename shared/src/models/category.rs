//! Category Model

use serde::{Deserialize, Serialize};

use super::AvailabilityBind;

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// URL-safe handle, hyphen-separated
    pub slug: String,
    /// Natural ordering weight within the catalog
    #[serde(default)]
    pub priority: i32,
    pub is_active: bool,
    /// Parent category reference (hierarchy; not interpreted by the engine)
    pub parent_id: Option<String>,
    /// Outlet/channel availability (junction records)
    #[serde(default)]
    pub availability_binds: Vec<AvailabilityBind>,
}
