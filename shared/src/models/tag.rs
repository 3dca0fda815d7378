//! Tag Model

use serde::{Deserialize, Serialize};

/// Tag entity
///
/// Referenced by ID from `Product::tags`; the full records are supplied
/// externally so search can match on display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}
