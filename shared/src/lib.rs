//! Shared types for the menu engine
//!
//! Catalog value types (products, categories, tags, bind records) and the
//! request-scoped query types exchanged between the catalog source, the
//! engine, and its callers.

pub mod models;
pub mod query;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Query re-exports (for the filter/sort dispatch pattern)
pub use query::{MenuFilter, PaginatedResponse, PriceRange, SortBy, SortOrder};
