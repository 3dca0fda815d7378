//! Menu query, filtering, and ranking engine
//!
//! Pure derivation layer over an immutable catalog snapshot supplied by an
//! external source: joins products to categories through their bind
//! records, applies AND-composed filters, sorts with pluggable stable
//! strategies, scores free-text relevance, and reports structural health.
//!
//! Every operation is a pure function from (snapshot, filter) to a freshly
//! allocated result. The engine holds no state, performs no I/O, and never
//! mutates its inputs, so concurrent callers can share one snapshot
//! without locking.

pub mod organizer;
pub mod query;
pub mod report;

// Re-exports
pub use organizer::{OrganizedCategory, OrganizedMenu, organize};
pub use query::engine::{MenuView, paginate_products, query_menu};
pub use query::pipeline::apply_filters;
pub use query::scorer::{ScoredProduct, rank_products, score_category, score_product};
pub use query::sorter::{SortFallback, SortOutcome, sort_products};
pub use query::TagIndex;
pub use report::statistics::{
    MenuStatistics, NutritionAverages, PriceDistribution, TagUsage, compute_statistics,
};
pub use report::validator::{IssueKind, ValidationIssue, ValidationReport, validate};
