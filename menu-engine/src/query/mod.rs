//! Query layer
//!
//! Filter pipeline, sorters, and the relevance scorer, plus the composite
//! entry point that chains them in the documented order.

pub mod engine;
pub mod matcher;
pub mod pipeline;
pub mod scorer;
pub mod sorter;

use std::collections::HashMap;

use shared::models::Tag;

/// Lookup of lowercased tag display names by tag ID.
///
/// Built once per query from the externally supplied tag collection;
/// search and scoring match against display names, not IDs.
#[derive(Debug, Default)]
pub struct TagIndex {
    names: HashMap<String, String>,
}

impl TagIndex {
    pub fn build(tags: &[Tag]) -> Self {
        Self {
            names: tags
                .iter()
                .map(|t| (t.id.clone(), t.name.to_lowercase()))
                .collect(),
        }
    }

    /// Lowercased display name for a tag ID, if the tag is known
    pub fn name(&self, tag_id: &str) -> Option<&str> {
        self.names.get(tag_id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_index_lowercases_names() {
        let tags = vec![
            Tag {
                id: "tag:1".to_string(),
                name: "Spicy".to_string(),
            },
            Tag {
                id: "tag:2".to_string(),
                name: "Gluten-Free".to_string(),
            },
        ];
        let index = TagIndex::build(&tags);
        assert_eq!(index.name("tag:1"), Some("spicy"));
        assert_eq!(index.name("tag:2"), Some("gluten-free"));
        assert_eq!(index.name("tag:3"), None);
    }
}
