//! Filter on the broad topic groups (Operations, People, ...).

use crate::traits::Filter;
use anyhow::Result;
use content_loader::ContentItem;
use search_state::{SearchContext, Taxonomy, TopicGroup};
use std::sync::Arc;

/// Keeps items belonging to any selected parent topic.
///
/// ## Algorithm
/// An item belongs to a parent when either
/// 1. its category is the parent's mapped category, or
/// 2. one of its tags equals (case-insensitively) one of the parent's
///    subtopic names.
///
/// Parents unknown to the taxonomy match nothing.
pub struct ParentTopicFilter {
    taxonomy: Arc<Taxonomy>,
}

impl ParentTopicFilter {
    /// Create a new ParentTopicFilter.
    ///
    /// # Arguments
    /// * `taxonomy` - Shared topic taxonomy for parent/subtopic lookups
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    fn belongs_to(item: &ContentItem, group: &TopicGroup) -> bool {
        group.category == Some(item.category)
            || item.tags.iter().any(|tag| {
                let tag = tag.to_lowercase();
                group.subtopics.iter().any(|sub| sub.to_lowercase() == tag)
            })
    }
}

impl Filter for ParentTopicFilter {
    fn name(&self) -> &str {
        "ParentTopicFilter"
    }

    fn apply<'a>(
        &self,
        items: Vec<&'a ContentItem>,
        context: &SearchContext,
    ) -> Result<Vec<&'a ContentItem>> {
        if context.filters.parent_topics().next().is_none() {
            return Ok(items);
        }
        let groups: Vec<&TopicGroup> = context
            .filters
            .parent_topics()
            .filter_map(|name| {
                let group = self.taxonomy.parent(name);
                if group.is_none() {
                    tracing::debug!("Parent topic '{}' is not in the taxonomy", name);
                }
                group
            })
            .collect();

        let filtered = items
            .into_iter()
            .filter(|item| groups.iter().any(|group| Self::belongs_to(item, group)))
            .collect();
        Ok(filtered)
    }
}
