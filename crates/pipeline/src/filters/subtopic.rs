//! Filter on individual subtopics (Aircraft, Remembrance, ...).

use super::contains_lowercase;
use crate::traits::Filter;
use anyhow::Result;
use content_loader::ContentItem;
use search_state::SearchContext;

/// Keeps items where any selected subtopic appears, case-insensitively, in
/// a tag, the category name or the description.
///
/// Unlike `ParentTopicFilter` this is a substring match, so "Training"
/// also catches a tag such as "Training exercises".
pub struct SubtopicFilter;

impl Filter for SubtopicFilter {
    fn name(&self) -> &str {
        "SubtopicFilter"
    }

    fn apply<'a>(
        &self,
        items: Vec<&'a ContentItem>,
        context: &SearchContext,
    ) -> Result<Vec<&'a ContentItem>> {
        let subtopics: Vec<String> = context
            .filters
            .subtopics()
            .map(str::to_lowercase)
            .collect();
        if subtopics.is_empty() {
            return Ok(items);
        }

        let filtered = items
            .into_iter()
            .filter(|item| {
                subtopics.iter().any(|sub| {
                    item.tags.iter().any(|tag| contains_lowercase(tag, sub))
                        || item.category.as_str().contains(sub.as_str())
                        || contains_lowercase(&item.description, sub)
                })
            })
            .collect();
        Ok(filtered)
    }
}
