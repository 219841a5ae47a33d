//! Free-text search over the visible text fields of an item.

use super::contains_lowercase;
use crate::traits::Filter;
use anyhow::Result;
use content_loader::ContentItem;
use rayon::prelude::*;
use search_state::SearchContext;

/// Collections at least this large are scanned in parallel
const PARALLEL_THRESHOLD: usize = 2048;

/// Keeps items whose title, description, tags, label tag, theme tag or
/// handle contain the query (case-insensitive).
///
/// ## Algorithm
/// 1. Lowercase and trim the query once; an empty query keeps everything
/// 2. Any single field containing the query qualifies the item
/// 3. Large collections are scanned with Rayon; order is preserved
pub struct TextMatchFilter;

impl TextMatchFilter {
    fn matches(item: &ContentItem, needle: &str) -> bool {
        contains_lowercase(&item.title, needle)
            || contains_lowercase(&item.description, needle)
            || item.tags.iter().any(|tag| contains_lowercase(tag, needle))
            || [&item.label_tag, &item.theme_tag, &item.handle]
                .into_iter()
                .flatten()
                .any(|field| contains_lowercase(field, needle))
    }
}

impl Filter for TextMatchFilter {
    fn name(&self) -> &str {
        "TextMatchFilter"
    }

    fn apply<'a>(
        &self,
        items: Vec<&'a ContentItem>,
        context: &SearchContext,
    ) -> Result<Vec<&'a ContentItem>> {
        let Some(needle) = context.normalized_query() else {
            return Ok(items);
        };

        let filtered: Vec<&'a ContentItem> = if items.len() >= PARALLEL_THRESHOLD {
            items
                .into_par_iter()
                .filter(|item| Self::matches(item, &needle))
                .collect()
        } else {
            items
                .into_iter()
                .filter(|item| Self::matches(item, &needle))
                .collect()
        };
        Ok(filtered)
    }
}
