//! Region filter.
//!
//! Content carries no structured location, so a region counts as matched
//! when its name shows up in a tag or in the description.

use super::contains_lowercase;
use crate::traits::Filter;
use anyhow::Result;
use content_loader::ContentItem;
use search_state::SearchContext;

/// Keeps items mentioning any selected region in a tag or the description.
///
/// Skipped entirely when the `disableRegions` flag is set on the context.
pub struct RegionFilter;

impl Filter for RegionFilter {
    fn name(&self) -> &str {
        "RegionFilter"
    }

    fn apply<'a>(
        &self,
        items: Vec<&'a ContentItem>,
        context: &SearchContext,
    ) -> Result<Vec<&'a ContentItem>> {
        let regions: Vec<String> = context
            .active_regions()
            .iter()
            .map(|r| r.to_lowercase())
            .collect();
        if regions.is_empty() {
            return Ok(items);
        }

        let filtered = items
            .into_iter()
            .filter(|item| {
                regions.iter().any(|region| {
                    item.tags.iter().any(|tag| contains_lowercase(tag, region))
                        || contains_lowercase(&item.description, region)
                })
            })
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{ids, sample_items};
    use content_loader::Category;
    use search_state::{Dimension, FilterState, Taxonomy};

    fn context_for(regions: &[&str]) -> SearchContext {
        let taxonomy = Taxonomy::builtin();
        let filters = regions.iter().fold(FilterState::new(), |state, region| {
            state.toggle(&taxonomy, Dimension::Region, region)
        });
        SearchContext::new("", filters)
    }

    #[test]
    fn test_tag_match_without_description() {
        let items = vec![
            ContentItem::new(1, "Pacific deployment", "Jets deploy east", Category::Operations)
                .with_tags(["Asia"]),
            ContentItem::new(2, "Baltic policing", "Air policing mission", Category::Operations)
                .with_tags(["Europe"]),
        ];

        let filtered = RegionFilter
            .apply(items.iter().collect(), &context_for(&["Asia"]))
            .unwrap();
        assert_eq!(ids(&filtered), vec![1]);
    }

    #[test]
    fn test_description_match_and_or_semantics() {
        let items = sample_items();
        let filtered = RegionFilter
            .apply(items.iter().collect(), &context_for(&["asia", "Europe"]))
            .unwrap();
        // 2 is tagged Asia, 3 mentions Europe in its description
        assert_eq!(ids(&filtered), vec![2, 3]);
    }

    #[test]
    fn test_no_regions_keeps_everything() {
        let items = sample_items();
        let filtered = RegionFilter
            .apply(items.iter().collect(), &context_for(&[]))
            .unwrap();
        assert_eq!(filtered.len(), items.len());
    }

    #[test]
    fn test_disabled_regions_are_ignored() {
        let items = sample_items();
        let context = context_for(&["Space"]).with_regions_disabled(true);
        let filtered = RegionFilter.apply(items.iter().collect(), &context).unwrap();
        assert_eq!(filtered.len(), items.len());
    }
}
