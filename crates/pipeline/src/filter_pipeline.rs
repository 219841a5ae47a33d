//! Ordered composition of the per-dimension filters.
//!
//! Every filter sees only what the filters before it let through, so the
//! result is the conjunction of all active dimensions.

use crate::filters::{
    DateRangeFilter, ParentTopicFilter, RegionFilter, SubtopicFilter, TextMatchFilter,
};
use crate::traits::Filter;
use anyhow::{Context, Result};
use content_loader::ContentItem;
use search_state::{SearchContext, Taxonomy};
use std::sync::Arc;
use tracing::debug;

/// A sequence of filters over borrowed content items.
///
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TextMatchFilter)
///     .add_filter(ParentTopicFilter::new(taxonomy.clone()));
/// let matches = pipeline.apply(index.items(), &context)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// A pipeline that keeps everything
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The portal's full pipeline: text, region, parent topic, subtopic,
    /// then date range.
    pub fn standard(taxonomy: Arc<Taxonomy>) -> Self {
        Self::new()
            .add_filter(TextMatchFilter)
            .add_filter(RegionFilter)
            .add_filter(ParentTopicFilter::new(taxonomy))
            .add_filter(SubtopicFilter)
            .add_filter(DateRangeFilter)
    }

    /// Append a filter; it runs after the ones already added
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Narrow `items` down to the ones every filter keeps.
    ///
    /// Survivors keep their collection order. Once nothing is left the
    /// remaining filters are skipped.
    pub fn apply<'a>(
        &self,
        items: &'a [ContentItem],
        context: &SearchContext,
    ) -> Result<Vec<&'a ContentItem>> {
        let mut survivors: Vec<&'a ContentItem> = items.iter().collect();
        for filter in &self.filters {
            if survivors.is_empty() {
                debug!("No items left, skipping {}", filter.name());
                continue;
            }
            let before = survivors.len();
            survivors = filter
                .apply(survivors, context)
                .with_context(|| format!("{} failed", filter.name()))?;
            debug!("{}: {} -> {} items", filter.name(), before, survivors.len());
        }
        Ok(survivors)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
