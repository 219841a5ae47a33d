//! Core traits for the filtering pipeline.
//!
//! Each filter dimension of the search sheet is one `Filter`, so the
//! pipeline can compose, log and test them independently.

use anyhow::Result;
use content_loader::ContentItem;
use search_state::SearchContext;

/// A single predicate over the content collection.
///
/// ## Design Note
/// - Filters borrow items from the `ContentIndex` rather than cloning them
/// - A filter whose dimension has no selection must return its input
///   unchanged
/// - Relative order of the surviving items must be preserved
pub trait Filter: Send + Sync {
    /// Name used in pipeline logs
    fn name(&self) -> &str;

    /// Apply this filter to a set of items.
    ///
    /// # Arguments
    /// * `items` - The items still in play (takes ownership of the list)
    /// * `context` - Query and filter state for this search
    ///
    /// # Returns
    /// * `Ok(Vec<&ContentItem>)` - The items that pass
    /// * `Err` - If filtering fails
    fn apply<'a>(
        &self,
        items: Vec<&'a ContentItem>,
        context: &SearchContext,
    ) -> Result<Vec<&'a ContentItem>>;
}
