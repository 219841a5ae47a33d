//! What the two page layouts display.

use content_loader::ContentItem;
use search_state::{FilterChip, SortMode};
use serde::Serialize;

/// The results layout, shown whenever a search is active
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView {
    /// The query as typed
    pub query: String,
    /// Number of matches before the top/all split
    pub total: usize,
    pub sort_by: SortMode,
    pub chips: Vec<FilterChip>,
    pub top_matches: Vec<ContentItem>,
    pub all_matches: Vec<ContentItem>,
}

impl ResultsView {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// The landing layout, shown when nothing is being searched
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingView {
    pub featured: Option<ContentItem>,
    pub news_grid: Vec<ContentItem>,
    pub operations: Vec<ContentItem>,
    pub equipment: Vec<ContentItem>,
    pub for_you: Vec<ContentItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "layout", rename_all = "camelCase")]
pub enum PortalView {
    Landing(LandingView),
    Results(ResultsView),
}
