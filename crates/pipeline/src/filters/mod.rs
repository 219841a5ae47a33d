//! Filter implementations for the search pipeline.
//!
//! One filter per dimension of the search sheet. They are conjunctive:
//! an item must pass every active filter.

pub mod date_range;
pub mod parent_topic;
pub mod region;
pub mod subtopic;
pub mod text_match;

// Re-export for convenience
pub use date_range::DateRangeFilter;
pub use parent_topic::ParentTopicFilter;
pub use region::RegionFilter;
pub use subtopic::SubtopicFilter;
pub use text_match::TextMatchFilter;

/// Case-insensitive substring test; `needle` must already be lowercase.
pub(crate) fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
