//! Filter state and the search context handed to the pipeline.
//!
//! `FilterState` is a value object. Every edit consumes the old state and
//! returns a new one, so a caller always swaps the whole value.

use crate::error::{Result, StateError};
use crate::taxonomy::Taxonomy;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Sort mode
// =============================================================================

/// How the results view orders its matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Newest first
    #[default]
    Latest,
    /// Collection order; no relevance scoring is applied
    BestMatch,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Latest => "latest",
            SortMode::BestMatch => "bestMatch",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" => Ok(SortMode::Latest),
            "bestmatch" | "best-match" | "best_match" => Ok(SortMode::BestMatch),
            _ => Err(StateError::UnknownSortMode {
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Topic selection
// =============================================================================

/// The filter dimensions a toggle can address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Region,
    Subtopic,
    ParentTopic,
}

/// One entry of the topic selection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TopicRef {
    Parent(String),
    Subtopic(String),
}

impl TopicRef {
    /// Same kind and same name, ignoring ASCII case
    fn same_as(&self, other: &TopicRef) -> bool {
        match (self, other) {
            (TopicRef::Parent(a), TopicRef::Parent(b)) | (TopicRef::Subtopic(a), TopicRef::Subtopic(b)) => {
                a.eq_ignore_ascii_case(b)
            }
            _ => false,
        }
    }
}

/// Selected parent topics and subtopics, in selection order.
///
/// A parent and one of its own subtopics are never both present: the only
/// mutator is the toggle, and it evicts the other side of the pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicSelection {
    entries: Vec<TopicRef>,
}

impl TopicSelection {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TopicRef] {
        &self.entries
    }

    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            TopicRef::Parent(name) => Some(name.as_str()),
            TopicRef::Subtopic(_) => None,
        })
    }

    pub fn subtopics(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            TopicRef::Subtopic(name) => Some(name.as_str()),
            TopicRef::Parent(_) => None,
        })
    }

    fn toggle_parent(&mut self, taxonomy: &Taxonomy, name: &str) {
        let entry = TopicRef::Parent(name.to_string());
        if self.remove(&entry) {
            return;
        }
        if let Some(group) = taxonomy.parent(name) {
            self.entries.retain(|e| match e {
                TopicRef::Subtopic(sub) => !group.has_subtopic(sub),
                TopicRef::Parent(_) => true,
            });
        }
        self.entries.push(entry);
    }

    fn toggle_subtopic(&mut self, taxonomy: &Taxonomy, name: &str) {
        let entry = TopicRef::Subtopic(name.to_string());
        if self.remove(&entry) {
            return;
        }
        if let Some(group) = taxonomy.parent_of(name) {
            self.entries.retain(|e| match e {
                TopicRef::Parent(parent) => !group.name.eq_ignore_ascii_case(parent),
                TopicRef::Subtopic(_) => true,
            });
        }
        self.entries.push(entry);
    }

    fn clear_parents(&mut self) {
        self.entries.retain(|e| matches!(e, TopicRef::Subtopic(_)));
    }

    fn remove(&mut self, entry: &TopicRef) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| !e.same_as(entry));
        self.entries.len() != before
    }
}

// =============================================================================
// Dates
// =============================================================================

/// Parse a user-entered date bound.
///
/// Accepts ISO `YYYY-MM-DD` and the `DD/MM/YYYY` form shown in the filter
/// sheet. Anything else is rejected here so the range predicate never sees
/// a malformed bound.
pub fn parse_date_bound(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .map_err(|_| StateError::InvalidDate {
            value: raw.to_string(),
        })
}

/// Inclusive range of whole days; a missing bound is open on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// `from` covers the day from its first second, `to` through its last
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from, self.to) {
            (Some(from), Some(to)) => write!(f, "{} to {}", from, to),
            (Some(from), None) => write!(f, "from {}", from),
            (None, Some(to)) => write!(f, "until {}", to),
            (None, None) => f.write_str("anytime"),
        }
    }
}

// =============================================================================
// Filter state
// =============================================================================

/// Everything the filter sheet controls, minus the free-text query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    regions: Vec<String>,
    topics: TopicSelection,
    sort_by: SortMode,
    date_filter_enabled: bool,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn topics(&self) -> &TopicSelection {
        &self.topics
    }

    pub fn parent_topics(&self) -> impl Iterator<Item = &str> {
        self.topics.parents()
    }

    pub fn subtopics(&self) -> impl Iterator<Item = &str> {
        self.topics.subtopics()
    }

    pub fn sort_by(&self) -> SortMode {
        self.sort_by
    }

    pub fn date_filter_enabled(&self) -> bool {
        self.date_filter_enabled
    }

    pub fn date_from(&self) -> Option<NaiveDate> {
        self.date_from
    }

    pub fn date_to(&self) -> Option<NaiveDate> {
        self.date_to
    }

    /// The range to apply, if the date filter is on and has a bound
    pub fn date_range(&self) -> Option<DateRange> {
        if !self.date_filter_enabled || (self.date_from.is_none() && self.date_to.is_none()) {
            return None;
        }
        Some(DateRange {
            from: self.date_from,
            to: self.date_to,
        })
    }

    /// Add `value` to a dimension if absent, remove it if present.
    ///
    /// Names the taxonomy knows are stored in their canonical spelling and
    /// presence is checked ignoring case. Selecting a parent topic drops
    /// its subtopics; selecting a subtopic drops its parent.
    pub fn toggle(mut self, taxonomy: &Taxonomy, dimension: Dimension, value: &str) -> Self {
        let value = match dimension {
            Dimension::Region => taxonomy.canonical_region(value),
            Dimension::ParentTopic => taxonomy.canonical_parent(value),
            Dimension::Subtopic => taxonomy.canonical_subtopic(value),
        }
        .unwrap_or(value);
        match dimension {
            Dimension::Region => {
                if let Some(pos) = self.regions.iter().position(|r| r.eq_ignore_ascii_case(value)) {
                    self.regions.remove(pos);
                } else {
                    self.regions.push(value.to_string());
                }
            }
            Dimension::ParentTopic => self.topics.toggle_parent(taxonomy, value),
            Dimension::Subtopic => self.topics.toggle_subtopic(taxonomy, value),
        }
        self
    }

    /// Reset every dimension to its default
    pub fn clear_all(self) -> Self {
        Self::default()
    }

    /// Replace the parent-topic selection with at most one parent.
    ///
    /// Used when the URL dictates the parent topic; subtopics of that
    /// parent are dropped, other subtopics survive.
    pub fn with_parent_topic(mut self, taxonomy: &Taxonomy, parent: Option<&str>) -> Self {
        self.topics.clear_parents();
        if let Some(parent) = parent {
            self.topics.toggle_parent(taxonomy, parent);
        }
        self
    }

    pub fn with_sort(mut self, sort_by: SortMode) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_date_filter(mut self, enabled: bool) -> Self {
        self.date_filter_enabled = enabled;
        self
    }

    pub fn with_date_from(mut self, from: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self
    }

    pub fn with_date_to(mut self, to: Option<NaiveDate>) -> Self {
        self.date_to = to;
        self
    }

    /// Set both bounds and switch the date filter on, rejecting `from > to`
    pub fn with_date_range(
        self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Self> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(StateError::ReversedRange {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
        }
        Ok(self.with_date_filter(true).with_date_from(from).with_date_to(to))
    }

    /// Chips for every active selection, in display order
    pub fn active_chips(&self, regions_disabled: bool) -> Vec<FilterChip> {
        let mut chips = Vec::new();
        if !regions_disabled {
            chips.extend(self.regions.iter().map(|r| FilterChip::Region(r.clone())));
        }
        for entry in self.topics.entries() {
            chips.push(match entry {
                TopicRef::Parent(name) => FilterChip::ParentTopic(name.clone()),
                TopicRef::Subtopic(name) => FilterChip::Subtopic(name.clone()),
            });
        }
        if let Some(range) = self.date_range() {
            chips.push(FilterChip::DateRange(range));
        }
        chips
    }

    /// Undo the selection a chip stands for
    pub fn remove_chip(self, taxonomy: &Taxonomy, chip: &FilterChip) -> Self {
        match chip {
            FilterChip::Region(name) => self.toggle(taxonomy, Dimension::Region, name),
            FilterChip::ParentTopic(name) => self.toggle(taxonomy, Dimension::ParentTopic, name),
            FilterChip::Subtopic(name) => self.toggle(taxonomy, Dimension::Subtopic, name),
            FilterChip::DateRange(_) => self
                .with_date_filter(false)
                .with_date_from(None)
                .with_date_to(None),
        }
    }
}

/// A removable marker for one active filter selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum FilterChip {
    Region(String),
    ParentTopic(String),
    Subtopic(String),
    DateRange(DateRange),
}

impl fmt::Display for FilterChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterChip::Region(name) | FilterChip::ParentTopic(name) | FilterChip::Subtopic(name) => {
                f.write_str(name)
            }
            FilterChip::DateRange(range) => write!(f, "{}", range),
        }
    }
}

// =============================================================================
// Search context
// =============================================================================

/// The query plus filter state one pipeline run works against.
#[derive(Debug, Clone, Default)]
pub struct SearchContext {
    pub query: String,
    pub filters: FilterState,
    /// Set by the `disableRegions` URL flag; hides the region dimension
    pub regions_disabled: bool,
}

impl SearchContext {
    pub fn new(query: impl Into<String>, filters: FilterState) -> Self {
        Self {
            query: query.into(),
            filters,
            regions_disabled: false,
        }
    }

    pub fn with_regions_disabled(mut self, disabled: bool) -> Self {
        self.regions_disabled = disabled;
        self
    }

    /// Lowercased, trimmed query, or `None` when there is nothing to match
    pub fn normalized_query(&self) -> Option<String> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    /// Regions that take part in filtering
    pub fn active_regions(&self) -> &[String] {
        if self.regions_disabled {
            &[]
        } else {
            self.filters.regions()
        }
    }
}
