//! Turning filtered items into what the results view shows.
//!
//! Three steps follow filtering: decide whether the results view is shown
//! at all, order the matches, and split them into the highlighted "top
//! matches" and the plain "all matches" list.

use content_loader::ContentItem;
use search_state::{SearchContext, SortMode};

/// Number of highlighted top matches. The earlier two-card layout used 2.
pub const DEFAULT_TOP_MATCHES: usize = 5;

/// Whether the page shows results instead of the landing layout.
///
/// True when there is a query, any region (unless regions are disabled),
/// any topic, or an effective date range.
pub fn is_search_active(context: &SearchContext) -> bool {
    context.normalized_query().is_some()
        || !context.active_regions().is_empty()
        || !context.filters.topics().is_empty()
        || context.filters.date_range().is_some()
}

/// Order matches for display.
///
/// `Latest` is a stable newest-first sort; undated items go last.
/// `BestMatch` keeps collection order.
pub fn sort_items(items: &mut [&ContentItem], sort_by: SortMode) {
    match sort_by {
        SortMode::Latest => items.sort_by(|a, b| b.date.cmp(&a.date)),
        SortMode::BestMatch => {}
    }
}

/// Split sorted matches into `(top_matches, all_matches)` at `cut`.
///
/// The concatenation of the two halves is always the input.
pub fn partition<T>(sorted: &[T], cut: usize) -> (&[T], &[T]) {
    sorted.split_at(cut.min(sorted.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use content_loader::Category;
    use search_state::{Dimension, FilterState, Taxonomy};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dated_items() -> Vec<ContentItem> {
        vec![
            ContentItem::new(1, "old", "", Category::News).with_date(day(2023, 6, 1)),
            ContentItem::new(2, "undated", "", Category::News),
            ContentItem::new(3, "new", "", Category::News).with_date(day(2024, 3, 1)),
            ContentItem::new(4, "tie a", "", Category::News).with_date(day(2024, 1, 1)),
            ContentItem::new(5, "tie b", "", Category::News).with_date(day(2024, 1, 1)),
        ]
    }

    #[test]
    fn test_latest_is_newest_first_and_stable() {
        let items = dated_items();
        let mut refs: Vec<&ContentItem> = items.iter().collect();
        sort_items(&mut refs, SortMode::Latest);

        let ids: Vec<u32> = refs.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 4, 5, 1, 2]);
        assert!(refs.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_best_match_is_identity() {
        let items = dated_items();
        let mut refs: Vec<&ContentItem> = items.iter().collect();
        sort_items(&mut refs, SortMode::BestMatch);

        let ids: Vec<u32> = refs.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_partition_never_drops_or_duplicates() {
        let sorted: Vec<u32> = (1..=8).collect();
        for cut in [0, 2, 5, 8, 20] {
            let (top, rest) = partition(&sorted, cut);
            assert_eq!(top.len(), cut.min(sorted.len()));
            assert_eq!([top, rest].concat(), sorted);
        }
        let empty: Vec<u32> = Vec::new();
        let (top, rest) = partition(&empty, DEFAULT_TOP_MATCHES);
        assert!(top.is_empty() && rest.is_empty());
    }

    #[test]
    fn test_is_search_active() {
        let taxonomy = Taxonomy::builtin();
        assert!(!is_search_active(&SearchContext::new("", FilterState::new())));
        assert!(!is_search_active(&SearchContext::new("  ", FilterState::new())));
        assert!(is_search_active(&SearchContext::new("raf", FilterState::new())));

        let regions = FilterState::new().toggle(&taxonomy, Dimension::Region, "UK");
        assert!(is_search_active(&SearchContext::new("", regions.clone())));
        assert!(!is_search_active(
            &SearchContext::new("", regions).with_regions_disabled(true)
        ));

        let topic = FilterState::new().toggle(&taxonomy, Dimension::Subtopic, "Sport");
        assert!(is_search_active(&SearchContext::new("", topic)));

        let toggle_only = FilterState::new().with_date_filter(true);
        assert!(!is_search_active(&SearchContext::new("", toggle_only.clone())));
        let bounded = toggle_only.with_date_to(Some(day(2024, 1, 1)));
        assert!(is_search_active(&SearchContext::new("", bounded)));

        let sort_only = FilterState::new().with_sort(SortMode::BestMatch);
        assert!(!is_search_active(&SearchContext::new("", sort_only)));
    }
}
