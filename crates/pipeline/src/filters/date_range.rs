//! Publication date filter.

use crate::traits::Filter;
use anyhow::Result;
use content_loader::ContentItem;
use search_state::SearchContext;

/// Keeps items published inside the selected date range.
///
/// ## Algorithm
/// 1. Inactive unless the date toggle is on and at least one bound is set
/// 2. Bounds are whole days, inclusive on both ends
/// 3. Items without a usable date are dropped while the range is active
pub struct DateRangeFilter;

impl Filter for DateRangeFilter {
    fn name(&self) -> &str {
        "DateRangeFilter"
    }

    fn apply<'a>(
        &self,
        items: Vec<&'a ContentItem>,
        context: &SearchContext,
    ) -> Result<Vec<&'a ContentItem>> {
        let Some(range) = context.filters.date_range() else {
            return Ok(items);
        };

        let filtered = items
            .into_iter()
            .filter(|item| item.date.is_some_and(|date| range.contains(date)))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::ids;
    use chrono::NaiveDate;
    use content_loader::Category;
    use search_state::FilterState;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn january_items() -> Vec<ContentItem> {
        vec![
            ContentItem::new(1, "mid", "", Category::News).with_date(day(2024, 1, 15)),
            ContentItem::new(2, "after", "", Category::News).with_date(day(2024, 2, 1)),
            ContentItem::new(3, "before", "", Category::News).with_date(day(2023, 12, 31)),
            ContentItem::new(4, "undated", "", Category::News),
            ContentItem::new(5, "last day", "", Category::News).with_date(day(2024, 1, 31)),
        ]
    }

    #[test]
    fn test_january_window() {
        let items = january_items();
        let filters = FilterState::new()
            .with_date_range(Some(day(2024, 1, 1)), Some(day(2024, 1, 31)))
            .unwrap();
        let context = SearchContext::new("", filters);

        let filtered = DateRangeFilter.apply(items.iter().collect(), &context).unwrap();
        assert_eq!(ids(&filtered), vec![1, 5]);
    }

    #[test]
    fn test_open_ended_range() {
        let items = january_items();
        let filters = FilterState::new()
            .with_date_range(Some(day(2024, 1, 20)), None)
            .unwrap();
        let context = SearchContext::new("", filters);

        let filtered = DateRangeFilter.apply(items.iter().collect(), &context).unwrap();
        assert_eq!(ids(&filtered), vec![2, 5]);
    }

    #[test]
    fn test_disabled_toggle_keeps_everything() {
        let items = january_items();
        let filters = FilterState::new()
            .with_date_from(Some(day(2024, 1, 1)))
            .with_date_to(Some(day(2024, 1, 31)));
        let context = SearchContext::new("", filters);

        let filtered = DateRangeFilter.apply(items.iter().collect(), &context).unwrap();
        assert_eq!(filtered.len(), items.len());
    }
}
