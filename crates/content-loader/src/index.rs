//! ContentIndex: the in-memory content collection.
//!
//! Items keep their fixture order, which is the order every consumer sees
//! unless it sorts explicitly. Secondary indices point back into that
//! ordered list.

use crate::error::{ContentLoadError, Result};
use crate::parser;
use crate::types::{Category, ContentId, ContentItem};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Read-only collection of content items with id and category lookups.
#[derive(Debug, Default)]
pub struct ContentIndex {
    /// Items in fixture order
    items: Vec<ContentItem>,
    /// Position of each item in `items`
    by_id: HashMap<ContentId, usize>,
    /// Positions grouped by category, in fixture order
    category_index: HashMap<Category, Vec<usize>>,
}

impl ContentIndex {
    /// Creates a new, empty ContentIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and index a content fixture from disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading content fixture from {:?}", path);
        let items = parser::parse_content(path)?;
        let index = Self::from_items(items)?;
        info!("Indexed {} content items", index.len());
        Ok(index)
    }

    /// Build an index from already-parsed items, rejecting duplicate ids
    pub fn from_items(items: Vec<ContentItem>) -> Result<Self> {
        let mut index = Self::new();
        for item in items {
            index.insert_item(item)?;
        }
        index.validate()?;
        Ok(index)
    }

    /// Append an item, keeping ids unique
    pub fn insert_item(&mut self, item: ContentItem) -> Result<()> {
        if self.by_id.contains_key(&item.id) {
            return Err(ContentLoadError::DuplicateId { id: item.id });
        }
        let position = self.items.len();
        self.by_id.insert(item.id, position);
        self.category_index
            .entry(item.category)
            .or_default()
            .push(position);
        self.items.push(item);
        Ok(())
    }

    /// Get an item by id
    pub fn get_item(&self, id: ContentId) -> Option<&ContentItem> {
        self.by_id.get(&id).map(|&position| &self.items[position])
    }

    /// All items, in fixture order
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Items of one category, in fixture order
    pub fn items_by_category(&self, category: Category) -> Vec<&ContentItem> {
        self.category_index
            .get(&category)
            .map(|positions| positions.iter().map(|&p| &self.items[p]).collect())
            .unwrap_or_default()
    }

    /// The hero item: first featured item, falling back to the first item
    pub fn featured(&self) -> Option<&ContentItem> {
        self.items
            .iter()
            .find(|item| item.is_featured)
            .or_else(|| self.items.first())
    }

    /// Items flagged as recommended for the reader
    pub fn for_you(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter().filter(|item| item.is_for_you)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check that the secondary indices agree with the primary list.
    ///
    /// Blank display fields are not an error; such items are kept and
    /// logged.
    pub fn validate(&self) -> Result<()> {
        for item in self.items.iter().filter(|item| item.title.trim().is_empty()) {
            warn!("Content item {} has an empty title", item.id);
        }
        let indexed: usize = self.category_index.values().map(Vec::len).sum();
        if indexed != self.items.len() || self.by_id.len() != self.items.len() {
            return Err(ContentLoadError::ValidationError(format!(
                "index out of sync: {} items, {} ids, {} categorised",
                self.items.len(),
                self.by_id.len(),
                indexed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<ContentItem> {
        vec![
            ContentItem::new(1, "Ops update", "Training news", Category::Operations),
            ContentItem::new(2, "New aircraft", "Typhoon upgrade", Category::Equipment).featured(),
            ContentItem::new(3, "Second ops", "QRA launch", Category::Operations).for_you(),
        ]
    }

    #[test]
    fn test_from_items_keeps_order() {
        let index = ContentIndex::from_items(sample_items()).unwrap();
        let ids: Vec<ContentId> = index.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(index.get_item(3).unwrap().title, "Second ops");
        assert!(index.get_item(99).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut items = sample_items();
        items.push(ContentItem::new(2, "Clash", "", Category::News));

        let err = ContentIndex::from_items(items).unwrap_err();
        assert!(matches!(err, ContentLoadError::DuplicateId { id: 2 }));
    }

    #[test]
    fn test_category_lookup() {
        let index = ContentIndex::from_items(sample_items()).unwrap();
        let ops: Vec<ContentId> = index
            .items_by_category(Category::Operations)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ops, vec![1, 3]);
        assert!(index.items_by_category(Category::Heritage).is_empty());
    }

    #[test]
    fn test_featured_and_for_you() {
        let index = ContentIndex::from_items(sample_items()).unwrap();
        assert_eq!(index.featured().unwrap().id, 2);
        assert_eq!(index.for_you().map(|i| i.id).collect::<Vec<_>>(), vec![3]);

        let plain = ContentIndex::from_items(vec![ContentItem::new(9, "Only", "", Category::News)]).unwrap();
        assert_eq!(plain.featured().unwrap().id, 9, "falls back to first item");
        assert!(ContentIndex::new().featured().is_none());
    }

    #[test]
    fn test_empty_title_keeps_collection() {
        let mut items = sample_items();
        items.push(ContentItem::new(4, "  ", "No headline", Category::News));

        let index = ContentIndex::from_items(items).unwrap();
        assert_eq!(index.len(), 4);
        assert_eq!(index.get_item(1).unwrap().title, "Ops update");
        assert!(index.get_item(4).unwrap().title.trim().is_empty());
    }
}
