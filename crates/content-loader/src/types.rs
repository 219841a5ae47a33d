//! Core domain types for the content portal.
//!
//! A `ContentItem` is display data: apart from the unique `id`, nothing
//! about one item constrains another.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parser::{lenient_date, nullable_list};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a content item within a collection
pub type ContentId = u32;

// =============================================================================
// Enums
// =============================================================================

/// Editorial category of a content item.
///
/// The fixture spells the operations category both `operations` and
/// `operation`; both deserialize to `Category::Operations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    News,
    #[serde(alias = "operation")]
    Operations,
    Equipment,
    People,
    Heritage,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::News,
        Category::Operations,
        Category::Equipment,
        Category::People,
        Category::Heritage,
    ];

    /// The lowercase string form, as it appears in the fixture
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::News => "news",
            Category::Operations => "operations",
            Category::Equipment => "equipment",
            Category::People => "people",
            Category::Heritage => "heritage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media type of a content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Audio,
    Document,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContentType::Video => "video",
            ContentType::Audio => "audio",
            ContentType::Document => "document",
        };
        f.write_str(s)
    }
}

// =============================================================================
// ContentItem
// =============================================================================

/// A single article, video or podcast episode in the portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: ContentId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    /// Publication date. `None` when the fixture value is missing or
    /// does not parse; such items never fall inside a date range.
    #[serde(default, with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_for_you: bool,
    #[serde(default)]
    pub link: String,
}

impl ContentItem {
    /// Create an undated document with no optional fields set.
    pub fn new(
        id: ContentId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            category,
            date: None,
            content_type: ContentType::Document,
            image_url: None,
            tags: Vec::new(),
            label_tag: None,
            theme_tag: None,
            handle: None,
            is_featured: false,
            is_for_you: false,
            link: format!("/content/{}", id),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_label_tag(mut self, label: impl Into<String>) -> Self {
        self.label_tag = Some(label.into());
        self
    }

    pub fn with_theme_tag(mut self, theme: impl Into<String>) -> Self {
        self.theme_tag = Some(theme.into());
        self
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    pub fn for_you(mut self) -> Self {
        self.is_for_you = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_alias() {
        let category: Category = serde_json::from_str("\"operation\"").unwrap();
        assert_eq!(category, Category::Operations);
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"operations\"");
    }

    #[test]
    fn test_builder_defaults() {
        let item = ContentItem::new(7, "Title", "Body", Category::News)
            .with_tags(["Asia", "Aircraft"])
            .featured();

        assert_eq!(item.tags, vec!["Asia".to_string(), "Aircraft".to_string()]);
        assert!(item.is_featured);
        assert!(!item.is_for_you);
        assert_eq!(item.link, "/content/7");
        assert!(item.date.is_none());
    }
}
