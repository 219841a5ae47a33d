//! # Content Loader Crate
//!
//! Loads the portal's static content fixture and keeps it resident in
//! memory for the search pipeline.
//!
//! ## Main Components
//!
//! - **types**: `ContentItem`, `Category`, `ContentType`
//! - **parser**: JSON fixture and date parsing
//! - **index**: `ContentIndex`, the ordered collection with lookups
//! - **error**: `ContentLoadError`
//!
//! ## Example Usage
//!
//! ```ignore
//! use content_loader::{Category, ContentIndex};
//! use std::path::Path;
//!
//! let index = ContentIndex::load_from_file(Path::new("data/content.json"))?;
//! let operations = index.items_by_category(Category::Operations);
//! println!("{} operations stories", operations.len());
//! ```

// Public modules
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{ContentLoadError, Result};
pub use index::ContentIndex;
pub use parser::{parse_content, parse_content_date, parse_content_str};
pub use types::{Category, ContentId, ContentItem, ContentType};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_content_index_creation() {
        let index = ContentIndex::new();
        assert_eq!(index.len(), 0);
        assert!(index.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "content-loader-test-{}.json",
            std::process::id()
        ));
        fs::write(
            &path,
            r#"[{"id": 4, "title": "Remembrance Sunday", "category": "heritage",
                 "date": "2023-11-12", "type": "audio", "link": "/heritage/4"}]"#,
        )
        .unwrap();

        let index = ContentIndex::load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(index.len(), 1);
        let item = index.get_item(4).unwrap();
        assert_eq!(item.category, Category::Heritage);
        assert_eq!(item.content_type, ContentType::Audio);
    }
}
