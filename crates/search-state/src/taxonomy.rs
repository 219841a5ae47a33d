//! The fixed topic taxonomy and region list.
//!
//! Four parent topics, each with its subtopics. Two parents also map onto
//! a content category, which lets a parent-topic selection match items
//! that carry no subtopic tag at all.

use crate::error::{Result, StateError};
use content_loader::Category;

/// A parent topic and the subtopics filed under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicGroup {
    pub name: String,
    pub subtopics: Vec<String>,
    /// Category that counts as a match for the whole parent, if any
    pub category: Option<Category>,
}

impl TopicGroup {
    fn new(name: &str, subtopics: &[&str], category: Option<Category>) -> Self {
        Self {
            name: name.to_string(),
            subtopics: subtopics.iter().map(|s| s.to_string()).collect(),
            category,
        }
    }

    /// Case-insensitive subtopic membership
    pub fn has_subtopic(&self, name: &str) -> bool {
        self.subtopics.iter().any(|s| s.eq_ignore_ascii_case(name))
    }
}

/// Static filter configuration: topic groups plus the selectable regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    groups: Vec<TopicGroup>,
    regions: Vec<String>,
}

impl Taxonomy {
    pub fn new(groups: Vec<TopicGroup>, regions: Vec<String>) -> Self {
        Self { groups, regions }
    }

    /// The portal's built-in taxonomy
    pub fn builtin() -> Self {
        let groups = vec![
            TopicGroup::new(
                "Operations",
                &[
                    "Training",
                    "Humanitarian aid",
                    "QRA",
                    "International partnerships",
                    "Exercises",
                    "Protection and Policing",
                ],
                Some(Category::Operations),
            ),
            TopicGroup::new(
                "People",
                &["Serving families", "Honours", "Sport", "Senior Leadership", "Reserves"],
                None,
            ),
            TopicGroup::new(
                "Equipment & Technology",
                &["Aircraft", "Team Tempest", "Space Command", "Cyberspace"],
                Some(Category::Equipment),
            ),
            TopicGroup::new(
                "Heritage",
                &["Battle of Britain", "D-Day", "Remembrance", "Anniversaries"],
                None,
            ),
        ];
        let regions = [
            "UK",
            "Asia",
            "Africa",
            "Europe",
            "Middle East",
            "North America",
            "Oceania",
            "South America",
            "Space",
        ]
        .iter()
        .map(|r| r.to_string())
        .collect();

        Self::new(groups, regions)
    }

    pub fn groups(&self) -> &[TopicGroup] {
        &self.groups
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Look up a parent topic by name (case-insensitive)
    pub fn parent(&self, name: &str) -> Option<&TopicGroup> {
        self.groups.iter().find(|g| g.name.eq_ignore_ascii_case(name))
    }

    /// The parent topic a subtopic belongs to
    pub fn parent_of(&self, subtopic: &str) -> Option<&TopicGroup> {
        self.groups.iter().find(|g| g.has_subtopic(subtopic))
    }

    /// Canonical spelling of a parent topic
    pub fn canonical_parent(&self, name: &str) -> Result<&str> {
        self.parent(name.trim())
            .map(|g| g.name.as_str())
            .ok_or_else(|| StateError::UnknownTopic {
                name: name.to_string(),
            })
    }

    /// Canonical spelling of a subtopic
    pub fn canonical_subtopic(&self, name: &str) -> Result<&str> {
        let name = name.trim();
        self.groups
            .iter()
            .flat_map(|g| g.subtopics.iter())
            .find(|s| s.eq_ignore_ascii_case(name))
            .map(String::as_str)
            .ok_or_else(|| StateError::UnknownTopic {
                name: name.to_string(),
            })
    }

    /// Canonical spelling of a region
    pub fn canonical_region(&self, name: &str) -> Result<&str> {
        let name = name.trim();
        self.regions
            .iter()
            .find(|r| r.eq_ignore_ascii_case(name))
            .map(String::as_str)
            .ok_or_else(|| StateError::UnknownRegion {
                name: name.to_string(),
            })
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let taxonomy = Taxonomy::builtin();
        assert_eq!(taxonomy.groups().len(), 4);
        let subtopics: usize = taxonomy.groups().iter().map(|g| g.subtopics.len()).sum();
        assert_eq!(subtopics, 19);
        assert_eq!(taxonomy.regions().len(), 9);

        let mapped: Vec<&str> = taxonomy
            .groups()
            .iter()
            .filter(|g| g.category.is_some())
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(mapped, vec!["Operations", "Equipment & Technology"]);
    }

    #[test]
    fn test_lookups() {
        let taxonomy = Taxonomy::builtin();
        assert_eq!(taxonomy.parent_of("team tempest").unwrap().name, "Equipment & Technology");
        assert_eq!(taxonomy.parent("heritage").unwrap().name, "Heritage");
        assert!(taxonomy.parent_of("Underwater basket weaving").is_none());
    }

    #[test]
    fn test_canonical_names() {
        let taxonomy = Taxonomy::builtin();
        assert_eq!(taxonomy.canonical_region(" middle east ").unwrap(), "Middle East");
        assert_eq!(taxonomy.canonical_subtopic("qra").unwrap(), "QRA");
        assert_eq!(taxonomy.canonical_parent("people").unwrap(), "People");
        assert!(matches!(
            taxonomy.canonical_region("Atlantis"),
            Err(StateError::UnknownRegion { .. })
        ));
        assert!(matches!(
            taxonomy.canonical_parent("Training"),
            Err(StateError::UnknownTopic { .. })
        ));
    }
}
