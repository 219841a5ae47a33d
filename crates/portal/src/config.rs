//! Portal configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use pipeline::DEFAULT_TOP_MATCHES;

/// Sizes of the landing page sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingConfig {
    pub news_grid: usize,
    /// Applies to both the operations and the equipment rail
    pub rail: usize,
    pub for_you: usize,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            news_grid: 6,
            rail: 4,
            for_you: 9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortalConfig {
    /// JSON array of content items
    pub content_path: PathBuf,
    /// How many sorted matches are highlighted as top matches
    pub top_matches: usize,
    pub landing: LandingConfig,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            content_path: PathBuf::from("data/content.json"),
            top_matches: DEFAULT_TOP_MATCHES,
            landing: LandingConfig::default(),
        }
    }
}

impl PortalConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        serde_json::from_str(&raw).with_context(|| format!("Invalid config {:?}", path))
    }

    pub fn with_content_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_path = path.into();
        self
    }

    pub fn with_top_matches(mut self, top_matches: usize) -> Self {
        self.top_matches = top_matches;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.top_matches, 5);
        assert_eq!(config.landing.news_grid, 6);
        assert_eq!(config.landing.rail, 4);
        assert_eq!(config.landing.for_you, 9);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PortalConfig =
            serde_json::from_str(r#"{"topMatches": 2, "landing": {"rail": 3}}"#).unwrap();
        assert_eq!(config.top_matches, 2);
        assert_eq!(config.landing.rail, 3);
        assert_eq!(config.landing.for_you, 9);
        assert_eq!(config.content_path, PathBuf::from("data/content.json"));
    }

    #[test]
    fn test_from_file_missing() {
        assert!(PortalConfig::from_file(Path::new("/no/such/portal.json")).is_err());
    }
}
