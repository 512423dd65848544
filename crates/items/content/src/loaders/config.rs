//! Restriction rule loader.

use std::path::Path;

use items_core::RuleTable;

use crate::loaders::{LoadResult, read_file};

/// Rule table shipped with the crate, used when no config file is given.
const BUNDLED_CONFIG: &str = include_str!("../../data/config.json");

/// Loader for restriction rule tables from JSON or TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a rule table, picking the format from the file extension.
    ///
    /// `.toml` files are parsed as TOML, everything else as JSON.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rule file
    pub fn load(path: &Path) -> LoadResult<RuleTable> {
        let content = read_file(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let rules = if is_toml {
            Self::parse_toml(&content)
        } else {
            Self::parse_json(&content)
        }
        .map_err(|e| anyhow::anyhow!("Invalid rule config {}: {}", path.display(), e))?;

        tracing::debug!(
            path = %path.display(),
            categories = rules.active_categories().count(),
            "loaded restriction rules"
        );
        Ok(rules)
    }

    pub fn parse_json(content: &str) -> LoadResult<RuleTable> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rule config JSON: {}", e))
    }

    pub fn parse_toml(content: &str) -> LoadResult<RuleTable> {
        toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rule config TOML: {}", e))
    }

    /// The default rule table bundled with this crate.
    pub fn bundled() -> LoadResult<RuleTable> {
        Self::parse_json(BUNDLED_CONFIG)
    }
}
