//! Content factory tying rule and database loading to one data layout.

use std::path::{Path, PathBuf};

use items_core::{DatabaseTables, RuleTable};

use crate::loaders::{ConfigLoader, DatabaseLoader, LoadResult};

/// Loads restriction rules and database tables for one patching run.
///
/// Without an explicit rule file the bundled rules are used.
#[derive(Clone, Debug)]
pub struct ContentFactory {
    database_dir: PathBuf,
    config_path: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a database export.
    ///
    /// # Arguments
    ///
    /// * `database_dir` - Directory containing `templates/items.json` and `globals.json`
    pub fn new(database_dir: impl Into<PathBuf>) -> Self {
        Self {
            database_dir: database_dir.into(),
            config_path: None,
        }
    }

    /// Use the rule file at `path` instead of the bundled rules.
    #[must_use]
    pub fn with_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn load_rules(&self) -> LoadResult<RuleTable> {
        match &self.config_path {
            Some(path) => ConfigLoader::load(path),
            None => ConfigLoader::bundled(),
        }
    }

    pub fn load_database(&self) -> LoadResult<DatabaseTables> {
        DatabaseLoader::load(&self.database_dir)
    }

    /// Write `tables` to `output_dir`, or back into the database directory.
    pub fn save_database(
        &self,
        tables: &DatabaseTables,
        output_dir: Option<&Path>,
    ) -> LoadResult<()> {
        DatabaseLoader::save(output_dir.unwrap_or(&self.database_dir), tables)
    }

    /// Returns the database directory path.
    pub fn database_dir(&self) -> &Path {
        &self.database_dir
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/database").with_config("/tmp/rules.toml");
        assert_eq!(factory.database_dir(), Path::new("/tmp/database"));
        assert_eq!(factory.config_path(), Some(Path::new("/tmp/rules.toml")));
    }

    #[test]
    fn falls_back_to_bundled_rules() {
        let factory = ContentFactory::new("/tmp/database");
        let rules = factory.load_rules().unwrap();
        assert_eq!(rules, ConfigLoader::bundled().unwrap());
    }
}
