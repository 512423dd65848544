//! Item database loader.
//!
//! Reads the subset of a host database export that restriction patching needs
//! and writes it back after patching.
//!
//! # Directory Structure
//!
//! ```text
//! database_dir/
//! ├── globals.json
//! └── templates/
//!     └── items.json
//! ```
//!
//! A missing file leaves the matching section of [`DatabaseTables`] unset; the
//! stripper decides whether that is fatal.

use std::path::{Path, PathBuf};

use items_core::{DatabaseTables, Globals, ItemMap, Templates};

use crate::loaders::{LoadResult, read_file, write_json};

const TEMPLATES_DIR: &str = "templates";
const ITEMS_FILE: &str = "items.json";
const GLOBALS_FILE: &str = "globals.json";

/// Loader for database tables from a JSON export directory.
pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn items_path(database_dir: &Path) -> PathBuf {
        database_dir.join(TEMPLATES_DIR).join(ITEMS_FILE)
    }

    pub fn globals_path(database_dir: &Path) -> PathBuf {
        database_dir.join(GLOBALS_FILE)
    }

    /// Load database tables from `database_dir`.
    ///
    /// # Errors
    ///
    /// Fails if the directory does not exist or a present file cannot be parsed.
    pub fn load(database_dir: &Path) -> LoadResult<DatabaseTables> {
        if !database_dir.is_dir() {
            anyhow::bail!("Database directory {} does not exist", database_dir.display());
        }

        let templates_dir = database_dir.join(TEMPLATES_DIR);
        let templates = if templates_dir.is_dir() {
            Some(Templates {
                items: Self::load_items(&Self::items_path(database_dir))?,
                ..Templates::default()
            })
        } else {
            tracing::warn!(path = %templates_dir.display(), "templates directory missing");
            None
        };

        let globals_path = Self::globals_path(database_dir);
        let globals = if globals_path.is_file() {
            let content = read_file(&globals_path)?;
            let globals: Globals = serde_json::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse globals JSON: {}", e))?;
            Some(globals)
        } else {
            tracing::debug!(path = %globals_path.display(), "no globals file");
            None
        };

        Ok(DatabaseTables { templates, globals })
    }

    fn load_items(path: &Path) -> LoadResult<Option<ItemMap>> {
        if !path.is_file() {
            tracing::warn!(path = %path.display(), "item templates file missing");
            return Ok(None);
        }

        let content = read_file(path)?;
        let items: ItemMap = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item templates JSON: {}", e))?;
        tracing::debug!(count = items.len(), "loaded item templates");

        Ok(Some(items))
    }

    /// Write the loaded sections of `tables` into `database_dir`.
    ///
    /// Sections that are unset are not written, so files absent at load time
    /// stay absent.
    pub fn save(database_dir: &Path, tables: &DatabaseTables) -> LoadResult<()> {
        if let Some(items) = tables.templates.as_ref().and_then(|t| t.items.as_ref()) {
            write_json(&Self::items_path(database_dir), items)?;
        }
        if let Some(globals) = &tables.globals {
            write_json(&Self::globals_path(database_dir), globals)?;
        }
        Ok(())
    }
}
