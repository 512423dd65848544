//! Content loaders for reading rule and database files.

pub mod config;
pub mod database;
pub mod factory;

pub use config::ConfigLoader;
pub use database::DatabaseLoader;
pub use factory::ContentFactory;

use std::path::Path;

use anyhow::Context;
use serde::Serialize;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Writes `value` as pretty-printed JSON, creating parent directories.
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> LoadResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    std::fs::write(path, content)
        .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
}
