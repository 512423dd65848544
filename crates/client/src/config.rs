//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to run one patching pass.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Database export to patch.
    pub database_dir: Option<PathBuf>,
    /// Rule file; the bundled rules are used when unset.
    pub mod_config: Option<PathBuf>,
    /// Where to write the patched database (default: in place).
    pub output_dir: Option<PathBuf>,
    /// Patch in memory only.
    pub dry_run: bool,
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl ClientConfig {
    pub fn new(database_dir: impl Into<PathBuf>) -> Self {
        Self {
            database_dir: Some(database_dir.into()),
            ..Self::default()
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_DIR` - Database export directory (required to run)
    /// - `MOD_CONFIG` - Restriction rule file, JSON or TOML (default: bundled rules)
    /// - `OUTPUT_DIR` - Output directory (default: overwrite the database export)
    /// - `DRY_RUN` - Skip writing the patched database (default: false)
    /// - `LOG_DIR` - Log directory (default: platform cache directory)
    /// - `SESSION_ID` - Log session name (default: timestamp)
    pub fn from_env() -> Self {
        let mut config = Self {
            database_dir: read_path("DATABASE_DIR"),
            mod_config: read_path("MOD_CONFIG"),
            output_dir: read_path("OUTPUT_DIR"),
            log_dir: read_path("LOG_DIR"),
            session_id: env::var("SESSION_ID").ok(),
            ..Self::default()
        };

        if let Some(dry_run) = read_env::<bool>("DRY_RUN") {
            config.dry_run = dry_run;
        } else if env::var("DRY_RUN").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.dry_run = true;
        }

        config
    }

    #[must_use]
    pub fn with_mod_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.mod_config = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = ClientConfig::new("db")
            .with_mod_config("rules.toml")
            .with_output_dir("out")
            .dry_run(true);

        assert_eq!(config.database_dir, Some(PathBuf::from("db")));
        assert_eq!(config.mod_config, Some(PathBuf::from("rules.toml")));
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        assert!(config.dry_run);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn default_has_no_database() {
        let config = ClientConfig::default();
        assert!(config.database_dir.is_none());
        assert!(!config.dry_run);
    }
}
