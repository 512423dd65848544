//! Command-line host for the No-Restrictions mod.
//!
//! # Architecture
//!
//! ```text
//! Client (composition root)
//!   ├─→ ContentFactory (rule file + database export)
//!   ├─→ Host (database server + mod registry)
//!   │     └─→ NoRestrictionsMod
//!   └─→ ContentFactory (write patched database)
//! ```
//!
//! The client loads everything up front, starts the host once, and writes the
//! patched tables back unless running dry.

pub mod config;
pub mod logging;

pub use config::ClientConfig;

use std::path::PathBuf;

use anyhow::{Context, Result};
use items_content::ContentFactory;
use runtime::{Host, NoRestrictionsMod};

/// Outcome of a client run.
#[derive(Debug)]
pub struct RunSummary {
    /// Mods that completed their lifecycle.
    pub mods_loaded: Vec<&'static str>,
    /// Directory the patched database was written to; `None` on a dry run.
    pub written_to: Option<PathBuf>,
}

/// Runs one patching pass as configured.
pub struct Client {
    config: ClientConfig,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Load, patch and (unless dry) save the database.
    pub fn run(&self) -> Result<RunSummary> {
        let database_dir = self
            .config
            .database_dir
            .as_deref()
            .context("No database directory configured (set DATABASE_DIR)")?;

        let mut factory = ContentFactory::new(database_dir);
        if let Some(path) = &self.config.mod_config {
            factory = factory.with_config(path);
        }

        // 1. Load rules and database
        let rules = factory.load_rules().context("Failed to load restriction rules")?;
        let tables = factory
            .load_database()
            .context("Failed to load item database")?;
        tracing::debug!(
            database = %database_dir.display(),
            categories = rules.active_categories().count(),
            "content loaded"
        );

        // 2. Run the lifecycle once
        let started = Host::builder()
            .database(tables)
            .with_mod(NoRestrictionsMod::new(rules))
            .build()
            .start()?;
        let mods_loaded = started.summary.loaded.clone();
        let tables = started
            .into_tables()
            .context("Host finished without a database")?;

        // 3. Write back
        if self.config.dry_run {
            tracing::info!("Dry run, patched database not written");
            return Ok(RunSummary {
                mods_loaded,
                written_to: None,
            });
        }

        let output_dir = self
            .config
            .output_dir
            .clone()
            .unwrap_or_else(|| database_dir.to_path_buf());
        factory
            .save_database(&tables, Some(&output_dir))
            .context("Failed to write patched database")?;
        tracing::info!("Patched database written to {}", output_dir.display());

        Ok(RunSummary {
            mods_loaded,
            written_to: Some(output_dir),
        })
    }
}
