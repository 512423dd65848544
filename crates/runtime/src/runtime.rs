//! Host orchestrator.
//!
//! The host owns the database server and the mod registry. Starting it runs
//! the post-database-load lifecycle exactly once: [`Host::start`] consumes the
//! host, so the lifecycle cannot be re-entered.

use std::sync::Arc;

use items_core::DatabaseTables;
use tracing::info;

use crate::database::DatabaseServer;
use crate::error::Result;
use crate::hooks::{ModRegistry, PostDbLoadMod, PostDbLoadSummary};

/// Host with a loaded database and registered mods, not yet started.
pub struct Host {
    database: DatabaseServer,
    mods: ModRegistry,
}

/// State after the lifecycle has run.
#[derive(Debug)]
pub struct StartedHost {
    pub database: DatabaseServer,
    pub summary: PostDbLoadSummary,
}

impl StartedHost {
    /// Patched tables, if the database was loaded.
    pub fn into_tables(self) -> Option<DatabaseTables> {
        self.database.into_tables()
    }
}

impl Host {
    pub fn builder() -> HostBuilder {
        HostBuilder::new()
    }

    /// Runs every registered mod once against the loaded database.
    ///
    /// Blocks until all mods returned. A failing critical mod aborts startup.
    pub fn start(mut self) -> Result<StartedHost> {
        info!(mods = self.mods.len(), loaded = self.database.is_loaded(), "starting host");
        let summary = self.mods.run_post_db_load(&mut self.database)?;
        Ok(StartedHost {
            database: self.database,
            summary,
        })
    }
}

/// Builder for [`Host`].
pub struct HostBuilder {
    tables: Option<DatabaseTables>,
    mods: ModRegistry,
}

impl HostBuilder {
    fn new() -> Self {
        Self {
            tables: None,
            mods: ModRegistry::empty(),
        }
    }

    /// Provide the loaded database tables
    pub fn database(mut self, tables: DatabaseTables) -> Self {
        self.tables = Some(tables);
        self
    }

    /// Register a mod
    pub fn with_mod(mut self, module: impl PostDbLoadMod + 'static) -> Self {
        self.mods.register(Arc::new(module));
        self
    }

    /// Replace the mod registry
    pub fn with_mods(mut self, mods: ModRegistry) -> Self {
        self.mods = mods;
        self
    }

    pub fn build(self) -> Host {
        let database = match self.tables {
            Some(tables) => DatabaseServer::with_tables(tables),
            None => DatabaseServer::new(),
        };
        Host {
            database,
            mods: self.mods,
        }
    }
}
