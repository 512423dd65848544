//! Minimal [`items_core::CatalogProvider`] backed by in-memory tables.
use items_core::{CatalogProvider, DatabaseTables};

/// Holds the host's database tables once they are loaded.
#[derive(Debug, Default)]
pub struct DatabaseServer {
    tables: Option<DatabaseTables>,
}

impl DatabaseServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(tables: DatabaseTables) -> Self {
        Self {
            tables: Some(tables),
        }
    }

    /// Replace the loaded tables
    pub fn set_tables(&mut self, tables: DatabaseTables) {
        self.tables = Some(tables);
    }

    pub fn is_loaded(&self) -> bool {
        self.tables.is_some()
    }

    pub fn into_tables(self) -> Option<DatabaseTables> {
        self.tables
    }
}

impl CatalogProvider for DatabaseServer {
    fn tables(&self) -> Option<&DatabaseTables> {
        self.tables.as_ref()
    }

    fn tables_mut(&mut self) -> Option<&mut DatabaseTables> {
        self.tables.as_mut()
    }
}
