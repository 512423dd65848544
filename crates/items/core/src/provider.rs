use crate::tables::DatabaseTables;

/// Host service that owns the loaded item database.
///
/// Plugins receive the provider for the duration of a lifecycle call and must
/// not hold on to the tables afterwards.
pub trait CatalogProvider {
    /// Loaded tables, or `None` if the host has not loaded its database.
    fn tables(&self) -> Option<&DatabaseTables>;

    fn tables_mut(&mut self) -> Option<&mut DatabaseTables>;
}

impl CatalogProvider for DatabaseTables {
    fn tables(&self) -> Option<&DatabaseTables> {
        Some(self)
    }

    fn tables_mut(&mut self) -> Option<&mut DatabaseTables> {
        Some(self)
    }
}
