//! Services handed to mods during a lifecycle call.

use items_core::CatalogProvider;

/// Context provided to mods when the database has been loaded.
///
/// Host services are injected here explicitly instead of being looked up by
/// name. The borrow ends with the lifecycle call.
pub struct ModContext<'a> {
    /// Host catalog owning the loaded item database
    catalog: &'a mut dyn CatalogProvider,
}

impl<'a> ModContext<'a> {
    pub fn new(catalog: &'a mut dyn CatalogProvider) -> Self {
        Self { catalog }
    }

    pub fn catalog(&mut self) -> &mut dyn CatalogProvider {
        &mut *self.catalog
    }
}
