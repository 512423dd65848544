//! Precondition failures raised before any patching happens.

/// The host never finished loading the item database.
///
/// Every variant is fatal: there is nothing to patch, and the plugin must fail
/// its initialization so the host surfaces the problem.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    /// The host has no database tables loaded.
    #[error("database tables are missing")]
    TablesMissing,

    /// The tables have no `templates` section.
    #[error("templates are missing from the database tables")]
    TemplatesMissing,

    /// The `templates` section has no `items` collection.
    #[error("items are missing from the templates")]
    ItemsMissing,
}

impl PatchError {
    /// Stable identifier for logs and host error reports.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::TablesMissing => "PATCH_TABLES_MISSING",
            Self::TemplatesMissing => "PATCH_TEMPLATES_MISSING",
            Self::ItemsMissing => "PATCH_ITEMS_MISSING",
        }
    }
}
