//! Mod that strips item restrictions after the database has been loaded.

use items_core::{RestrictionStripper, RuleTable, StripReport};
use tracing::info;

use crate::error::ModError;
use crate::hooks::{ModContext, PostDbLoadMod};

/// Applies a restriction [`RuleTable`] to the host's item templates.
#[derive(Clone, Debug)]
pub struct NoRestrictionsMod {
    rules: RuleTable,
}

impl NoRestrictionsMod {
    pub const NAME: &'static str = "NoRestrictions";

    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Runs the stripper against the catalog behind `ctx`.
    pub fn apply(&self, ctx: &mut ModContext<'_>) -> Result<StripReport, ModError> {
        RestrictionStripper::new(&self.rules)
            .strip_catalog(ctx.catalog())
            .map_err(|e| ModError::patch(Self::NAME, e))
    }
}

impl PostDbLoadMod for NoRestrictionsMod {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn post_db_load(&self, ctx: &mut ModContext<'_>) -> Result<(), ModError> {
        let report = self.apply(ctx)?;

        info!(
            module = Self::NAME,
            matched = report.items_matched,
            patched = report.items_patched,
            fields = report.total_fields_changed(),
            conflicts_removed = report.conflict_references_removed,
            raid_restrictions_cleared = report.raid_restrictions_cleared,
            "restrictions removed"
        );
        for (restriction, count) in &report.fields_changed {
            info!(%restriction, count, "cleared restriction");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabaseServer;
    use items_core::{
        CategoryRule, CatalogProvider, DatabaseTables, ItemCategory, ItemProps, ItemTemplate,
        Restriction, RestrictionToggles, Templates,
    };

    fn backpack_rules() -> RuleTable {
        RuleTable::new().with_rule(
            ItemCategory::Backpack,
            CategoryRule::enabled(
                RestrictionToggles::default()
                    .with(Restriction::DiscardLimit)
                    .with(Restriction::IsUndiscardable),
            ),
        )
    }

    #[test]
    fn patches_catalog_through_context() {
        let mut server = DatabaseServer::with_tables(DatabaseTables::with_items([
            ItemTemplate::new("pack", ItemCategory::Backpack.base_class()).with_props(ItemProps {
                discard_limit: Some(3),
                is_undiscardable: Some(true),
                ..ItemProps::default()
            }),
        ]));
        let module = NoRestrictionsMod::new(backpack_rules());

        module.post_db_load(&mut ModContext::new(&mut server)).unwrap();

        let props = server.tables().unwrap().items().unwrap()["pack"]
            .props
            .clone()
            .unwrap();
        assert_eq!(props.discard_limit, Some(-1));
        assert_eq!(props.is_undiscardable, Some(false));
    }

    #[test]
    fn unloaded_server_fails_with_mod_name() {
        let mut server = DatabaseServer::new();
        let module = NoRestrictionsMod::new(backpack_rules());

        let err = module
            .post_db_load(&mut ModContext::new(&mut server))
            .unwrap_err();

        assert_eq!(err.mod_name(), "NoRestrictions");
        assert_eq!(err.error_code(), "PATCH_TABLES_MISSING");
        assert_eq!(err.to_string(), "[NoRestrictions]: database tables are missing");
    }

    #[test]
    fn missing_templates_are_fatal() {
        let mut server = DatabaseServer::with_tables(DatabaseTables::default());
        let err = NoRestrictionsMod::new(backpack_rules())
            .apply(&mut ModContext::new(&mut server))
            .unwrap_err();
        assert_eq!(err.error_code(), "PATCH_TEMPLATES_MISSING");

        server.set_tables(DatabaseTables {
            templates: Some(Templates::default()),
            globals: None,
        });
        let err = NoRestrictionsMod::new(backpack_rules())
            .apply(&mut ModContext::new(&mut server))
            .unwrap_err();
        assert_eq!(err.error_code(), "PATCH_ITEMS_MISSING");
    }
}
