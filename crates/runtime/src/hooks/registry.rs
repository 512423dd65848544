//! Mod registry driving the post-database-load lifecycle.

use std::sync::Arc;

use items_core::CatalogProvider;
use tracing::{debug, error, info};

use super::{ModContext, ModCriticality, PostDbLoadMod};
use crate::error::ModError;

/// Outcome of one lifecycle run.
#[derive(Debug, Default)]
pub struct PostDbLoadSummary {
    /// Mods that completed, in execution order.
    pub loaded: Vec<&'static str>,
    /// Optional mods that failed, with their errors.
    pub failed: Vec<(&'static str, ModError)>,
}

/// Registry that owns the host's mods and runs them in priority order.
pub struct ModRegistry {
    mods: Vec<Arc<dyn PostDbLoadMod>>,
}

impl ModRegistry {
    /// Creates a registry; mods are sorted by priority (lower values first).
    /// Mods with equal priority keep their registration order.
    pub fn new(mut mods: Vec<Arc<dyn PostDbLoadMod>>) -> Self {
        mods.sort_by_key(|m| m.priority());
        Self { mods }
    }

    pub fn empty() -> Self {
        Self { mods: Vec::new() }
    }

    /// Adds a mod, keeping priority order.
    pub fn register(&mut self, module: Arc<dyn PostDbLoadMod>) {
        let at = self
            .mods
            .partition_point(|m| m.priority() <= module.priority());
        self.mods.insert(at, module);
    }

    /// Runs every mod's `post_db_load` against `catalog`.
    ///
    /// # Error Handling
    ///
    /// - `Critical` mods: the first failure is returned and later mods do not run
    /// - `Optional` mods: the failure is logged and recorded in the summary
    pub fn run_post_db_load(
        &self,
        catalog: &mut dyn CatalogProvider,
    ) -> Result<PostDbLoadSummary, ModError> {
        let mut summary = PostDbLoadSummary::default();
        let mut ctx = ModContext::new(catalog);

        for module in &self.mods {
            debug!(target: "runtime::hooks", module = module.name(), "running post-db-load");

            match module.post_db_load(&mut ctx) {
                Ok(()) => summary.loaded.push(module.name()),
                Err(e) => match module.criticality() {
                    ModCriticality::Critical => {
                        error!(
                            target: "runtime::hooks",
                            module = module.name(),
                            code = e.error_code(),
                            error = %e,
                            "Critical mod failed, aborting startup"
                        );
                        return Err(e);
                    }
                    ModCriticality::Optional => {
                        error!(
                            target: "runtime::hooks",
                            module = module.name(),
                            error = %e,
                            "Mod failed, continuing"
                        );
                        summary.failed.push((module.name(), e));
                    }
                },
            }
        }

        info!(
            target: "runtime::hooks",
            loaded = summary.loaded.len(),
            failed = summary.failed.len(),
            "post-db-load complete"
        );
        Ok(summary)
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }

    /// Returns an iterator over mod names and priorities in execution order.
    pub fn mods(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.mods.iter().map(|m| (m.name(), m.priority()))
    }
}

impl Default for ModRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use items_core::DatabaseTables;
    use std::sync::Mutex;

    struct Recorder {
        name: &'static str,
        priority: i32,
        criticality: ModCriticality,
        fail: bool,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl PostDbLoadMod for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn criticality(&self) -> ModCriticality {
            self.criticality
        }

        fn post_db_load(&self, _ctx: &mut ModContext<'_>) -> Result<(), ModError> {
            self.log.lock().unwrap().push(self.name);
            if self.fail {
                return Err(ModError::failed(self.name, "boom"));
            }
            Ok(())
        }
    }

    fn recorder(
        name: &'static str,
        priority: i32,
        criticality: ModCriticality,
        fail: bool,
        log: &Arc<Mutex<Vec<&'static str>>>,
    ) -> Arc<dyn PostDbLoadMod> {
        Arc::new(Recorder {
            name,
            priority,
            criticality,
            fail,
            log: Arc::clone(log),
        })
    }

    #[test]
    fn runs_in_priority_order() {
        let log = Arc::default();
        let mut registry = ModRegistry::new(vec![
            recorder("late", 10, ModCriticality::Critical, false, &log),
            recorder("early", -5, ModCriticality::Critical, false, &log),
        ]);
        registry.register(recorder("middle", 0, ModCriticality::Critical, false, &log));

        let mut tables = DatabaseTables::default();
        let summary = registry.run_post_db_load(&mut tables).unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["early", "middle", "late"]);
        assert_eq!(summary.loaded, vec!["early", "middle", "late"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn critical_failure_stops_startup() {
        let log = Arc::default();
        let registry = ModRegistry::new(vec![
            recorder("broken", 0, ModCriticality::Critical, true, &log),
            recorder("after", 1, ModCriticality::Critical, false, &log),
        ]);

        let err = registry
            .run_post_db_load(&mut DatabaseTables::default())
            .unwrap_err();

        assert_eq!(err.to_string(), "[broken]: boom");
        assert_eq!(*log.lock().unwrap(), vec!["broken"]);
    }

    #[test]
    fn optional_failure_is_recorded() {
        let log = Arc::default();
        let registry = ModRegistry::new(vec![
            recorder("flaky", 0, ModCriticality::Optional, true, &log),
            recorder("after", 1, ModCriticality::Critical, false, &log),
        ]);

        let summary = registry
            .run_post_db_load(&mut DatabaseTables::default())
            .unwrap();

        assert_eq!(summary.loaded, vec!["after"]);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].0, "flaky");
    }
}
