//! Plugin lifecycle hooks.
//!
//! Plugins implement [`PostDbLoadMod`] to run once after the host has loaded its
//! database and before any gameplay logic starts.
//!
//! # Architecture
//!
//! - Mods are registered in a [`ModRegistry`] and sorted by priority
//! - The host calls [`ModRegistry::run_post_db_load`] exactly once at startup
//! - Each mod receives a [`ModContext`] granting temporary mutable access to the
//!   host catalog; nothing may be retained past the call
//! - A failing mod is handled according to its [`ModCriticality`]

mod context;
mod registry;

pub use context::ModContext;
pub use registry::{ModRegistry, PostDbLoadSummary};

use crate::error::ModError;

/// Determines how a failing mod affects host startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModCriticality {
    /// Failure aborts startup and is surfaced by the host.
    ///
    /// This is the default: a mod that could not initialize leaves the
    /// database in a state the player did not ask for.
    Critical,

    /// Failure is logged and the remaining mods still run.
    Optional,
}

/// Mod that runs after the host database has been loaded.
pub trait PostDbLoadMod: Send + Sync {
    /// Returns a human-readable name for this mod (used in logging and errors).
    fn name(&self) -> &'static str;

    /// Returns the execution priority. Lower values run first.
    fn priority(&self) -> i32 {
        0
    }

    fn criticality(&self) -> ModCriticality {
        ModCriticality::Critical
    }

    /// Mutates the loaded database.
    ///
    /// Called once per process; an error aborts this mod's initialization.
    fn post_db_load(&self, ctx: &mut ModContext<'_>) -> Result<(), ModError>;
}
