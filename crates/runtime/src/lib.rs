//! Plugin host for the item database.
//!
//! This crate provides the host side of the plugin lifecycle: a database server
//! exposing the loaded tables as an [`items_core::CatalogProvider`], a registry
//! of [`PostDbLoadMod`]s run once after loading, and the mods shipped with it.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`hooks`] provides the lifecycle trait, context and registry
//! - [`database`] holds the in-memory catalog
//! - [`mods`] contains the bundled mods
pub mod database;
pub mod error;
pub mod hooks;
pub mod mods;
pub mod runtime;

pub use database::DatabaseServer;
pub use error::{ModError, Result};
pub use hooks::{ModContext, ModCriticality, ModRegistry, PostDbLoadMod, PostDbLoadSummary};
pub use mods::NoRestrictionsMod;
pub use runtime::{Host, HostBuilder, StartedHost};
