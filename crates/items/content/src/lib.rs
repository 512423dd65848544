//! Loaders for restriction rules and the host item database.
//!
//! This crate reads the data files consumed by `items-core`:
//! - Restriction rule tables (JSON or TOML)
//! - Item templates (`templates/items.json`)
//! - Global settings (`globals.json`)
//!
//! and writes patched tables back in the same layout.

pub mod loaders;

pub use loaders::{ConfigLoader, ContentFactory, DatabaseLoader, LoadResult};
