//! Item template model and restriction stripping.
//!
//! `items-core` defines the subset of the host item database that restriction
//! rules act on, the per-category [`RuleTable`], and the [`RestrictionStripper`]
//! that applies a table to loaded [`DatabaseTables`]. The crate performs no I/O;
//! loading and saving live in `items-content`, the plugin lifecycle in `runtime`.
pub mod category;
pub mod error;
pub mod provider;
pub mod raid;
pub mod rules;
pub mod strip;
pub mod tables;
pub mod template;

pub use category::{ITEM_BASE_CLASS, ItemCategory};
pub use error::PatchError;
pub use provider::CatalogProvider;
pub use raid::clear_raid_restrictions;
pub use rules::{CategoryRule, Restriction, RestrictionToggles, RuleTable};
pub use strip::{RestrictionStripper, StripReport, UNLIMITED_DISCARD, apply_restriction};
pub use tables::{DatabaseTables, Globals, GlobalsConfig, ItemMap, Templates};
pub use template::{Grid, GridFilter, GridProps, ItemProps, ItemTemplate};
