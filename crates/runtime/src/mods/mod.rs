//! Mods shipped with the host.
mod no_restrictions;

pub use no_restrictions::NoRestrictionsMod;
