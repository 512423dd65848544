//! Item category taxonomy.
//!
//! Templates point at their category through the `_parent` field, which holds
//! the base-class id of the node above them in the template tree. Only the
//! categories a rule can target are modeled here; every other parent id is
//! simply "uncategorized" and never patched.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Base-class id of the root `Item` node. Every template descends from it, so a
/// grid filter allowing it allows everything.
pub const ITEM_BASE_CLASS: &str = "54009119af1c4e2e3e8b4567";

/// Categories that a restriction rule can be configured for.
///
/// The string form (`BACKPACK`, `MOB_CONTAINER`, ...) is the section name used in
/// the rule configuration file.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    Backpack,
    /// Pouches, cases and other storage containers.
    SimpleContainer,
    /// Secured containers.
    MobContainer,
    #[strum(serialize = "FACECOVER")]
    #[serde(rename = "FACECOVER")]
    FaceCover,
    Headwear,
    Headphones,
}

impl ItemCategory {
    /// Returns the base-class id templates of this category use as `_parent`.
    pub const fn base_class(self) -> &'static str {
        match self {
            Self::Backpack => "5448e53e4bdc2d60728b4567",
            Self::SimpleContainer => "5795f317245977243854e041",
            Self::MobContainer => "5448bf274bdc2dfc2f8b456a",
            Self::FaceCover => "5a341c4686f77469e155819e",
            Self::Headwear => "5a341c4086f77401f2541505",
            Self::Headphones => "5645bcb74bdc2ded0b8b4578",
        }
    }

    /// Classifies a template by its parent id.
    pub fn from_parent(parent_id: &str) -> Option<Self> {
        Self::iter().find(|category| category.base_class() == parent_id)
    }

    /// Configuration section name of this category.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn classifies_known_parents() {
        assert_eq!(
            ItemCategory::from_parent("5448e53e4bdc2d60728b4567"),
            Some(ItemCategory::Backpack)
        );
        assert_eq!(
            ItemCategory::from_parent("5645bcb74bdc2ded0b8b4578"),
            Some(ItemCategory::Headphones)
        );
    }

    #[test]
    fn unknown_parent_is_uncategorized() {
        assert_eq!(ItemCategory::from_parent(ITEM_BASE_CLASS), None);
        assert_eq!(ItemCategory::from_parent(""), None);
    }

    #[test]
    fn section_names_round_trip() {
        for category in ItemCategory::iter() {
            assert_eq!(ItemCategory::from_str(category.as_str()), Ok(category));
        }
        assert_eq!(ItemCategory::FaceCover.as_str(), "FACECOVER");
        assert_eq!(ItemCategory::MobContainer.to_string(), "MOB_CONTAINER");
    }

    #[test]
    fn base_classes_are_distinct() {
        let mut ids: Vec<_> = ItemCategory::iter().map(ItemCategory::base_class).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ItemCategory::iter().count());
    }
}
