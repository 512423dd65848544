//! Declarative restriction-removal rules.
//!
//! A [`RuleTable`] maps each [`ItemCategory`] to a [`CategoryRule`]: an
//! `enabled` switch plus one toggle per [`Restriction`]. The table is loaded once
//! and passed by reference into the stripper.
//!
//! # File format
//!
//! ```json
//! {
//!     "RemoveRestrictionsInRaid": true,
//!     "BACKPACK": {
//!         "enabled": true,
//!         "restrictions_to_remove": { "DiscardLimit": true, "IsUndiscardable": true }
//!     }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::category::ItemCategory;

/// A restriction field that a rule can clear.
///
/// The string form matches the toggle name in the rule file.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, IntoStaticStr,
)]
pub enum Restriction {
    BlocksEarpiece,
    BlocksEyewear,
    BlocksFaceCover,
    BlocksHeadwear,
    CanPutIntoDuringTheRaid,
    CantRemoveFromSlotsDuringRaid,
    ConflictingItems,
    DiscardLimit,
    DiscardingBlock,
    IsUndiscardable,
    IsUngivable,
    IsUnremovable,
    IsUnsaleable,
    #[strum(serialize = "itemsFilter")]
    ItemsFilter,
}

/// Which restrictions to clear for one category. Absent toggles are off.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RestrictionToggles {
    pub blocks_earpiece: bool,
    pub blocks_eyewear: bool,
    pub blocks_face_cover: bool,
    pub blocks_headwear: bool,
    pub can_put_into_during_the_raid: bool,
    pub cant_remove_from_slots_during_raid: bool,
    pub conflicting_items: bool,
    pub discard_limit: bool,
    pub discarding_block: bool,
    pub is_undiscardable: bool,
    pub is_ungivable: bool,
    pub is_unremovable: bool,
    pub is_unsaleable: bool,
    #[serde(rename = "itemsFilter")]
    pub items_filter: bool,
    /// Strip the item's id from every other item's conflict list.
    /// Follows `ConflictingItems` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_from_conflicts: Option<bool>,
}

impl RestrictionToggles {
    /// Toggles with every restriction enabled.
    pub fn all() -> Self {
        Restriction::iter().fold(Self::default(), |toggles, restriction| {
            toggles.with(restriction)
        })
    }

    /// Enables one restriction (builder pattern).
    #[must_use]
    pub fn with(mut self, restriction: Restriction) -> Self {
        *self.slot_mut(restriction) = true;
        self
    }

    pub fn is_enabled(&self, restriction: Restriction) -> bool {
        match restriction {
            Restriction::BlocksEarpiece => self.blocks_earpiece,
            Restriction::BlocksEyewear => self.blocks_eyewear,
            Restriction::BlocksFaceCover => self.blocks_face_cover,
            Restriction::BlocksHeadwear => self.blocks_headwear,
            Restriction::CanPutIntoDuringTheRaid => self.can_put_into_during_the_raid,
            Restriction::CantRemoveFromSlotsDuringRaid => self.cant_remove_from_slots_during_raid,
            Restriction::ConflictingItems => self.conflicting_items,
            Restriction::DiscardLimit => self.discard_limit,
            Restriction::DiscardingBlock => self.discarding_block,
            Restriction::IsUndiscardable => self.is_undiscardable,
            Restriction::IsUngivable => self.is_ungivable,
            Restriction::IsUnremovable => self.is_unremovable,
            Restriction::IsUnsaleable => self.is_unsaleable,
            Restriction::ItemsFilter => self.items_filter,
        }
    }

    fn slot_mut(&mut self, restriction: Restriction) -> &mut bool {
        match restriction {
            Restriction::BlocksEarpiece => &mut self.blocks_earpiece,
            Restriction::BlocksEyewear => &mut self.blocks_eyewear,
            Restriction::BlocksFaceCover => &mut self.blocks_face_cover,
            Restriction::BlocksHeadwear => &mut self.blocks_headwear,
            Restriction::CanPutIntoDuringTheRaid => &mut self.can_put_into_during_the_raid,
            Restriction::CantRemoveFromSlotsDuringRaid => {
                &mut self.cant_remove_from_slots_during_raid
            }
            Restriction::ConflictingItems => &mut self.conflicting_items,
            Restriction::DiscardLimit => &mut self.discard_limit,
            Restriction::DiscardingBlock => &mut self.discarding_block,
            Restriction::IsUndiscardable => &mut self.is_undiscardable,
            Restriction::IsUngivable => &mut self.is_ungivable,
            Restriction::IsUnremovable => &mut self.is_unremovable,
            Restriction::IsUnsaleable => &mut self.is_unsaleable,
            Restriction::ItemsFilter => &mut self.items_filter,
        }
    }

    /// Enabled restrictions in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = Restriction> + '_ {
        Restriction::iter().filter(|restriction| self.is_enabled(*restriction))
    }

    pub fn removes_from_conflicts(&self) -> bool {
        self.remove_from_conflicts.unwrap_or(self.conflicting_items)
    }
}

/// Rule for a single category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    #[serde(default)]
    pub enabled: bool,

    #[serde(
        rename = "restrictions_to_remove",
        alias = "rescrictions_to_remove",
        default
    )]
    pub restrictions: RestrictionToggles,
}

impl CategoryRule {
    pub fn enabled(restrictions: RestrictionToggles) -> Self {
        Self {
            enabled: true,
            restrictions,
        }
    }
}

/// Category → rule mapping plus the global raid switch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    /// Clear the global in-raid restriction list.
    #[serde(rename = "RemoveRestrictionsInRaid", default)]
    pub remove_restrictions_in_raid: bool,

    #[serde(flatten)]
    pub categories: BTreeMap<ItemCategory, CategoryRule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rule(mut self, category: ItemCategory, rule: CategoryRule) -> Self {
        self.categories.insert(category, rule);
        self
    }

    #[must_use]
    pub fn with_raid_restrictions_removed(mut self, remove: bool) -> Self {
        self.remove_restrictions_in_raid = remove;
        self
    }

    pub fn rule(&self, category: ItemCategory) -> Option<&CategoryRule> {
        self.categories.get(&category)
    }

    /// Rule for `category` if one is configured and enabled.
    pub fn active_rule(&self, category: ItemCategory) -> Option<&CategoryRule> {
        self.rule(category).filter(|rule| rule.enabled)
    }

    /// Categories whose rule is enabled.
    pub fn active_categories(&self) -> impl Iterator<Item = ItemCategory> + '_ {
        self.categories
            .iter()
            .filter(|(_, rule)| rule.enabled)
            .map(|(category, _)| *category)
    }
}
