//! Restriction stripper: applies a [`RuleTable`] to the loaded item templates.
//!
//! # Pass structure
//!
//! 1. Every template is classified by its parent id. Templates without an
//!    enabled rule are left alone.
//! 2. Each enabled toggle of the matching rule writes the permissive value into
//!    its own property (see [`apply_restriction`]).
//! 3. Ids of templates whose rule removes them from conflicts are collected and
//!    stripped from every conflict list in a single second sweep.
//! 4. The global in-raid restriction list is cleared if the table asks for it.
//!
//! Precondition checks (tables, templates and items present) happen before the
//! first write. Applying the same table twice yields the same tables as
//! applying it once.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::category::ItemCategory;
use crate::error::PatchError;
use crate::provider::CatalogProvider;
use crate::raid::clear_raid_restrictions;
use crate::rules::{Restriction, RestrictionToggles, RuleTable};
use crate::tables::{DatabaseTables, ItemMap};
use crate::template::{Grid, GridFilter, ItemProps};

/// Value written to `DiscardLimit` meaning "no limit".
pub const UNLIMITED_DISCARD: i64 = -1;

/// What a stripping pass changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StripReport {
    /// Templates that matched an enabled rule.
    pub items_matched: usize,
    /// Matched templates that had at least one field changed.
    pub items_patched: usize,
    /// Matched templates skipped because they carry no property bag.
    pub items_without_props: usize,
    /// Changed fields per restriction.
    pub fields_changed: BTreeMap<Restriction, usize>,
    /// Entries removed from conflict lists of other templates.
    pub conflict_references_removed: usize,
    pub raid_restrictions_cleared: bool,
}

impl StripReport {
    pub fn total_fields_changed(&self) -> usize {
        self.fields_changed.values().sum()
    }

    /// True when the pass left the tables exactly as they were.
    pub fn is_noop(&self) -> bool {
        self.items_patched == 0
            && self.conflict_references_removed == 0
            && !self.raid_restrictions_cleared
    }
}

/// Applies a rule table to database tables.
#[derive(Clone, Copy, Debug)]
pub struct RestrictionStripper<'a> {
    rules: &'a RuleTable,
}

impl<'a> RestrictionStripper<'a> {
    pub fn new(rules: &'a RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'a RuleTable {
        self.rules
    }

    /// Strips the tables owned by a host provider.
    ///
    /// # Errors
    ///
    /// [`PatchError::TablesMissing`] if the provider has no tables loaded, plus
    /// every error of [`Self::strip`].
    pub fn strip_catalog<P>(&self, provider: &mut P) -> Result<StripReport, PatchError>
    where
        P: CatalogProvider + ?Sized,
    {
        let tables = provider.tables_mut().ok_or(PatchError::TablesMissing)?;
        self.strip(tables)
    }

    /// Runs one pass over `tables`.
    ///
    /// # Errors
    ///
    /// [`PatchError::TemplatesMissing`] or [`PatchError::ItemsMissing`] if the
    /// item collection is absent. Nothing is modified in that case.
    pub fn strip(&self, tables: &mut DatabaseTables) -> Result<StripReport, PatchError> {
        let items = tables.items_mut()?;
        let mut report = StripReport::default();
        let mut conflict_ids = BTreeSet::new();

        for item in items.values_mut() {
            let Some(category) = ItemCategory::from_parent(&item.parent) else {
                continue;
            };
            let Some(rule) = self.rules.active_rule(category) else {
                continue;
            };
            report.items_matched += 1;

            if rule.restrictions.removes_from_conflicts() {
                conflict_ids.insert(item.id.clone());
            }

            let Some(props) = item.props.as_mut() else {
                debug!(item = %item.id, %category, "template has no properties, skipping");
                report.items_without_props += 1;
                continue;
            };

            let changed = strip_props(props, &rule.restrictions, &mut report.fields_changed);
            if changed > 0 {
                report.items_patched += 1;
                trace!(item = %item.id, %category, changed, "patched template");
            }
        }

        if !conflict_ids.is_empty() {
            report.conflict_references_removed = remove_from_conflicts(items, &conflict_ids);
        }

        if self.rules.remove_restrictions_in_raid {
            report.raid_restrictions_cleared = clear_raid_restrictions(tables.globals.as_mut());
        }

        debug!(
            matched = report.items_matched,
            patched = report.items_patched,
            fields = report.total_fields_changed(),
            conflicts = report.conflict_references_removed,
            "stripping pass finished"
        );
        Ok(report)
    }
}

/// Applies every enabled toggle to `props`, returning how many fields changed.
fn strip_props(
    props: &mut ItemProps,
    toggles: &RestrictionToggles,
    fields_changed: &mut BTreeMap<Restriction, usize>,
) -> usize {
    let mut changed = 0;
    for restriction in toggles.enabled() {
        if apply_restriction(props, restriction) {
            *fields_changed.entry(restriction).or_default() += 1;
            changed += 1;
        }
    }
    changed
}

/// Writes the permissive value of `restriction` into `props`.
///
/// Scalar and list fields are written even when absent. Grids are only
/// rewritten when present. Returns whether anything changed.
pub fn apply_restriction(props: &mut ItemProps, restriction: Restriction) -> bool {
    match restriction {
        Restriction::BlocksEarpiece => set(&mut props.blocks_earpiece, false),
        Restriction::BlocksEyewear => set(&mut props.blocks_eyewear, false),
        Restriction::BlocksFaceCover => set(&mut props.blocks_face_cover, false),
        Restriction::BlocksHeadwear => set(&mut props.blocks_headwear, false),
        Restriction::CanPutIntoDuringTheRaid => {
            set(&mut props.can_put_into_during_the_raid, true)
        }
        Restriction::CantRemoveFromSlotsDuringRaid => {
            set(&mut props.cant_remove_from_slots_during_raid, Vec::new())
        }
        Restriction::ConflictingItems => set(&mut props.conflicting_items, Vec::new()),
        Restriction::DiscardLimit => set(&mut props.discard_limit, UNLIMITED_DISCARD),
        Restriction::DiscardingBlock => set(&mut props.discarding_block, false),
        Restriction::IsUndiscardable => set(&mut props.is_undiscardable, false),
        Restriction::IsUngivable => set(&mut props.is_ungivable, false),
        Restriction::IsUnremovable => set(&mut props.is_unremovable, false),
        Restriction::IsUnsaleable => set(&mut props.is_unsaleable, false),
        Restriction::ItemsFilter => props
            .grids
            .as_mut()
            .is_some_and(|grids| open_grids(grids)),
    }
}

fn set<T: PartialEq>(slot: &mut Option<T>, value: T) -> bool {
    if slot.as_ref() == Some(&value) {
        return false;
    }
    *slot = Some(value);
    true
}

/// Replaces the filters of every grid with a single allow-all filter.
fn open_grids(grids: &mut [Grid]) -> bool {
    let mut changed = false;
    for grid in grids {
        let Some(props) = grid.props.as_mut() else {
            continue;
        };
        changed |= set(&mut props.filters, vec![GridFilter::allow_all()]);
    }
    changed
}

/// Removes `ids` from the conflict list of every template.
fn remove_from_conflicts(items: &mut ItemMap, ids: &BTreeSet<String>) -> usize {
    let mut removed = 0;
    for item in items.values_mut() {
        let Some(conflicts) = item
            .props
            .as_mut()
            .and_then(|props| props.conflicting_items.as_mut())
        else {
            continue;
        };
        let before = conflicts.len();
        conflicts.retain(|id| !ids.contains(id));
        removed += before - conflicts.len();
    }
    removed
}
