//! Model slot selection: primary, comparison and additional slots.
//!
//! Slot 0 is the primary model, slot 1 the comparison model, and anything
//! after that an additional model. Filled slots never share a model and empty
//! slots only ever form a trailing run: a slot can be filled only once the
//! slot before it is. Invalid choices are filtered out of [`Selection::candidates`]
//! and, if attempted anyway, reported as [`Change::Ignored`].

use dioxus::logger::tracing::debug;

use crate::core::catalog::{all_models, catalog_size, Model, DEFAULT_PRIMARY};

use super::outcome::{Change, IgnoreReason};

pub const PRIMARY_SLOT: usize = 0;
pub const COMPARISON_SLOT: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Always at least two entries: primary and comparison.
    slots: Vec<Option<Model>>,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl Selection {
    /// Screen-load state: default primary, empty comparison, no additional slots.
    pub fn new() -> Self {
        Self {
            slots: vec![Some(DEFAULT_PRIMARY), None],
        }
    }

    /// Nothing chosen at all.
    pub fn empty() -> Self {
        Self {
            slots: vec![None, None],
        }
    }

    /// Most additional slots the catalog can fill.
    pub fn max_additional() -> usize {
        catalog_size().saturating_sub(2)
    }

    pub fn primary(&self) -> Option<Model> {
        self.slots[PRIMARY_SLOT]
    }

    pub fn comparison(&self) -> Option<Model> {
        self.slots[COMPARISON_SLOT]
    }

    pub fn additional(&self) -> &[Option<Model>] {
        &self.slots[2..]
    }

    pub fn slots(&self) -> &[Option<Model>] {
        &self.slots
    }

    /// Filled slots in slot order.
    pub fn filled(&self) -> Vec<Model> {
        self.slots.iter().flatten().copied().collect()
    }

    pub fn set_primary(&mut self, model: Model) -> Change {
        if self.primary() == Some(model) {
            return self.ignored("set_primary", PRIMARY_SLOT, IgnoreReason::Unchanged);
        }

        // A new primary invalidates every downstream choice.
        self.slots.truncate(2);
        self.slots[PRIMARY_SLOT] = Some(model);
        self.slots[COMPARISON_SLOT] = None;
        debug!(model = model.name(), "primary model set; later slots cleared");
        Change::Applied
    }

    pub fn set_comparison(&mut self, model: Model) -> Change {
        self.set_slot(COMPARISON_SLOT, model)
    }

    /// Assigns `model` to an existing slot.
    pub fn set_slot(&mut self, index: usize, model: Model) -> Change {
        if index == PRIMARY_SLOT {
            return self.set_primary(model);
        }
        if let Some(reason) = self.slot_blocker(index) {
            return self.ignored("set_slot", index, reason);
        }
        if self.slots[index] == Some(model) {
            return self.ignored("set_slot", index, IgnoreReason::Unchanged);
        }
        if self.is_chosen_elsewhere(index, model) {
            return self.ignored("set_slot", index, IgnoreReason::AlreadyChosen);
        }

        self.slots[index] = Some(model);
        debug!(slot = index, model = model.name(), "slot model set");
        Change::Applied
    }

    /// Appends an empty additional slot.
    pub fn add_slot(&mut self) -> Change {
        if let Some(reason) = self.add_slot_blocker() {
            return self.ignored("add_slot", self.slots.len(), reason);
        }

        self.slots.push(None);
        debug!(slots = self.slots.len(), "additional slot added");
        Change::Applied
    }

    /// Why a slot's picker is disabled, if it is.
    pub fn slot_blocker(&self, index: usize) -> Option<IgnoreReason> {
        if index >= self.slots.len() {
            return Some(IgnoreReason::NoSuchSlot);
        }
        if index == PRIMARY_SLOT || self.slots[index - 1].is_some() {
            return None;
        }
        Some(if index == COMPARISON_SLOT {
            IgnoreReason::PrimaryEmpty
        } else {
            IgnoreReason::PreviousSlotEmpty
        })
    }

    /// Why "add model" is disabled, if it is.
    pub fn add_slot_blocker(&self) -> Option<IgnoreReason> {
        if self.comparison().is_none() {
            Some(IgnoreReason::ComparisonEmpty)
        } else if self.additional().len() >= Self::max_additional() {
            Some(IgnoreReason::SlotCapReached)
        } else {
            None
        }
    }

    /// Models a slot's picker offers. The primary picker offers the whole
    /// catalog; every other picker omits models chosen in other slots.
    pub fn candidates(&self, index: usize) -> Vec<Model> {
        if index == PRIMARY_SLOT {
            return all_models();
        }
        all_models()
            .into_iter()
            .filter(|model| !self.is_chosen_elsewhere(index, *model))
            .collect()
    }

    fn is_chosen_elsewhere(&self, index: usize, model: Model) -> bool {
        self.slots
            .iter()
            .enumerate()
            .any(|(other, slot)| other != index && *slot == Some(model))
    }

    fn ignored(&self, action: &'static str, slot: usize, reason: IgnoreReason) -> Change {
        debug!(action, slot, ?reason, "selection action ignored");
        Change::Ignored(reason)
    }
}
