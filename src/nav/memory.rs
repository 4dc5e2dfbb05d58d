//! Focus memory across panel hide/show
//!
//! The snapshot tracks the focused entry by identity, with the slot offset
//! kept as a fallback for when that entry is gone from the refreshed catalog.

use tracing::debug;

use crate::models::{Entry, EntryId, position_of};

/// What was focused when the panel was last hidden
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusSnapshot {
    pub last_entry_id: Option<EntryId>,
    pub last_slot_index: Option<usize>,
}

/// Where focus should land after reopening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTarget {
    /// Catalog index
    pub index: usize,
    pub page: usize,
    pub slot: usize,
}

#[derive(Debug, Clone, Default)]
pub struct FocusMemory {
    snapshot: FocusSnapshot,
}

impl FocusMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> FocusSnapshot {
        self.snapshot
    }

    /// Record the focused slot and the id bound to it
    ///
    /// With no focus both fields are cleared.
    pub fn capture(
        &mut self,
        focus: Option<usize>,
        slot_entry: impl Fn(usize) -> Option<EntryId>,
    ) -> FocusSnapshot {
        self.snapshot = match focus {
            Some(slot) => FocusSnapshot {
                last_entry_id: slot_entry(slot),
                last_slot_index: Some(slot),
            },
            None => FocusSnapshot::default(),
        };
        debug!(snapshot = ?self.snapshot, "focus captured");
        self.snapshot
    }

    /// Resolve the stored snapshot against a fresh catalog
    pub fn resolve(&self, catalog: &[Entry], per_page: usize) -> Option<FocusTarget> {
        resolve(&self.snapshot, catalog, per_page)
    }
}

/// Best-effort target for `snapshot` in `catalog`
///
/// Tries the remembered id, then the remembered slot offset clamped to the
/// catalog, then the first entry. `None` only for an empty catalog.
pub fn resolve(snapshot: &FocusSnapshot, catalog: &[Entry], per_page: usize) -> Option<FocusTarget> {
    if catalog.is_empty() {
        return None;
    }
    let last = catalog.len() - 1;
    let index = snapshot
        .last_entry_id
        .and_then(|id| position_of(catalog, &id))
        .or_else(|| snapshot.last_slot_index.map(|slot| slot.min(last)))
        .unwrap_or(0);
    let per_page = per_page.max(1);
    Some(FocusTarget {
        index,
        page: index / per_page,
        slot: index % per_page,
    })
}
