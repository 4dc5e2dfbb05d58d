//! Slot grid and page binding
//!
//! A `SlotGrid` is the fixed bank of slots a panel shows entries in, laid out
//! row-major with `columns = ceil(slots / rows)`. It also owns the focus
//! register, which only accepts bound slots.

use tracing::{debug, warn};

use super::traits::Slot;
use crate::error::GridError;
use crate::models::{Entry, EntryId};

/// Plain slot that remembers what it shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySlot {
    pub entry: Option<Entry>,
    pub active: bool,
    /// Number of bind calls received
    pub binds: usize,
}

impl Slot for MemorySlot {
    fn bind(&mut self, entry: &Entry) {
        self.entry = Some(*entry);
        self.binds += 1;
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.entry = None;
        }
    }
}

/// Fixed bank of slots with a logical row/column shape
#[derive(Debug)]
pub struct SlotGrid<S> {
    /// `None` marks a slot without bind capability
    slots: Vec<Option<S>>,
    rows: usize,
    bound: Vec<Option<Entry>>,
    focus: Option<usize>,
}

impl<S: Slot> SlotGrid<S> {
    /// Build a grid; every slot has bind capability
    pub fn new(slots: Vec<S>, rows: usize) -> Result<Self, GridError> {
        Self::with_optional_slots(slots.into_iter().map(Some).collect(), rows)
    }

    /// Build a grid where some positions may lack bind capability
    pub fn with_optional_slots(slots: Vec<Option<S>>, rows: usize) -> Result<Self, GridError> {
        validate_shape(slots.len(), rows)?;
        let count = slots.len();
        Ok(Self {
            slots,
            rows,
            bound: vec![None; count],
            focus: None,
        })
    }

    /// Slot count `N`
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        columns_for(self.len(), self.rows)
    }

    pub fn row_of(&self, slot: usize) -> usize {
        slot / self.columns()
    }

    pub fn is_bound(&self, slot: usize) -> bool {
        self.bound.get(slot).is_some_and(Option::is_some)
    }

    /// Number of slots showing an entry
    pub fn bound_count(&self) -> usize {
        self.bound.iter().filter(|b| b.is_some()).count()
    }

    pub fn entry_at(&self, slot: usize) -> Option<&Entry> {
        self.bound.get(slot).and_then(Option::as_ref)
    }

    pub fn entry_id_at(&self, slot: usize) -> Option<EntryId> {
        self.entry_at(slot).map(|entry| entry.id)
    }

    pub fn slot(&self, index: usize) -> Option<&S> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn slots(&self) -> impl Iterator<Item = Option<&S>> {
        self.slots.iter().map(Option::as_ref)
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Set focus; refuses slots that are not bound
    pub fn set_focus(&mut self, slot: Option<usize>) -> bool {
        match slot {
            None => {
                self.focus = None;
                true
            }
            Some(index) if self.is_bound(index) => {
                self.focus = Some(index);
                true
            }
            Some(index) => {
                warn!("refusing focus on unbound slot {}", index);
                false
            }
        }
    }

    /// Bound slot closest to `target`, preferring earlier slots on ties
    pub fn nearest_bound(&self, target: usize) -> Option<usize> {
        let target = target.min(self.len().saturating_sub(1));
        (0..self.len())
            .filter(|&i| self.is_bound(i))
            .min_by_key(|&i| (i.abs_diff(target), i))
    }

    /// Last bound slot
    pub fn last_bound(&self) -> Option<usize> {
        (0..self.len()).rev().find(|&i| self.is_bound(i))
    }

    /// Bind `catalog[page*N ..]` onto the slots
    ///
    /// Returns false without touching any slot when the page starts past the
    /// end of the catalog.
    pub fn assign_page(&mut self, catalog: &[Entry], page: usize) -> bool {
        let Some(start) = page.checked_mul(self.len()) else {
            return false;
        };
        if start >= catalog.len() {
            debug!(page, start, len = catalog.len(), "page out of range");
            return false;
        }
        let per_page = self.len();
        self.bind_from(catalog, start, per_page);
        true
    }

    /// Bind up to `window` entries starting at catalog offset `top`
    ///
    /// Returns the number of slots bound.
    pub fn assign_window(&mut self, catalog: &[Entry], top: usize, window: usize) -> usize {
        if top >= catalog.len() {
            self.clear();
            return 0;
        }
        let window = window.min(self.len());
        self.bind_from(catalog, top, window)
    }

    /// Deactivate every slot and drop focus
    pub fn clear(&mut self) {
        for (slot, bound) in self.slots.iter_mut().zip(self.bound.iter_mut()) {
            if let Some(slot) = slot {
                slot.set_active(false);
            }
            *bound = None;
        }
        self.focus = None;
    }

    fn bind_from(&mut self, catalog: &[Entry], start: usize, visible: usize) -> usize {
        let mut valid = 0;
        for (i, (slot, bound)) in self.slots.iter_mut().zip(self.bound.iter_mut()).enumerate() {
            let entry = if i < visible {
                catalog.get(start + i)
            } else {
                None
            };
            match (entry, slot) {
                (Some(entry), Some(slot)) => {
                    slot.bind(entry);
                    slot.set_active(true);
                    *bound = Some(*entry);
                    valid += 1;
                }
                (Some(entry), None) => {
                    warn!("slot {} cannot bind {}, leaving it inactive", i, entry.id);
                    *bound = None;
                }
                (None, Some(slot)) => {
                    slot.set_active(false);
                    *bound = None;
                }
                (None, None) => *bound = None,
            }
        }
        valid
    }
}

/// Columns for a grid of `slots` laid out in `rows`
pub fn columns_for(slots: usize, rows: usize) -> usize {
    if rows == 0 {
        return slots.max(1);
    }
    slots.div_ceil(rows).max(1)
}

/// Check a slot count / row count pair
pub fn validate_shape(slots: usize, rows: usize) -> Result<(), GridError> {
    if slots == 0 {
        return Err(GridError::NoSlots);
    }
    if rows == 0 || rows > slots {
        return Err(GridError::BadRows { rows, slots });
    }
    Ok(())
}
