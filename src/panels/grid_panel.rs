//! Chunked grid panel (inventory, weapons, bestiary, hints)

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::{CellView, Panel, PanelKind, PanelResponse, PanelSpec, PanelView};
use crate::error::GridError;
use crate::models::{Entry, EntryKind};
use crate::nav::{
    ChunkedNavigator, FocusMemory, FocusSnapshot, InputEvent, MemorySlot, NavOutcome, Slot,
    SlotGrid, WindowNavigator,
};
use crate::registry;
use crate::sources::{CatalogSource, DirtyFlag};

pub struct GridPanel<S, C> {
    kind: PanelKind,
    entry_kind: EntryKind,
    spec: PanelSpec,
    navigator: ChunkedNavigator<S>,
    memory: FocusMemory,
    source: C,
    dirty: DirtyFlag,
    open: bool,
}

impl<C: CatalogSource> GridPanel<MemorySlot, C> {
    /// Panel with plain in-memory slots sized from `spec`
    pub fn with_memory_slots(
        kind: PanelKind,
        spec: PanelSpec,
        source: C,
        dirty: DirtyFlag,
    ) -> Result<Self, GridError> {
        let slots = vec![MemorySlot::default(); spec.slots];
        Self::new(kind, spec, slots, source, dirty)
    }
}

impl<S: Slot, C: CatalogSource> GridPanel<S, C> {
    /// `kind` must be a grid panel kind; the file browser kinds list nothing
    pub fn new(
        kind: PanelKind,
        spec: PanelSpec,
        slots: Vec<S>,
        source: C,
        dirty: DirtyFlag,
    ) -> Result<Self, GridError> {
        let entry_kind = kind.entry_kind().ok_or_else(|| GridError::NoEntryKind {
            panel: kind.key().to_string(),
        })?;
        let grid = SlotGrid::new(slots, spec.rows)?;
        Ok(Self {
            kind,
            entry_kind,
            spec,
            navigator: ChunkedNavigator::new(grid, spec.options),
            memory: FocusMemory::new(),
            source,
            dirty,
            open: false,
        })
    }

    pub fn navigator(&self) -> &ChunkedNavigator<S> {
        &self.navigator
    }

    pub fn snapshot(&self) -> FocusSnapshot {
        self.memory.snapshot()
    }

    pub fn focused_entry(&self) -> Option<&Entry> {
        self.navigator.focused_entry()
    }

    fn fetch(&self) -> Result<Vec<Entry>> {
        let entries = self
            .source
            .load_entries(&self.entry_kind)
            .with_context(|| format!("Failed to load {} from {}", self.kind, self.source.name()))?;
        Ok(registry::prepare_catalog(self.entry_kind, entries))
    }

    /// Bind the page holding the memory target, or nothing for an empty list
    fn restore(&mut self, memory: &FocusMemory) {
        let per_page = self.navigator.per_page();
        if let Some(target) = memory.resolve(self.navigator.catalog(), per_page) {
            self.navigator.show_page(target.page, Some(target.slot));
        }
    }

    /// Reload the catalog when the dirty flag was raised, keeping focus
    ///
    /// Returns true when a reload happened.
    pub fn refresh_if_dirty(&mut self) -> Result<bool> {
        if !self.dirty.take() {
            return Ok(false);
        }
        let mut kept = FocusMemory::new();
        let grid = self.navigator.grid();
        kept.capture(grid.focus(), |slot| grid.entry_id_at(slot));

        let entries = self.fetch()?;
        self.navigator.load(entries);
        self.restore(&kept);
        debug!(panel = %self.kind, len = self.navigator.catalog().len(), "catalog refreshed");
        Ok(true)
    }
}

impl<S: Slot, C: CatalogSource> Panel for GridPanel<S, C> {
    fn kind(&self) -> PanelKind {
        self.kind
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn open_panel(&mut self) -> Result<()> {
        // Opening always reloads, so a pending change is already covered
        self.dirty.take();
        let entries = self.fetch()?;
        self.navigator.load(entries);

        if self.spec.remember_focus {
            let memory = self.memory.clone();
            self.restore(&memory);
        } else {
            self.restore(&FocusMemory::new());
        }
        self.open = true;
        info!(
            panel = %self.kind,
            entries = self.navigator.catalog().len(),
            page = self.navigator.page(),
            focus = ?self.navigator.focus(),
            "panel opened"
        );
        Ok(())
    }

    fn close_panel(&mut self) {
        if self.spec.remember_focus {
            let grid = self.navigator.grid();
            self.memory.capture(grid.focus(), |slot| grid.entry_id_at(slot));
        }
        self.navigator.cancel_animation();
        self.open = false;
        debug!(panel = %self.kind, "panel closed");
    }

    fn handle_input(&mut self, event: InputEvent) -> Result<PanelResponse> {
        if !self.open {
            return Ok(PanelResponse::Ignored);
        }
        self.refresh_if_dirty()?;
        let response = match event {
            InputEvent::Move(direction) => {
                PanelResponse::Nav(self.navigator.handle_directional_input(direction))
            }
            InputEvent::Confirm => match self.navigator.focused_entry() {
                Some(entry) => PanelResponse::Confirmed(*entry),
                None => PanelResponse::Ignored,
            },
            InputEvent::Cancel => {
                self.close_panel();
                PanelResponse::Closed
            }
        };
        Ok(response)
    }

    fn focused(&self) -> Option<Entry> {
        self.navigator.focused_entry().copied()
    }

    fn refresh(&mut self) -> Result<bool> {
        if !self.open {
            return Ok(false);
        }
        self.refresh_if_dirty()
    }

    fn begin_animation(&mut self) {
        self.navigator.begin_animation();
    }

    fn finish_animation(&mut self) -> Option<NavOutcome> {
        self.navigator.finish_animation()
    }

    fn view(&self) -> PanelView {
        let grid = self.navigator.grid();
        let behavior = registry::behavior(self.entry_kind);
        let cells = (0..grid.len())
            .map(|slot| {
                grid.entry_at(slot).map(|entry| CellView {
                    label: self
                        .source
                        .display_name(&entry.id)
                        .unwrap_or_else(|| entry.id.to_string()),
                    detail: behavior
                        .show_quantity
                        .then(|| format!("x{}", entry.quantity)),
                    focused: grid.focus() == Some(slot),
                })
            })
            .collect();
        PanelView {
            title: behavior.label.to_string(),
            cells,
            columns: grid.columns(),
            position: format!(
                "{}/{}",
                self.navigator.page() + 1,
                self.navigator.total_pages()
            ),
            state: self.navigator.state(),
        }
    }
}
