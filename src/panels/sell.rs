//! Shop sell list
//!
//! One vertical column of owned entries per tab. Left and Right switch
//! tabs, Up and Down move through the column and step pages at its ends.
//! Each tab keeps its own page until the shop is opened again.

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::{CellView, Panel, PanelKind, PanelResponse, PanelSpec, PanelView};
use crate::error::GridError;
use crate::models::{Entry, EntryId, EntryKind, WeaponClass, position_of};
use crate::nav::{
    ChunkedNavigator, Direction, InputEvent, MemorySlot, NavOutcome, Slot, SlotGrid,
    WindowNavigator,
};
use crate::registry;
use crate::sources::{CatalogSource, DirtyFlag};

/// Tabs in display order
pub const SELL_TABS: [EntryKind; 3] = [
    EntryKind::Weapon(WeaponClass::Blade),
    EntryKind::Weapon(WeaponClass::Shooter),
    EntryKind::Item,
];

pub struct SellPanel<S, C> {
    navigator: ChunkedNavigator<S>,
    source: C,
    dirty: DirtyFlag,
    tab: usize,
    pages: [usize; SELL_TABS.len()],
    open: bool,
}

impl<C: CatalogSource> SellPanel<MemorySlot, C> {
    pub fn with_memory_slots(
        spec: PanelSpec,
        source: C,
        dirty: DirtyFlag,
    ) -> Result<Self, GridError> {
        let slots = vec![MemorySlot::default(); spec.slots];
        Self::new(spec, slots, source, dirty)
    }
}

impl<S: Slot, C: CatalogSource> SellPanel<S, C> {
    pub fn new(
        spec: PanelSpec,
        slots: Vec<S>,
        source: C,
        dirty: DirtyFlag,
    ) -> Result<Self, GridError> {
        let grid = SlotGrid::new(slots, spec.rows)?;
        Ok(Self {
            navigator: ChunkedNavigator::new(grid, spec.options),
            source,
            dirty,
            tab: 0,
            pages: [0; SELL_TABS.len()],
            open: false,
        })
    }

    pub fn navigator(&self) -> &ChunkedNavigator<S> {
        &self.navigator
    }

    /// Kind listed by the current tab
    pub fn tab(&self) -> EntryKind {
        SELL_TABS[self.tab]
    }

    /// Page stored for `kind`, zero for a kind with no tab
    pub fn page_of(&self, kind: EntryKind) -> usize {
        SELL_TABS
            .iter()
            .position(|tab| *tab == kind)
            .map_or(0, |index| self.pages[index])
    }

    /// Owned entries of the current tab
    fn fetch(&self) -> Result<Vec<Entry>> {
        let kind = self.tab();
        let entries = self
            .source
            .load_entries(&kind)
            .with_context(|| format!("Failed to load {kind:?} from {}", self.source.name()))?;
        Ok(entries
            .into_iter()
            .filter(|entry| kind.matches(&entry.id) && entry.quantity > 0)
            .collect())
    }

    /// Load the current tab on its stored page, focus on top
    fn show_tab(&mut self) -> Result<()> {
        let entries = self.fetch()?;
        self.navigator.load(entries);
        let page = self.pages[self.tab];
        if !self.navigator.show_page(page, Some(0)) {
            self.pages[self.tab] = 0;
            self.navigator.show_page(0, Some(0));
        }
        debug!(tab = ?self.tab(), page = self.navigator.page(), "sell tab shown");
        Ok(())
    }

    fn change_tab(&mut self, forward: bool) -> Result<PanelResponse> {
        self.pages[self.tab] = self.navigator.page();
        let len = SELL_TABS.len();
        self.tab = if forward {
            (self.tab + 1) % len
        } else {
            (self.tab + len - 1) % len
        };
        self.show_tab()?;
        Ok(PanelResponse::TabChanged(self.tab()))
    }

    /// Reload the current tab when the dirty flag was raised
    ///
    /// Focus follows the focused entry; when it is gone the same position
    /// is kept, clamped to the shorter list.
    pub fn refresh_if_dirty(&mut self) -> Result<bool> {
        if !self.dirty.take() {
            return Ok(false);
        }
        let per_page = self.navigator.per_page();
        let kept: Option<EntryId> = self.navigator.focused_entry().map(|e| e.id);
        let position = self.navigator.page() * per_page + self.navigator.focus().unwrap_or(0);

        let entries = self.fetch()?;
        self.navigator.load(entries);
        let catalog = self.navigator.catalog();
        if !catalog.is_empty() {
            let index = kept
                .and_then(|id| position_of(catalog, &id))
                .unwrap_or(position)
                .min(catalog.len() - 1);
            self.navigator.show_page(index / per_page, Some(index % per_page));
        }
        self.pages[self.tab] = self.navigator.page();
        debug!(tab = ?self.tab(), len = self.navigator.catalog().len(), "sell list refreshed");
        Ok(true)
    }
}

impl<S: Slot, C: CatalogSource> Panel for SellPanel<S, C> {
    fn kind(&self) -> PanelKind {
        PanelKind::Sell
    }

    fn is_open(&self) -> bool {
        self.open
    }

    /// Every tab starts over on its first page, blades first
    fn open_panel(&mut self) -> Result<()> {
        self.dirty.take();
        self.pages = [0; SELL_TABS.len()];
        self.tab = 0;
        self.show_tab()?;
        self.open = true;
        info!(
            tab = ?self.tab(),
            entries = self.navigator.catalog().len(),
            "sell list opened"
        );
        Ok(())
    }

    fn close_panel(&mut self) {
        self.navigator.cancel_animation();
        self.open = false;
        debug!("sell list closed");
    }

    fn handle_input(&mut self, event: InputEvent) -> Result<PanelResponse> {
        if !self.open {
            return Ok(PanelResponse::Ignored);
        }
        self.refresh_if_dirty()?;
        let response = match event {
            InputEvent::Move(Direction::Left) => self.change_tab(false)?,
            InputEvent::Move(Direction::Right) => self.change_tab(true)?,
            InputEvent::Move(direction) => {
                let outcome = self.navigator.handle_directional_input(direction);
                self.pages[self.tab] = self.navigator.page();
                PanelResponse::Nav(outcome)
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
        let outcome = self.navigator.finish_animation();
        self.pages[self.tab] = self.navigator.page();
        outcome
    }

    fn view(&self) -> PanelView {
        let grid = self.navigator.grid();
        let behavior = registry::behavior(self.tab());
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
            title: format!("Sell: {}", behavior.label),
            cells,
            columns: grid.columns(),
            position: format!(
                "{} {}/{}",
                behavior.label,
                self.navigator.page() + 1,
                self.navigator.total_pages()
            ),
            state: self.navigator.state(),
        }
    }
}
