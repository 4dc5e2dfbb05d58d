//! Chunked windowing: the catalog is cut into pages of `N` entries

use tracing::debug;

use super::focus::{HorizontalRule, resolve_vertical_wrap_focus};
use super::grid::SlotGrid;
use super::input::{Direction, InputGate, NavOutcome};
use super::traits::{Slot, WindowNavigator};
use crate::models::Entry;

/// Per-panel navigation options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkedOptions {
    pub horizontal_rule: HorizontalRule,
    /// Moving past the top or bottom row turns the page
    pub vertical_wrap: bool,
    /// Turning past the last page lands on the first and back; when off,
    /// the first and last pages block
    pub page_wrap: bool,
}

impl Default for ChunkedOptions {
    fn default() -> Self {
        Self {
            horizontal_rule: HorizontalRule::default(),
            vertical_wrap: false,
            page_wrap: true,
        }
    }
}

/// Page-at-a-time navigator over a slot grid
#[derive(Debug)]
pub struct ChunkedNavigator<S> {
    grid: SlotGrid<S>,
    catalog: Vec<Entry>,
    page: usize,
    options: ChunkedOptions,
    gate: InputGate,
}

impl<S: Slot> ChunkedNavigator<S> {
    pub fn new(grid: SlotGrid<S>, options: ChunkedOptions) -> Self {
        Self {
            grid,
            catalog: Vec::new(),
            page: 0,
            options,
            gate: InputGate::default(),
        }
    }

    pub fn grid(&self) -> &SlotGrid<S> {
        &self.grid
    }

    pub fn catalog(&self) -> &[Entry] {
        &self.catalog
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Entries per page
    pub fn per_page(&self) -> usize {
        self.grid.len()
    }

    /// `max(1, ceil(len / N))`
    pub fn total_pages(&self) -> usize {
        self.catalog.len().div_ceil(self.per_page()).max(1)
    }

    /// Replace the catalog; slots stay blank until a page is shown
    pub fn load(&mut self, catalog: Vec<Entry>) {
        self.catalog = catalog;
        self.page = 0;
        self.grid.clear();
        self.gate.reset();
    }

    /// Drop the catalog and blank every slot
    pub fn clear(&mut self) {
        self.load(Vec::new());
    }

    /// Bind `page` and focus the bound slot nearest to `focus_slot`
    ///
    /// Returns false, leaving the grid as it was, when the page is out of
    /// range.
    pub fn show_page(&mut self, page: usize, focus_slot: Option<usize>) -> bool {
        if !self.grid.assign_page(&self.catalog, page) {
            return false;
        }
        self.page = page;
        let focus = focus_slot.and_then(|slot| self.grid.nearest_bound(slot));
        self.grid.set_focus(focus);
        debug!(page, ?focus, "page shown");
        true
    }

    /// Page after the current one, wrapping to the first
    pub fn next_page(&self) -> usize {
        if (self.page + 1).saturating_mul(self.per_page()) >= self.catalog.len() {
            0
        } else {
            self.page + 1
        }
    }

    /// Page before the current one, wrapping to the last
    pub fn previous_page(&self) -> usize {
        if self.page == 0 {
            self.catalog.len().saturating_sub(1) / self.per_page()
        } else {
            self.page - 1
        }
    }

    /// Page a forward turn lands on; `None` at the last page without wrap
    fn forward_target(&self) -> Option<usize> {
        let next = self.next_page();
        (next != 0 || self.options.page_wrap).then_some(next)
    }

    fn backward_target(&self) -> Option<usize> {
        (self.page != 0 || self.options.page_wrap).then(|| self.previous_page())
    }

    pub fn page_forward(&mut self) -> NavOutcome {
        let previous = self.grid.focus().unwrap_or(0);
        let rule = self.options.horizontal_rule;
        let target = self.forward_target();
        self.turn_page(target, |visible, columns| {
            rule.resolve(previous, visible, columns, true)
        })
    }

    pub fn page_backward(&mut self) -> NavOutcome {
        let previous = self.grid.focus().unwrap_or(0);
        let rule = self.options.horizontal_rule;
        let target = self.backward_target();
        self.turn_page(target, |visible, columns| {
            rule.resolve(previous, visible, columns, false)
        })
    }

    /// Wrap past the bottom row onto the top of the next page
    pub fn row_wrap_down(&mut self) -> NavOutcome {
        let target = self.forward_target();
        self.turn_page(target, |visible, _| resolve_vertical_wrap_focus(visible, true))
    }

    /// Wrap past the top row onto the bottom of the previous page
    pub fn row_wrap_up(&mut self) -> NavOutcome {
        let target = self.backward_target();
        self.turn_page(target, |visible, _| resolve_vertical_wrap_focus(visible, false))
    }

    fn turn_page(
        &mut self,
        target: Option<usize>,
        resolve: impl FnOnce(usize, usize) -> usize,
    ) -> NavOutcome {
        if self.catalog.is_empty() || self.total_pages() <= 1 {
            return NavOutcome::Ignored;
        }
        let Some(target) = target else {
            return NavOutcome::Blocked;
        };
        let page = if self.grid.assign_page(&self.catalog, target) {
            target
        } else if self.grid.assign_page(&self.catalog, 0) {
            0
        } else {
            return NavOutcome::Ignored;
        };
        self.page = page;

        // Slots in use on this page, counting gaps left by slots that
        // cannot bind
        let visible = self.grid.last_bound().map_or(0, |last| last + 1);
        let wanted = resolve(visible, self.grid.columns());
        let Some(focus) = self.grid.nearest_bound(wanted) else {
            self.grid.set_focus(None);
            return NavOutcome::Ignored;
        };
        self.grid.set_focus(Some(focus));
        debug!(page, wanted, focus, "page turned");
        NavOutcome::PageChanged { page, focus }
    }

    fn move_focus(&mut self, from: usize, to: usize) -> NavOutcome {
        if self.grid.set_focus(Some(to)) {
            NavOutcome::FocusMoved {
                from: Some(from),
                to,
            }
        } else {
            NavOutcome::Blocked
        }
    }
}

impl<S: Slot> WindowNavigator for ChunkedNavigator<S> {
    fn gate(&self) -> &InputGate {
        &self.gate
    }

    fn gate_mut(&mut self) -> &mut InputGate {
        &mut self.gate
    }

    fn apply_move(&mut self, direction: Direction) -> NavOutcome {
        if self.catalog.is_empty() {
            return NavOutcome::Ignored;
        }
        let Some(current) = self.grid.focus() else {
            return match self.grid.nearest_bound(0) {
                Some(first) => {
                    self.grid.set_focus(Some(first));
                    NavOutcome::FocusMoved {
                        from: None,
                        to: first,
                    }
                }
                None => NavOutcome::Ignored,
            };
        };

        let columns = self.grid.columns();
        let row = self.grid.row_of(current);
        let row_start = row * columns;
        let row_end = (row_start + columns).min(self.grid.len());

        match direction {
            Direction::Left => match (row_start..current).rev().find(|&i| self.grid.is_bound(i)) {
                Some(left) => self.move_focus(current, left),
                None => self.page_backward(),
            },
            Direction::Right => {
                match (current + 1..row_end).find(|&i| self.grid.is_bound(i)) {
                    Some(right) => self.move_focus(current, right),
                    None => self.page_forward(),
                }
            }
            Direction::Down => {
                let below = current + columns;
                if self.grid.is_bound(below) {
                    return self.move_focus(current, below);
                }
                match self.grid.last_bound() {
                    Some(last) if self.grid.row_of(last) > row => self.move_focus(current, last),
                    _ if self.options.vertical_wrap => self.row_wrap_down(),
                    _ => NavOutcome::Blocked,
                }
            }
            Direction::Up => {
                if row == 0 {
                    return if self.options.vertical_wrap {
                        self.row_wrap_up()
                    } else {
                        NavOutcome::Blocked
                    };
                }
                match self.grid.nearest_bound(current - columns) {
                    Some(above) => self.move_focus(current, above),
                    None => NavOutcome::Blocked,
                }
            }
        }
    }

    fn focus(&self) -> Option<usize> {
        self.grid.focus()
    }

    fn focused_entry(&self) -> Option<&Entry> {
        self.grid.focus().and_then(|slot| self.grid.entry_at(slot))
    }

    fn visible_count(&self) -> usize {
        self.grid.bound_count()
    }
}
