//! Sliding windowing: a fixed window of `W` slots scrolls over the catalog
//!
//! Left/right step the window by a full `W`, up/down on the window edges
//! step it by one line. Both wrap around the ends of the catalog.

use tracing::debug;

use super::grid::SlotGrid;
use super::input::{Direction, InputGate, NavOutcome};
use super::traits::{Slot, WindowNavigator};
use crate::error::GridError;
use crate::models::Entry;

/// Distance the window moves in one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideStep {
    /// `W` entries, focus keeps its slot
    Page,
    /// One entry, focus follows the wrap
    Line,
}

/// Single-column window navigator
#[derive(Debug)]
pub struct SlidingNavigator<S> {
    grid: SlotGrid<S>,
    catalog: Vec<Entry>,
    top: usize,
    gate: InputGate,
}

impl<S: Slot> SlidingNavigator<S> {
    /// One slot per window line
    pub fn new(slots: Vec<S>) -> Result<Self, GridError> {
        let rows = slots.len();
        Ok(Self {
            grid: SlotGrid::new(slots, rows)?,
            catalog: Vec::new(),
            top: 0,
            gate: InputGate::default(),
        })
    }

    pub fn grid(&self) -> &SlotGrid<S> {
        &self.grid
    }

    pub fn catalog(&self) -> &[Entry] {
        &self.catalog
    }

    /// Catalog index shown in the first slot
    pub fn top(&self) -> usize {
        self.top
    }

    /// Window size `W`
    pub fn window(&self) -> usize {
        self.grid.len()
    }

    /// Largest `top` that still fills the window
    pub fn max_top(&self) -> usize {
        self.catalog.len().saturating_sub(self.window())
    }

    /// Catalog index of the focused entry
    pub fn focused_index(&self) -> Option<usize> {
        self.grid.focus().map(|slot| self.top + slot)
    }

    /// Replace the catalog; nothing is shown until `open_at`
    pub fn load(&mut self, catalog: Vec<Entry>) {
        self.catalog = catalog;
        self.top = 0;
        self.grid.clear();
        self.gate.reset();
    }

    /// Show the window containing catalog `index` and focus it
    ///
    /// Out-of-range indices are clamped to the last entry. Returns false
    /// for an empty catalog.
    pub fn open_at(&mut self, index: usize) -> bool {
        if self.catalog.is_empty() {
            self.grid.clear();
            return false;
        }
        let index = index.min(self.catalog.len() - 1);
        self.top = index.min(self.max_top());
        self.bind();
        let focus = self.grid.nearest_bound(index - self.top);
        self.grid.set_focus(focus);
        debug!(index, top = self.top, ?focus, "window opened");
        true
    }

    /// Move the window by one step
    pub fn slide(&mut self, step: SlideStep, forward: bool) -> NavOutcome {
        if self.catalog.len() <= self.window() {
            return NavOutcome::Ignored;
        }
        let window = self.window();
        let max_top = self.max_top();
        let previous = self.grid.focus().unwrap_or(0);
        let distance = match step {
            SlideStep::Page => window,
            SlideStep::Line => 1,
        };

        let (top, wrapped) = if forward {
            let next = self.top + distance;
            if next > max_top { (0, true) } else { (next, false) }
        } else if self.top >= distance {
            (self.top - distance, false)
        } else {
            (max_top, true)
        };
        self.top = top;
        let visible = self.bind();

        let wanted = match step {
            SlideStep::Line if wrapped && forward => 0,
            SlideStep::Line if wrapped => visible.saturating_sub(1),
            _ => previous.min(visible.saturating_sub(1)),
        };
        let focus = self.grid.nearest_bound(wanted);
        self.grid.set_focus(focus);
        debug!(?step, forward, top, wrapped, ?focus, "window slid");
        match focus {
            Some(focus) => NavOutcome::WindowSlid { top, focus },
            None => NavOutcome::Ignored,
        }
    }

    fn bind(&mut self) -> usize {
        let window = self.window();
        self.grid.assign_window(&self.catalog, self.top, window);
        (self.catalog.len() - self.top).min(window)
    }

    /// Whether `slot` is the lowest line in use
    fn at_bottom(&self, slot: usize) -> bool {
        !self.grid.is_bound(slot + 1)
    }
}

impl<S: Slot> WindowNavigator for SlidingNavigator<S> {
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

        match direction {
            Direction::Left => self.slide(SlideStep::Page, false),
            Direction::Right => self.slide(SlideStep::Page, true),
            Direction::Up if current == 0 => self.slide(SlideStep::Line, false),
            Direction::Down if self.at_bottom(current) => self.slide(SlideStep::Line, true),
            Direction::Up | Direction::Down => {
                let to = if direction == Direction::Up {
                    current - 1
                } else {
                    current + 1
                };
                if self.grid.set_focus(Some(to)) {
                    NavOutcome::FocusMoved {
                        from: Some(current),
                        to,
                    }
                } else {
                    NavOutcome::Blocked
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
