//! Traits at the seams between the engine and its hosts
//!
//! `Slot` is what a UI element must offer to be bound to an entry.
//! `WindowNavigator` unifies the chunked and sliding navigators and provides
//! the animation gating as default methods.

use super::input::{Direction, InputGate, NavOutcome, NavState};
use crate::models::Entry;

/// A fixed, indexed UI position that can show one entry
pub trait Slot {
    /// Show the entry in this slot
    fn bind(&mut self, entry: &Entry);

    /// Show or hide the slot
    fn set_active(&mut self, active: bool);
}

/// Navigation behavior shared by chunked and sliding windowing
///
/// Implementors provide `apply_move` and access to their gate; the default
/// methods defer input while an animation is running and replay it when the
/// animation completes.
pub trait WindowNavigator {
    fn gate(&self) -> &InputGate;

    fn gate_mut(&mut self) -> &mut InputGate;

    /// Run one directional move immediately
    fn apply_move(&mut self, direction: Direction) -> NavOutcome;

    /// Slot index holding focus
    fn focus(&self) -> Option<usize>;

    /// Entry bound to the focused slot
    fn focused_entry(&self) -> Option<&Entry>;

    /// Number of slots currently showing an entry
    fn visible_count(&self) -> usize;

    fn state(&self) -> NavState {
        self.gate().state()
    }

    /// Route a move through the gate
    fn handle_directional_input(&mut self, direction: Direction) -> NavOutcome {
        if self.gate().is_animating() {
            self.gate_mut().defer(direction);
            return NavOutcome::Deferred;
        }
        self.apply_move(direction)
    }

    fn begin_animation(&mut self) {
        self.gate_mut().begin();
    }

    /// Drop the running animation without replaying held input
    fn cancel_animation(&mut self) {
        self.gate_mut().reset();
    }

    /// Leave the animating state and replay the held input, if any
    fn finish_animation(&mut self) -> Option<NavOutcome> {
        let pending = self.gate_mut().finish()?;
        Some(self.apply_move(pending))
    }
}
