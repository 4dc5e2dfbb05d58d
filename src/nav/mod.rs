//! Windowing and focus navigation engine
//!
//! Binds a slice of a catalog onto a fixed slot grid and moves focus across
//! it, turning pages (chunked) or scrolling a window (sliding) at the edges.

pub mod chunked;
pub mod focus;
pub mod grid;
pub mod input;
pub mod memory;
pub mod sliding;
pub mod traits;


pub use chunked::{ChunkedNavigator, ChunkedOptions};
pub use focus::{
    HorizontalRule, resolve_horizontal_focus, resolve_slot_continuity, resolve_vertical_wrap_focus,
};
pub use grid::{MemorySlot, SlotGrid};
pub use input::{Direction, InputEvent, InputGate, NavOutcome, NavState};
pub use memory::{FocusMemory, FocusSnapshot, FocusTarget};
pub use sliding::{SlideStep, SlidingNavigator};
pub use traits::{Slot, WindowNavigator};
