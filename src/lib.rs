//! slotpager: paginated list-to-slot binding and focus navigation
//!
//! Binds an ordered catalog onto a fixed grid of menu slots and moves focus
//! across it, paging in chunks or sliding a window at the edges.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod nav;
pub mod panels;
pub mod registry;
pub mod sources;
pub mod tui;

pub use config::SlotpagerConfig;
pub use error::{CatalogError, ConfigError, GridError};
pub use models::{Entry, EntryId, EntryKind, WeaponClass};
pub use nav::{
    ChunkedNavigator, Direction, FocusMemory, InputEvent, NavOutcome, SlidingNavigator, Slot,
    SlotGrid, WindowNavigator,
};
pub use panels::{GridPanel, Panel, PanelKind, PanelSpec, SaveLoadPanel, SellPanel};
pub use sources::{CatalogSource, DirtyFlag, InMemorySource, SaveSlotSource};
