//! Menu panels built on the navigation engine
//!
//! A panel owns its navigator, its focus memory and a handle to the source
//! its entries come from. Hosts talk to every panel through `Panel`.

pub mod grid_panel;
pub mod save_load;
pub mod sell;

#[cfg(test)]
mod tests;

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::config::SlotpagerConfig;
use crate::error::GridError;
use crate::models::{Entry, EntryKind, WeaponClass};
use crate::nav::grid::validate_shape;
use crate::nav::{ChunkedOptions, HorizontalRule, InputEvent, NavOutcome, NavState};
use crate::sources::InMemorySource;

/// Panel of `kind` laid out from `config`, reading from a shared source
pub fn build_panel(
    kind: PanelKind,
    config: &SlotpagerConfig,
    source: &Rc<InMemorySource>,
) -> Result<Box<dyn Panel>> {
    let panel: Box<dyn Panel> = match kind {
        PanelKind::Save | PanelKind::Load => {
            let mode = if kind == PanelKind::Save {
                SaveMode::Save
            } else {
                SaveMode::Load
            };
            Box::new(SaveLoadPanel::with_memory_slots(
                mode,
                config.save_load_spec(),
                Rc::clone(source),
            )?)
        }
        PanelKind::Sell => Box::new(
            SellPanel::with_memory_slots(
                config.panel_spec(kind),
                Rc::clone(source),
                source.dirty_flag(),
            )
            .with_context(|| format!("Invalid layout for panel {kind}"))?,
        ),
        _ => Box::new(
            GridPanel::with_memory_slots(
                kind,
                config.panel_spec(kind),
                Rc::clone(source),
                source.dirty_flag(),
            )
            .with_context(|| format!("Invalid layout for panel {kind}"))?,
        ),
    };
    Ok(panel)
}

pub use grid_panel::GridPanel;
pub use save_load::{SaveLoadPanel, SaveLoadSpec, SaveMode};
pub use sell::{SELL_TABS, SellPanel};

/// Every menu panel the engine drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Inventory,
    Weapons(WeaponClass),
    Bestiary,
    Hints,
    /// Shop sell list, tabbed by entry kind
    Sell,
    Save,
    Load,
}

impl PanelKind {
    pub fn all() -> &'static [PanelKind] {
        &[
            PanelKind::Inventory,
            PanelKind::Weapons(WeaponClass::Blade),
            PanelKind::Weapons(WeaponClass::Shooter),
            PanelKind::Bestiary,
            PanelKind::Hints,
            PanelKind::Sell,
            PanelKind::Save,
            PanelKind::Load,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|k| k == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Inventory => "Items",
            PanelKind::Weapons(WeaponClass::Blade) => "Blades",
            PanelKind::Weapons(WeaponClass::Shooter) => "Shooters",
            PanelKind::Bestiary => "Bestiary",
            PanelKind::Hints => "Hints",
            PanelKind::Sell => "Sell",
            PanelKind::Save => "Save",
            PanelKind::Load => "Load",
        }
    }

    /// Name used in config tables and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            PanelKind::Inventory => "inventory",
            PanelKind::Weapons(WeaponClass::Blade) => "blades",
            PanelKind::Weapons(WeaponClass::Shooter) => "shooters",
            PanelKind::Bestiary => "bestiary",
            PanelKind::Hints => "hints",
            PanelKind::Sell => "sell",
            PanelKind::Save => "save",
            PanelKind::Load => "load",
        }
    }

    /// Entry kind listed by a grid panel; `None` for the sell list and the
    /// file browser
    pub fn entry_kind(&self) -> Option<EntryKind> {
        match self {
            PanelKind::Inventory => Some(EntryKind::Item),
            PanelKind::Weapons(class) => Some(EntryKind::Weapon(*class)),
            PanelKind::Bestiary => Some(EntryKind::Enemy),
            PanelKind::Hints => Some(EntryKind::Hint),
            PanelKind::Sell | PanelKind::Save | PanelKind::Load => None,
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for PanelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.key() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = Self::all().iter().map(|k| k.key()).collect();
                format!("unknown panel `{s}` (expected one of: {})", names.join(", "))
            })
    }
}

/// Shape and behavior of a grid panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSpec {
    pub slots: usize,
    pub rows: usize,
    pub options: ChunkedOptions,
    /// Restore the last focused entry when reopening
    pub remember_focus: bool,
}

impl PanelSpec {
    /// Built-in layout of each grid panel
    pub fn defaults_for(kind: PanelKind) -> Self {
        match kind {
            PanelKind::Inventory => Self {
                slots: 10,
                rows: 5,
                options: ChunkedOptions::default(),
                remember_focus: true,
            },
            PanelKind::Weapons(_) => Self {
                slots: 5,
                rows: 1,
                options: ChunkedOptions::default(),
                remember_focus: false,
            },
            PanelKind::Bestiary | PanelKind::Hints => Self {
                slots: 8,
                rows: 8,
                options: ChunkedOptions {
                    horizontal_rule: HorizontalRule::Slot,
                    vertical_wrap: true,
                    page_wrap: true,
                },
                remember_focus: false,
            },
            // One column; the ends step pages but never wrap around
            PanelKind::Sell => Self {
                slots: 5,
                rows: 5,
                options: ChunkedOptions {
                    vertical_wrap: true,
                    page_wrap: false,
                    ..ChunkedOptions::default()
                },
                remember_focus: false,
            },
            // The file browser is a single sliding column
            PanelKind::Save | PanelKind::Load => Self {
                slots: 3,
                rows: 3,
                options: ChunkedOptions::default(),
                remember_focus: false,
            },
        }
    }

    pub fn columns(&self) -> usize {
        crate::nav::grid::columns_for(self.slots, self.rows)
    }

    pub fn validate(&self) -> Result<(), GridError> {
        validate_shape(self.slots, self.rows)
    }
}

/// What a panel did with one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelResponse {
    Nav(NavOutcome),
    /// Confirm on a focused entry
    Confirmed(Entry),
    /// Cancel closed the panel
    Closed,
    /// A tabbed panel switched to listing this kind
    TabChanged(EntryKind),
    Ignored,
}

/// One slot as the host should draw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub label: String,
    pub detail: Option<String>,
    pub focused: bool,
}

/// Render-ready snapshot of a panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub title: String,
    /// Row-major, `None` for inactive slots
    pub cells: Vec<Option<CellView>>,
    pub columns: usize,
    /// e.g. `2/5` or `4-6 of 13`
    pub position: String,
    pub state: NavState,
}

/// Host-facing surface shared by every panel
pub trait Panel {
    fn kind(&self) -> PanelKind;

    fn is_open(&self) -> bool;

    /// Load a fresh catalog and place the initial focus
    fn open_panel(&mut self) -> Result<()>;

    /// Remember what is needed for the next open and hide the panel
    fn close_panel(&mut self);

    fn handle_input(&mut self, event: InputEvent) -> Result<PanelResponse>;

    /// Entry under focus, if any
    fn focused(&self) -> Option<Entry>;

    /// Reload if the underlying catalog changed; true when it did
    fn refresh(&mut self) -> Result<bool> {
        Ok(false)
    }

    fn begin_animation(&mut self);

    /// Finish the running animation, replaying any held input
    fn finish_animation(&mut self) -> Option<NavOutcome>;

    fn view(&self) -> PanelView;

    fn title(&self) -> &'static str {
        self.kind().title()
    }
}
