//! Save/load file browser
//!
//! A sliding window over numbered save files. Load mode also lists the
//! autosave file, which sits before file 1.

use anyhow::Result;
use tracing::{debug, info};

use super::{CellView, Panel, PanelKind, PanelResponse, PanelView};
use crate::error::GridError;
use crate::models::{Entry, EntryId};
use crate::nav::{InputEvent, MemorySlot, NavOutcome, Slot, SlidingNavigator, WindowNavigator};
use crate::sources::SaveSlotSource;

/// File number of the autosave
pub const AUTOSAVE_FILE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Save,
    Load,
}

impl SaveMode {
    /// Lowest file number listed
    pub fn first_file(&self) -> i32 {
        match self {
            SaveMode::Save => 1,
            SaveMode::Load => AUTOSAVE_FILE,
        }
    }

    pub fn panel_kind(&self) -> PanelKind {
        match self {
            SaveMode::Save => PanelKind::Save,
            SaveMode::Load => PanelKind::Load,
        }
    }
}

/// Window size and file range of the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveLoadSpec {
    pub window: usize,
    pub max_file: i32,
}

impl Default for SaveLoadSpec {
    fn default() -> Self {
        Self {
            window: 3,
            max_file: 12,
        }
    }
}

/// Name of a save file as shown in the browser
pub fn file_name(file: i32) -> String {
    if file == AUTOSAVE_FILE {
        "Autosave".to_string()
    } else {
        format!("File {file}")
    }
}

/// `Playtime h:mm`, or `no data` for a file never written
pub fn playtime_label(playtime: Option<u64>) -> String {
    match playtime {
        Some(seconds) if seconds > 0 => {
            format!("Playtime {}:{:02}", seconds / 3600, seconds % 3600 / 60)
        }
        _ => "no data".to_string(),
    }
}

pub struct SaveLoadPanel<S, P> {
    mode: SaveMode,
    spec: SaveLoadSpec,
    navigator: SlidingNavigator<S>,
    source: P,
    open: bool,
}

impl<P: SaveSlotSource> SaveLoadPanel<MemorySlot, P> {
    pub fn with_memory_slots(
        mode: SaveMode,
        spec: SaveLoadSpec,
        source: P,
    ) -> Result<Self, GridError> {
        let slots = vec![MemorySlot::default(); spec.window];
        Self::new(mode, spec, slots, source)
    }
}

impl<S: Slot, P: SaveSlotSource> SaveLoadPanel<S, P> {
    pub fn new(
        mode: SaveMode,
        spec: SaveLoadSpec,
        slots: Vec<S>,
        source: P,
    ) -> Result<Self, GridError> {
        Ok(Self {
            mode,
            spec,
            navigator: SlidingNavigator::new(slots)?,
            source,
            open: false,
        })
    }

    pub fn mode(&self) -> SaveMode {
        self.mode
    }

    pub fn navigator(&self) -> &SlidingNavigator<S> {
        &self.navigator
    }

    /// File number under focus
    pub fn focused_file(&self) -> Option<i32> {
        match self.navigator.focused_entry()?.id {
            EntryId::SaveFile(file) => Some(file),
            _ => None,
        }
    }

    /// Every listed file, in display order
    pub fn files(&self) -> Vec<Entry> {
        (self.mode.first_file()..=self.spec.max_file)
            .map(|file| Entry::new(EntryId::SaveFile(file), 0))
            .collect()
    }

    /// File the browser opens on
    ///
    /// Starts from the last used file. Saving never targets the autosave, so
    /// in save mode it is swapped for the manual save with the longest
    /// playtime, or file 1 when none has data.
    pub fn initial_file(&self) -> i32 {
        let mut file = self.source.last_used_file();
        if self.mode == SaveMode::Save && file == AUTOSAVE_FILE {
            file = (1..=self.spec.max_file)
                .filter_map(|n| {
                    self.source
                        .playtime(n)
                        .filter(|&t| t > 0)
                        .map(|t| (t, std::cmp::Reverse(n)))
                })
                .max()
                .map_or(1, |(_, std::cmp::Reverse(n))| n);
        }
        file.clamp(self.mode.first_file(), self.spec.max_file.max(self.mode.first_file()))
    }
}

impl<S: Slot, P: SaveSlotSource> Panel for SaveLoadPanel<S, P> {
    fn kind(&self) -> PanelKind {
        self.mode.panel_kind()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn open_panel(&mut self) -> Result<()> {
        self.navigator.load(self.files());
        let file = self.initial_file();
        let index = usize::try_from(file - self.mode.first_file()).unwrap_or(0);
        self.navigator.open_at(index);
        self.open = true;
        info!(
            mode = ?self.mode,
            file,
            top = self.navigator.top(),
            "file browser opened"
        );
        Ok(())
    }

    fn close_panel(&mut self) {
        self.navigator.cancel_animation();
        self.open = false;
        debug!(mode = ?self.mode, "file browser closed");
    }

    fn handle_input(&mut self, event: InputEvent) -> Result<PanelResponse> {
        if !self.open {
            return Ok(PanelResponse::Ignored);
        }
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

    fn begin_animation(&mut self) {
        self.navigator.begin_animation();
    }

    fn finish_animation(&mut self) -> Option<NavOutcome> {
        self.navigator.finish_animation()
    }

    fn view(&self) -> PanelView {
        let grid = self.navigator.grid();
        let cells = (0..grid.len())
            .map(|slot| {
                let entry = grid.entry_at(slot)?;
                let EntryId::SaveFile(file) = entry.id else {
                    return None;
                };
                Some(CellView {
                    label: file_name(file),
                    detail: Some(playtime_label(self.source.playtime(file))),
                    focused: grid.focus() == Some(slot),
                })
            })
            .collect();
        let len = self.navigator.catalog().len();
        let top = self.navigator.top();
        let shown = grid.bound_count();
        PanelView {
            title: self.kind().title().to_string(),
            cells,
            columns: 1,
            position: if shown == 0 {
                "empty".to_string()
            } else {
                format!("{}-{} of {}", top + 1, top + shown, len)
            },
            state: self.navigator.state(),
        }
    }
}
