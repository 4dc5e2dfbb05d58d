//! Application state for the terminal demo

use std::rc::Rc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::config::{SlotpagerConfig, TuiTheme};
use crate::models::Entry;
use crate::nav::{InputEvent, NavOutcome};
use crate::panels::{Panel, PanelKind, PanelResponse, PanelView, build_panel};
use crate::sources::{CatalogSource, InMemorySource};

#[cfg(test)]
mod tests;

/// Status message to display until the next key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App {
    pub running: bool,
    pub tab: PanelKind,
    pub show_help: bool,
    pub theme_variant: TuiTheme,
    pub status_message: Option<StatusMessage>,

    // One panel per kind, in `PanelKind::all()` order
    panels: Vec<Box<dyn Panel>>,
    source: Rc<InMemorySource>,

    // Page turn animation
    animation_ticks: u8,
    ticks_left: u8,
}

impl App {
    pub fn new(config: &SlotpagerConfig, source: Rc<InMemorySource>) -> Result<Self> {
        let panels = PanelKind::all()
            .iter()
            .map(|kind| build_panel(*kind, config, &source))
            .collect::<Result<Vec<_>>>()?;

        let mut app = Self {
            running: true,
            tab: PanelKind::Inventory,
            show_help: false,
            theme_variant: config.tui.theme,
            status_message: None,
            panels,
            source,
            animation_ticks: config.tui.animation_ticks,
            ticks_left: 0,
        };
        app.panel_mut().open_panel()?;
        Ok(app)
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn panel(&self) -> &dyn Panel {
        self.panels[self.tab.index()].as_ref()
    }

    fn panel_mut(&mut self) -> &mut dyn Panel {
        self.panels[self.tab.index()].as_mut()
    }

    pub fn view(&self) -> PanelView {
        self.panel().view()
    }

    pub fn is_animating(&self) -> bool {
        self.ticks_left > 0
    }

    pub fn theme(&self) -> super::theme::Theme {
        super::theme::Theme::for_variant(self.theme_variant)
    }

    pub fn cycle_theme(&mut self) {
        self.theme_variant = self.theme_variant.next();
        self.set_status(
            format!("Theme: {}", self.theme_variant.display_name()),
            false,
        );
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            is_error,
        });
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Close the current panel and open `tab`
    pub fn switch_tab(&mut self, tab: PanelKind) {
        if self.tab == tab {
            return;
        }
        self.panel_mut().close_panel();
        self.ticks_left = 0;
        self.tab = tab;
        if let Err(err) = self.panel_mut().open_panel() {
            self.report(err);
        }
    }

    pub fn next_tab(&mut self) {
        self.switch_tab(self.tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.switch_tab(self.tab.prev());
    }

    /// Forward one input to the current panel
    ///
    /// Confirm on a closed panel reopens it.
    pub fn send(&mut self, event: InputEvent) {
        if !self.panel().is_open() {
            if event == InputEvent::Confirm
                && let Err(err) = self.panel_mut().open_panel()
            {
                self.report(err);
            }
            return;
        }
        match self.panel_mut().handle_input(event) {
            Ok(response) => self.apply_response(response),
            Err(err) => self.report(err),
        }
    }

    fn apply_response(&mut self, response: PanelResponse) {
        match response {
            PanelResponse::Nav(outcome) => self.apply_outcome(outcome),
            PanelResponse::Confirmed(entry) => {
                let name = self.entry_name(&entry);
                self.set_status(format!("Selected {name}"), false);
            }
            PanelResponse::TabChanged(_) => {
                // A new tab reloads the list, dropping any running animation
                self.ticks_left = 0;
            }
            PanelResponse::Closed => {
                self.ticks_left = 0;
                let title = self.panel().title();
                self.set_status(format!("{title} closed, Enter reopens"), false);
            }
            PanelResponse::Ignored => {}
        }
    }

    fn apply_outcome(&mut self, outcome: NavOutcome) {
        if outcome.rebound() && self.animation_ticks > 0 {
            self.panel_mut().begin_animation();
            self.ticks_left = self.animation_ticks;
            debug!(?outcome, ticks = self.animation_ticks, "animation started");
        }
    }

    /// Advance time: finish a running animation and pull catalog changes
    pub fn tick(&mut self) {
        if self.ticks_left > 0 {
            self.ticks_left -= 1;
            if self.ticks_left == 0
                && let Some(outcome) = self.panel_mut().finish_animation()
            {
                self.apply_outcome(outcome);
            }
        }
        if let Err(err) = self.panel_mut().refresh() {
            self.report(err);
        }
    }

    /// Use one of the focused item
    pub fn consume_focused(&mut self) {
        if self.tab != PanelKind::Inventory {
            self.set_status("Only items can be used", true);
            return;
        }
        let Some(entry) = self.panel().focused() else {
            self.set_status("Nothing to use", true);
            return;
        };
        let name = self.entry_name(&entry);
        if self.source.consume(&entry.id) {
            let left = self.source.quantity(&entry.id).unwrap_or(0);
            self.set_status(format!("Used {name} ({left} left)"), false);
        } else {
            self.set_status(format!("No {name} left"), true);
        }
    }

    fn entry_name(&self, entry: &Entry) -> String {
        self.source
            .display_name(&entry.id)
            .unwrap_or_else(|| entry.id.to_string())
    }

    fn report(&mut self, err: anyhow::Error) {
        warn!(panel = %self.tab, "{err:#}");
        self.set_status(format!("{err:#}"), true);
    }
}
