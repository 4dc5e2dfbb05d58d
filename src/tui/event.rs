//! Event handling for the TUI

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use crate::nav::{Direction, InputEvent};
use crate::panels::PanelKind;

const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Handle at most one pending terminal event
pub fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(POLL_TIMEOUT)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        handle_key_event(app, key);
    }
    Ok(())
}

/// Panel input bound to a key, if any
fn panel_input(code: KeyCode) -> Option<InputEvent> {
    let direction = match code {
        KeyCode::Left | KeyCode::Char('h') => Direction::Left,
        KeyCode::Right | KeyCode::Char('l') => Direction::Right,
        KeyCode::Up | KeyCode::Char('k') => Direction::Up,
        KeyCode::Down | KeyCode::Char('j') => Direction::Down,
        KeyCode::Enter => return Some(InputEvent::Confirm),
        KeyCode::Esc => return Some(InputEvent::Cancel),
        _ => return None,
    };
    Some(InputEvent::Move(direction))
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    app.clear_status();

    if let Some(input) = panel_input(key.code) {
        app.send(input);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('x') => app.consume_focused(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Some(kind) = PanelKind::all().get(index) {
                app.switch_tab(*kind);
            }
        }
        _ => {}
    }
}
