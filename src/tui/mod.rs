//! Terminal demo of the menu panels

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

use std::io::{self, Stdout};
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::config::SlotpagerConfig;
use crate::sources::open_source;

pub use app::App;

/// One animation step
const TICK_RATE: Duration = Duration::from_millis(120);

/// Run the demo until the user quits
pub fn run(config: &SlotpagerConfig, catalog: Option<&Path>) -> Result<()> {
    let source = Rc::new(open_source(catalog)?);
    let mut app = App::new(config, source)?;

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    info!("terminal demo started");

    let result = run_loop(&mut terminal, &mut app);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("terminal demo stopped");

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();
    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;
        event::handle_events(app)?;
        if last_tick.elapsed() >= TICK_RATE {
            app.tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}
