//! Scripted panel simulation

use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use colored::{ColoredString, Colorize};

use crate::config::SlotpagerConfig;
use crate::nav::{InputEvent, NavOutcome};
use crate::panels::{Panel, PanelKind, PanelResponse, PanelView, build_panel};
use crate::registry;
use crate::sources::open_source;

/// One scripted input and what the panel did with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub token: String,
    /// `None` when the token is not a known input
    pub response: Option<PanelResponse>,
}

/// Open `kind`, feed it `moves` and print every outcome
pub fn cmd_simulate(
    config: &SlotpagerConfig,
    kind: PanelKind,
    catalog: Option<&Path>,
    moves: &[String],
) -> Result<()> {
    let source = Rc::new(open_source(catalog)?);
    let mut panel = build_panel(kind, config, &source)?;
    panel.open_panel()?;

    println!("{} Opened {}", "✓".green(), panel.title().cyan());
    print_view(&panel.view());

    let steps = run_script(panel.as_mut(), &tokens(moves))?;
    if steps.is_empty() {
        return Ok(());
    }
    println!();
    for step in &steps {
        match &step.response {
            Some(response) => println!(
                "  {} {:<6} {}",
                marker(response),
                step.token,
                describe(response)
            ),
            None => println!(
                "  {} {:<6} {}",
                "?".yellow(),
                step.token,
                "unknown input, skipped".dimmed()
            ),
        }
    }
    println!();
    print_view(&panel.view());
    Ok(())
}

/// Split raw arguments into input tokens
fn tokens(moves: &[String]) -> Vec<String> {
    moves
        .iter()
        .flat_map(|arg| arg.split([',', ' ', '\t']))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Apply each token in order
///
/// Page turns complete at once here, so the animation gate never holds input.
pub fn run_script(panel: &mut dyn Panel, tokens: &[String]) -> Result<Vec<Step>> {
    let mut steps = Vec::with_capacity(tokens.len());
    for token in tokens {
        let response = match InputEvent::from_token(token) {
            Some(event) => Some(panel.handle_input(event)?),
            None => None,
        };
        steps.push(Step {
            token: token.clone(),
            response,
        });
    }
    Ok(steps)
}

fn marker(response: &PanelResponse) -> ColoredString {
    match response {
        PanelResponse::Nav(NavOutcome::Blocked | NavOutcome::Ignored) => "!".yellow(),
        PanelResponse::Nav(_) => "→".cyan(),
        PanelResponse::Confirmed(_) => "✓".green(),
        PanelResponse::TabChanged(_) => "»".cyan(),
        PanelResponse::Closed => "x".red(),
        PanelResponse::Ignored => "-".dimmed(),
    }
}

/// Plain text summary of a response
pub fn describe(response: &PanelResponse) -> String {
    match response {
        PanelResponse::Nav(outcome) => match outcome {
            NavOutcome::FocusMoved { from: Some(from), to } => {
                format!("focus slot {from} -> {to}")
            }
            NavOutcome::FocusMoved { from: None, to } => format!("focus slot {to}"),
            NavOutcome::PageChanged { page, focus } => {
                format!("page {}, slot {focus}", page + 1)
            }
            NavOutcome::WindowSlid { top, focus } => {
                format!("window from {top}, slot {focus}")
            }
            NavOutcome::Blocked => "blocked at edge".to_string(),
            NavOutcome::Ignored => "nothing to page".to_string(),
            NavOutcome::Deferred => "held until animation ends".to_string(),
        },
        PanelResponse::Confirmed(entry) => format!("confirmed {}", entry.id),
        PanelResponse::TabChanged(kind) => {
            format!("tab {}", registry::behavior(*kind).label)
        }
        PanelResponse::Closed => "panel closed".to_string(),
        PanelResponse::Ignored => "ignored".to_string(),
    }
}

/// Text rows of the slot grid; the focused cell is marked with `>`
pub fn grid_lines(view: &PanelView) -> Vec<String> {
    let texts: Vec<String> = view
        .cells
        .iter()
        .map(|cell| match cell {
            Some(cell) => {
                let mark = if cell.focused { '>' } else { ' ' };
                match &cell.detail {
                    Some(detail) => format!("{mark} {} {detail}", cell.label),
                    None => format!("{mark} {}", cell.label),
                }
            }
            None => "  ·".to_string(),
        })
        .collect();
    let width = texts.iter().map(|t| t.chars().count()).max().unwrap_or(0);
    texts
        .chunks(view.columns.max(1))
        .map(|row| {
            row.iter()
                .map(|text| format!("{text:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

fn print_view(view: &PanelView) {
    println!("{} [{}]", view.title.bold(), view.position.dimmed());
    for line in grid_lines(view) {
        if line.contains('>') {
            println!("  {}", line.cyan());
        } else {
            println!("  {line}");
        }
    }
}
