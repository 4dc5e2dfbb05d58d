use anyhow::{Context, Result};
use clap::Parser;

use slotpager::SlotpagerConfig;
use slotpager::cli::{Cli, Commands, ConfigCommands};
use slotpager::commands::{cmd_config_init, cmd_config_path, cmd_config_show, cmd_simulate};
use slotpager::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SlotpagerConfig::load().context("Failed to load configuration")?;
    let log_dir = SlotpagerConfig::config_dir()?;
    if let Err(err) = logging::init(&log_dir, &config.logging.level) {
        eprintln!("warning: logging disabled: {err}");
    }

    match cli.command {
        None => slotpager::tui::run(&config, None),
        Some(Commands::Tui { catalog }) => slotpager::tui::run(&config, catalog.as_deref()),
        Some(Commands::Simulate {
            panel,
            catalog,
            moves,
        }) => cmd_simulate(&config, panel, catalog.as_deref(), &moves),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => cmd_config_path(),
            ConfigCommands::Show => cmd_config_show(&config),
            ConfigCommands::Init { force } => cmd_config_init(force),
        },
    }
}
