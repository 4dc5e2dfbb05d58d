//! Command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::panels::PanelKind;

#[derive(Parser, Debug)]
#[command(name = "slotpager")]
#[command(about = "Paged menu grids with focus navigation", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the menu panels in the terminal (default)
    Tui {
        /// JSON catalog to load instead of the demo data
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Drive one panel with a scripted list of inputs
    Simulate {
        /// Panel to open (inventory, blades, shooters, bestiary, hints, sell, save, load)
        #[arg(short, long, default_value = "inventory")]
        panel: PanelKind,

        /// JSON catalog to load instead of the demo data
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Inputs separated by commas or spaces: l r u d enter esc
        #[arg(num_args = 0.., value_delimiter = ',')]
        moves: Vec<String>,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,

    /// Print the effective configuration
    Show,

    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
