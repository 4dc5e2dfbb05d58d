//! Command implementations
//!
//! Each command is a `cmd_*` function returning `anyhow::Result`.

pub mod config;
pub mod simulate;

pub use config::{cmd_config_init, cmd_config_path, cmd_config_show};
pub use simulate::cmd_simulate;
