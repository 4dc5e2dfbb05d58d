//! Configuration file commands

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::SlotpagerConfig;

/// Print where the config file lives
pub fn cmd_config_path() -> Result<()> {
    let path = SlotpagerConfig::config_path()?;
    let status = if path.exists() {
        "exists".green()
    } else {
        "not created".yellow()
    };
    println!("{} ({})", path.display(), status);
    Ok(())
}

/// Print the effective configuration as TOML
pub fn cmd_config_show(config: &SlotpagerConfig) -> Result<()> {
    let text = toml::to_string_pretty(config).context("Failed to render configuration")?;
    if !SlotpagerConfig::exists() {
        println!(
            "{} No config file yet, showing defaults (run {})",
            "!".yellow(),
            "slotpager config init".cyan()
        );
    }
    print!("{text}");
    Ok(())
}

/// Write the default configuration to the standard location
pub fn cmd_config_init(force: bool) -> Result<()> {
    let path = SlotpagerConfig::config_path()?;
    init_at(&path, force)
}

fn init_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!(
            "{} Config already exists at {} (use {} to overwrite)",
            "!".yellow(),
            path.display(),
            "--force".cyan()
        );
        return Ok(());
    }
    SlotpagerConfig::default().save_to(path)?;
    println!("{} Default configuration written", "✓".green());
    println!("  Config saved to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        init_at(&path, false).unwrap();
        let loaded = SlotpagerConfig::load_from(&path).unwrap();
        assert_eq!(loaded, SlotpagerConfig::default());
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        init_at(&path, false).unwrap();
        let kept = SlotpagerConfig::load_from(&path).unwrap();
        assert_eq!(kept.logging.level, "debug");

        init_at(&path, true).unwrap();
        let replaced = SlotpagerConfig::load_from(&path).unwrap();
        assert_eq!(replaced.logging.level, "info");
    }
}
