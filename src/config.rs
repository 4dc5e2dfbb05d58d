//! Configuration file handling
//!
//! `config.toml` lives in the platform config directory, or in
//! `$SLOTPAGER_CONFIG_HOME` when set. A missing file means defaults.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::WeaponClass;
use crate::nav::HorizontalRule;
use crate::panels::{PanelKind, PanelSpec, SaveLoadSpec};

/// Environment variable overriding the config directory
pub const CONFIG_HOME_ENV: &str = "SLOTPAGER_CONFIG_HOME";

const CONFIG_FILE: &str = "config.toml";

/// Color theme of the terminal demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TuiTheme {
    #[default]
    Dusk,
    Parchment,
    Moss,
    Ember,
}

impl TuiTheme {
    pub fn all() -> &'static [TuiTheme] {
        &[
            TuiTheme::Dusk,
            TuiTheme::Parchment,
            TuiTheme::Moss,
            TuiTheme::Ember,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Self {
        Self::all().get(index).copied().unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::all().len())
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TuiTheme::Dusk => "Dusk",
            TuiTheme::Parchment => "Parchment",
            TuiTheme::Moss => "Moss",
            TuiTheme::Ember => "Ember",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    pub theme: TuiTheme,
    /// Ticks a page turn animates for; input arriving meanwhile is held
    pub animation_ticks: u8,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: TuiTheme::default(),
            animation_ticks: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Layout keys of one grid panel; unset keys keep the panel's built-in value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_wrap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_focus: Option<HorizontalRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remember_focus: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_wrap: Option<bool>,
}

impl PanelOverrides {
    /// Every key set from `spec`
    pub fn from_spec(spec: PanelSpec) -> Self {
        Self {
            slots: Some(spec.slots),
            rows: Some(spec.rows),
            vertical_wrap: Some(spec.options.vertical_wrap),
            horizontal_focus: Some(spec.options.horizontal_rule),
            remember_focus: Some(spec.remember_focus),
            page_wrap: Some(spec.options.page_wrap),
        }
    }

    pub fn apply(&self, mut base: PanelSpec) -> PanelSpec {
        if let Some(slots) = self.slots {
            base.slots = slots;
        }
        if let Some(rows) = self.rows {
            base.rows = rows;
        }
        if let Some(wrap) = self.vertical_wrap {
            base.options.vertical_wrap = wrap;
        }
        if let Some(rule) = self.horizontal_focus {
            base.options.horizontal_rule = rule;
        }
        if let Some(remember) = self.remember_focus {
            base.remember_focus = remember;
        }
        if let Some(wrap) = self.page_wrap {
            base.options.page_wrap = wrap;
        }
        base
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelsConfig {
    pub inventory: PanelOverrides,
    pub blades: PanelOverrides,
    pub shooters: PanelOverrides,
    pub bestiary: PanelOverrides,
    pub hints: PanelOverrides,
    pub sell: PanelOverrides,
}

impl Default for PanelsConfig {
    fn default() -> Self {
        let full = |kind| PanelOverrides::from_spec(PanelSpec::defaults_for(kind));
        Self {
            inventory: full(PanelKind::Inventory),
            blades: full(PanelKind::Weapons(WeaponClass::Blade)),
            shooters: full(PanelKind::Weapons(WeaponClass::Shooter)),
            bestiary: full(PanelKind::Bestiary),
            hints: full(PanelKind::Hints),
            sell: full(PanelKind::Sell),
        }
    }
}

impl PanelsConfig {
    pub fn get(&self, kind: PanelKind) -> Option<&PanelOverrides> {
        match kind {
            PanelKind::Inventory => Some(&self.inventory),
            PanelKind::Weapons(WeaponClass::Blade) => Some(&self.blades),
            PanelKind::Weapons(WeaponClass::Shooter) => Some(&self.shooters),
            PanelKind::Bestiary => Some(&self.bestiary),
            PanelKind::Hints => Some(&self.hints),
            PanelKind::Sell => Some(&self.sell),
            PanelKind::Save | PanelKind::Load => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveLoadConfig {
    /// Files visible at once
    pub window: usize,
    /// Highest file number
    pub max_file: i32,
}

impl Default for SaveLoadConfig {
    fn default() -> Self {
        let spec = SaveLoadSpec::default();
        Self {
            window: spec.window,
            max_file: spec.max_file,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotpagerConfig {
    pub tui: TuiConfig,
    pub logging: LoggingConfig,
    pub panels: PanelsConfig,
    pub save_load: SaveLoadConfig,
}

impl SlotpagerConfig {
    /// Directory holding the config file and the log
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_HOME_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "slotpager")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Load from the default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load and validate `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(write_err)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in PanelKind::all() {
            if self.panels.get(*kind).is_none() {
                continue;
            }
            self.panel_spec(*kind)
                .validate()
                .map_err(|source| ConfigError::Panel {
                    panel: kind.key().to_string(),
                    source,
                })?;
        }
        if self.save_load.window == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        Ok(())
    }

    /// Effective layout of a panel
    pub fn panel_spec(&self, kind: PanelKind) -> PanelSpec {
        let base = PanelSpec::defaults_for(kind);
        match self.panels.get(kind) {
            Some(overrides) => overrides.apply(base),
            None => base,
        }
    }

    pub fn save_load_spec(&self) -> SaveLoadSpec {
        SaveLoadSpec {
            window: self.save_load.window,
            max_file: self.save_load.max_file,
        }
    }
}
