//! Typed errors for the library surface

use std::path::PathBuf;

use thiserror::Error;

/// Slot grid construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("a slot grid needs at least one slot")]
    NoSlots,
    #[error("row count {rows} must be between 1 and the slot count {slots}")]
    BadRows { rows: usize, slots: usize },
    #[error("panel `{panel}` does not list a single entry kind")]
    NoEntryKind { panel: String },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no suitable config directory available")]
    NoConfigDir,
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("panel `{panel}`: {source}")]
    Panel { panel: String, source: GridError },
    #[error("save/load window must hold at least one file")]
    EmptyWindow,
}

/// Catalog file errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("weapon entry {id} has no `class`")]
    MissingWeaponClass { id: u32 },
    #[error("entry {id} of kind `{kind}` cannot appear in an entry list")]
    UnexpectedKind { id: u32, kind: String },
}
