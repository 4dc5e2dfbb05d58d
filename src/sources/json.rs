//! JSON catalog files
//!
//! ```json
//! {
//!   "entries": [
//!     { "kind": "item", "id": 1, "quantity": 3, "name": "Potion" },
//!     { "kind": "weapon", "class": "blade", "id": 1, "name": "Saber" }
//!   ],
//!   "saves": [{ "file": 1, "playtime": 3600 }],
//!   "last_used_file": 1
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::InMemorySource;
use crate::error::CatalogError;
use crate::models::{Entry, EntryId, WeaponClass};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entries: Vec<CatalogRecord>,
    #[serde(default)]
    saves: Vec<SaveRecord>,
    #[serde(default)]
    last_used_file: i32,
}

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    kind: String,
    id: u32,
    #[serde(default)]
    class: Option<WeaponClass>,
    #[serde(default = "default_quantity")]
    quantity: u32,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SaveRecord {
    file: i32,
    /// Seconds
    playtime: u64,
}

fn default_quantity() -> u32 {
    1
}

impl CatalogRecord {
    fn entry_id(&self) -> Result<EntryId, CatalogError> {
        let id = self.id;
        match self.kind.as_str() {
            "item" => Ok(EntryId::Item(id)),
            "weapon" => {
                let class = self.class.ok_or(CatalogError::MissingWeaponClass { id })?;
                Ok(EntryId::Weapon { class, id })
            }
            "enemy" => Ok(EntryId::Enemy(id)),
            "hint" => Ok(EntryId::Hint(id)),
            other => Err(CatalogError::UnexpectedKind {
                id,
                kind: other.to_string(),
            }),
        }
    }
}

/// Parse catalog JSON text
pub fn parse_catalog(text: &str, path: &Path) -> Result<InMemorySource, CatalogError> {
    let file: CatalogFile = serde_json::from_str(text).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut catalog = InMemorySource::new();
    for record in &file.entries {
        let id = record.entry_id()?;
        catalog.push(Entry::new(id, record.quantity), record.name.clone());
    }
    let catalog = file
        .saves
        .iter()
        .fold(catalog, |catalog, save| catalog.with_save(save.file, save.playtime));
    Ok(catalog.with_last_used_file(file.last_used_file))
}

/// Load a catalog file from disk
pub fn load_catalog(path: &Path) -> Result<InMemorySource, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&text, path)
}
