//! Catalog data model
//!
//! Entries are what a panel displays. Identity is a closed enum so panels
//! never resolve an entry by parsing a type name at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Weapon class, one loadout panel per class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponClass {
    Blade,
    Shooter,
}

impl WeaponClass {
    pub fn all() -> &'static [WeaponClass] {
        &[WeaponClass::Blade, WeaponClass::Shooter]
    }
}

impl fmt::Display for WeaponClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeaponClass::Blade => write!(f, "blade"),
            WeaponClass::Shooter => write!(f, "shooter"),
        }
    }
}

/// Stable identity of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntryId {
    Item(u32),
    Weapon { class: WeaponClass, id: u32 },
    Enemy(u32),
    Hint(u32),
    /// Save file number; the autosave file is `0`
    SaveFile(i32),
}

impl EntryId {
    /// Kind tag used for filtering and registry lookups
    pub fn kind(&self) -> EntryKind {
        match self {
            EntryId::Item(_) => EntryKind::Item,
            EntryId::Weapon { class, .. } => EntryKind::Weapon(*class),
            EntryId::Enemy(_) => EntryKind::Enemy,
            EntryId::Hint(_) => EntryKind::Hint,
            EntryId::SaveFile(_) => EntryKind::SaveFile,
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Item(id) => write!(f, "item#{id}"),
            EntryId::Weapon { class, id } => write!(f, "{class}#{id}"),
            EntryId::Enemy(id) => write!(f, "enemy#{id}"),
            EntryId::Hint(id) => write!(f, "hint#{id}"),
            EntryId::SaveFile(n) => write!(f, "file#{n}"),
        }
    }
}

/// Kind tag of an entry, doubles as the catalog filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Item,
    Weapon(WeaponClass),
    Enemy,
    Hint,
    SaveFile,
}

impl EntryKind {
    /// Whether an id belongs to this kind
    pub fn matches(&self, id: &EntryId) -> bool {
        id.kind() == *self
    }
}

/// One catalog element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub quantity: u32,
}

impl Entry {
    pub fn new(id: EntryId, quantity: u32) -> Self {
        Self { id, quantity }
    }
}

/// Position of an entry id inside a catalog
pub fn position_of(catalog: &[Entry], id: &EntryId) -> Option<usize> {
    catalog.iter().position(|entry| entry.id == *id)
}
