//! In-memory catalog source, also used for the built-in demo data

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use anyhow::Result;

use super::{CatalogSource, DirtyFlag, SaveSlotSource};
use crate::models::{Entry, EntryId, EntryKind, WeaponClass};

const DEMO_ITEMS: &[(&str, u32)] = &[
    ("Potion", 5),
    ("Hi-Potion", 2),
    ("Ether", 0),
    ("Antidote", 3),
    ("Smoke Bomb", 1),
    ("Phoenix Down", 1),
    ("Old Key", 1),
    ("Lantern Oil", 4),
    ("Mint Leaf", 9),
    ("Map Fragment", 1),
    ("Elixir", 0),
    ("Silver Coin", 12),
    ("Rope", 1),
];

const DEMO_BLADES: &[&str] = &["Short Sword", "Saber", "Twin Daggers"];

const DEMO_SHOOTERS: &[&str] = &[
    "Pellet Gun",
    "Crossbow",
    "Flintlock",
    "Longbow",
    "Harpoon",
    "Sling",
    "Hand Cannon",
];

const DEMO_ENEMIES: &[(&str, u32)] = &[
    ("Slime", 14),
    ("Bat", 9),
    ("Goblin", 6),
    ("Skeleton", 4),
    ("Wisp", 3),
    ("Golem", 1),
    ("Mimic", 2),
    ("Harpy", 5),
    ("Wraith", 1),
    ("Cave Troll", 1),
    ("Warden", 1),
];

const DEMO_HINTS: &[&str] = &[
    "Saving",
    "Items",
    "Weapons",
    "Locked doors",
    "Switches",
    "Night",
    "Shops",
    "Escaping",
    "Bestiary",
];

/// Entries and save metadata held in memory
#[derive(Debug, Default)]
pub struct InMemorySource {
    entries: RefCell<Vec<Entry>>,
    names: HashMap<EntryId, String>,
    saves: BTreeMap<i32, u64>,
    last_used_file: i32,
    dirty: DirtyFlag,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry with an optional display name
    pub fn push(&mut self, entry: Entry, name: Option<String>) {
        if let Some(name) = name {
            self.names.insert(entry.id, name);
        }
        self.entries.get_mut().push(entry);
    }

    pub fn with_entry(mut self, entry: Entry, name: &str) -> Self {
        self.push(entry, Some(name.to_string()));
        self
    }

    /// Record playtime (seconds) for a save file
    pub fn with_save(mut self, file: i32, playtime: u64) -> Self {
        self.saves.insert(file, playtime);
        self
    }

    pub fn with_last_used_file(mut self, file: i32) -> Self {
        self.last_used_file = file;
        self
    }

    /// Flag raised whenever `consume` changes the entries
    pub fn dirty_flag(&self) -> DirtyFlag {
        self.dirty.clone()
    }

    /// Use up one of an entry, raising the dirty flag
    ///
    /// Returns false when the entry is unknown or already at zero.
    pub fn consume(&self, id: &EntryId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let Some(entry) = entries.iter_mut().find(|e| e.id == *id) else {
            return false;
        };
        if entry.quantity == 0 {
            return false;
        }
        entry.quantity -= 1;
        self.dirty.raise();
        true
    }

    pub fn quantity(&self, id: &EntryId) -> Option<u32> {
        self.entries
            .borrow()
            .iter()
            .find(|e| e.id == *id)
            .map(|e| e.quantity)
    }

    /// Built-in data for the demo and simulator
    pub fn demo() -> Self {
        let mut source = Self::new();
        for (id, (name, quantity)) in (1..).zip(DEMO_ITEMS) {
            source.push(Entry::new(EntryId::Item(id), *quantity), Some(name.to_string()));
        }
        for (class, names) in [
            (WeaponClass::Blade, DEMO_BLADES),
            (WeaponClass::Shooter, DEMO_SHOOTERS),
        ] {
            for (id, name) in (1..).zip(names) {
                source.push(
                    Entry::new(EntryId::Weapon { class, id }, 1),
                    Some(name.to_string()),
                );
            }
        }
        for (id, (name, kills)) in (1..).zip(DEMO_ENEMIES) {
            source.push(Entry::new(EntryId::Enemy(id), *kills), Some(name.to_string()));
        }
        for (id, name) in (1..).zip(DEMO_HINTS) {
            source.push(Entry::new(EntryId::Hint(id), 1), Some(name.to_string()));
        }
        source
            .with_save(0, 4_380)
            .with_save(1, 12_840)
            .with_save(2, 0)
            .with_save(4, 45_060)
            .with_save(7, 600)
            .with_last_used_file(4)
    }
}

impl CatalogSource for InMemorySource {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn load_entries(&self, kind: &EntryKind) -> Result<Vec<Entry>> {
        Ok(self
            .entries
            .borrow()
            .iter()
            .filter(|entry| kind.matches(&entry.id))
            .copied()
            .collect())
    }

    fn display_name(&self, id: &EntryId) -> Option<String> {
        self.names.get(id).cloned()
    }
}

impl SaveSlotSource for InMemorySource {
    fn playtime(&self, file: i32) -> Option<u64> {
        self.saves.get(&file).copied()
    }

    fn last_used_file(&self) -> i32 {
        self.last_used_file
    }
}
