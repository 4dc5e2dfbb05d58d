//! Per-kind behavior registry
//!
//! Maps each `EntryKind` to how panels treat its entries. Resolved with a
//! `match`, so adding a kind without a behavior is a compile error.

use crate::models::{Entry, EntryKind, WeaponClass};

/// Behavior shared by every entry of one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindBehavior {
    /// Human label for panel titles
    pub label: &'static str,
    /// Drop entries whose quantity reached zero when loading a catalog
    pub hide_empty: bool,
    /// Render the quantity next to the entry
    pub show_quantity: bool,
}

const ITEM: KindBehavior = KindBehavior {
    label: "Items",
    hide_empty: true,
    show_quantity: true,
};

const BLADE: KindBehavior = KindBehavior {
    label: "Blades",
    hide_empty: false,
    show_quantity: false,
};

const SHOOTER: KindBehavior = KindBehavior {
    label: "Shooters",
    hide_empty: false,
    show_quantity: false,
};

// quantity is the kill count
const ENEMY: KindBehavior = KindBehavior {
    label: "Bestiary",
    hide_empty: false,
    show_quantity: true,
};

const HINT: KindBehavior = KindBehavior {
    label: "Hints",
    hide_empty: false,
    show_quantity: false,
};

const SAVE_FILE: KindBehavior = KindBehavior {
    label: "Files",
    hide_empty: false,
    show_quantity: false,
};

/// Look up the behavior for a kind
pub fn behavior(kind: EntryKind) -> &'static KindBehavior {
    match kind {
        EntryKind::Item => &ITEM,
        EntryKind::Weapon(WeaponClass::Blade) => &BLADE,
        EntryKind::Weapon(WeaponClass::Shooter) => &SHOOTER,
        EntryKind::Enemy => &ENEMY,
        EntryKind::Hint => &HINT,
        EntryKind::SaveFile => &SAVE_FILE,
    }
}

/// Apply the kind's load-time rules to a freshly loaded catalog
pub fn prepare_catalog(kind: EntryKind, entries: Vec<Entry>) -> Vec<Entry> {
    let rules = behavior(kind);
    entries
        .into_iter()
        .filter(|entry| kind.matches(&entry.id))
        .filter(|entry| !rules.hide_empty || entry.quantity > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryId;

    #[test]
    fn test_items_hide_empty_stacks() {
        let entries = vec![
            Entry::new(EntryId::Item(1), 2),
            Entry::new(EntryId::Item(2), 0),
            Entry::new(EntryId::Item(3), 1),
        ];
        let prepared = prepare_catalog(EntryKind::Item, entries);
        let ids: Vec<_> = prepared.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EntryId::Item(1), EntryId::Item(3)]);
    }

    #[test]
    fn test_weapons_keep_zero_quantity() {
        let id = EntryId::Weapon {
            class: WeaponClass::Blade,
            id: 1,
        };
        let prepared = prepare_catalog(
            EntryKind::Weapon(WeaponClass::Blade),
            vec![Entry::new(id, 0)],
        );
        assert_eq!(prepared.len(), 1);
    }

    #[test]
    fn test_prepare_drops_other_kinds() {
        let entries = vec![
            Entry::new(EntryId::Enemy(1), 4),
            Entry::new(EntryId::Hint(1), 0),
        ];
        let prepared = prepare_catalog(EntryKind::Hint, entries);
        assert_eq!(prepared, vec![Entry::new(EntryId::Hint(1), 0)]);
    }
}
