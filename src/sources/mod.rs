//! Catalog sources
//!
//! Panels pull their entries through `CatalogSource` and never produce them
//! themselves. Sources that can change underneath an open panel raise a
//! shared `DirtyFlag`.

pub mod json;
pub mod memory;

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;

use crate::models::{Entry, EntryId, EntryKind};

pub use json::load_catalog;
pub use memory::InMemorySource;

/// Catalog from `path`, or the built-in demo data
pub fn open_source(path: Option<&Path>) -> Result<InMemorySource> {
    match path {
        Some(path) => Ok(load_catalog(path)?),
        None => Ok(InMemorySource::demo()),
    }
}

/// Produces the ordered entries a panel shows
pub trait CatalogSource {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Entries of one kind, in display order
    fn load_entries(&self, kind: &EntryKind) -> Result<Vec<Entry>>;

    /// Display name for an entry, if the source knows one
    fn display_name(&self, _id: &EntryId) -> Option<String> {
        None
    }
}

impl<T: CatalogSource + ?Sized> CatalogSource for Rc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn load_entries(&self, kind: &EntryKind) -> Result<Vec<Entry>> {
        (**self).load_entries(kind)
    }

    fn display_name(&self, id: &EntryId) -> Option<String> {
        (**self).display_name(id)
    }
}

/// Save file metadata used by the save/load browser
pub trait SaveSlotSource {
    /// Recorded playtime in seconds; `None` when the file was never written
    fn playtime(&self, file: i32) -> Option<u64>;

    /// File number chosen most recently
    fn last_used_file(&self) -> i32;
}

impl<T: SaveSlotSource + ?Sized> SaveSlotSource for Rc<T> {
    fn playtime(&self, file: i32) -> Option<u64> {
        (**self).playtime(file)
    }

    fn last_used_file(&self) -> i32 {
        (**self).last_used_file()
    }
}

/// Shared "catalog changed" marker, polled by panels
#[derive(Debug, Clone, Default)]
pub struct DirtyFlag(Rc<Cell<bool>>);

impl DirtyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.set(true);
    }

    pub fn is_raised(&self) -> bool {
        self.0.get()
    }

    /// Read and lower the flag
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirty_flag_is_shared() {
        let flag = DirtyFlag::new();
        let other = flag.clone();
        other.raise();
        assert!(flag.is_raised());
        assert!(flag.take());
        assert!(!other.take());
    }
}
