//! Process-wide bidirectional name/ID cache.
//!
//! Every confirmed pairing is stored in both directions so renderers can turn IDs into names
//! and user input into IDs without another ESI round trip. Entries are never evicted; the
//! only overwrite allowed is replacing the "Unknown" sentinel once a later probe succeeds.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{
    display::{DisplayName, NONE_NAME},
    id::{EveId, NONE_ID},
};

#[derive(Debug, Default)]
struct CacheMaps {
    by_name: HashMap<String, EveId>,
    by_id: HashMap<EveId, DisplayName>,
}

/// Bidirectional name/ID cache.
///
/// A single lock guards both maps so a pairing is always visible from both sides at once.
#[derive(Debug, Default)]
pub struct NameCache {
    maps: RwLock<CacheMaps>,
}

impl NameCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a confirmed name/ID pairing in both directions.
    ///
    /// An existing name keeps the ID it was first paired with, display names are not unique
    /// across categories. An existing ID keeps its name unless it is the "Unknown" sentinel.
    pub fn put(&self, name: &str, id: EveId) {
        let mut maps = self.write();
        Self::insert_display(&mut maps, id, DisplayName::Named(name.to_string()));
        maps.by_name.entry(name.to_string()).or_insert(id);
    }

    /// Records a display-only value for an ID, only the ID to name side is written.
    ///
    /// A real name passed here is stored through [`NameCache::put`] instead so both sides stay
    /// consistent.
    pub fn put_display(&self, id: EveId, display: DisplayName) {
        if let DisplayName::Named(name) = &display {
            self.put(name, id);
            return;
        }

        let mut maps = self.write();
        Self::insert_display(&mut maps, id, display);
    }

    /// Maps an additional lookup key, such as the text a user searched for, to an ID.
    pub fn alias(&self, name: &str, id: EveId) {
        self.write().by_name.entry(name.to_string()).or_insert(id);
    }

    /// ID cached for a name.
    pub fn get_by_name(&self, name: &str) -> Option<EveId> {
        self.read().by_name.get(name).copied()
    }

    /// Display name cached for an ID.
    ///
    /// The reserved ID 0 always reads as "None" and is never stored.
    pub fn get_by_id(&self, id: EveId) -> Option<String> {
        if id == NONE_ID {
            return Some(NONE_NAME.to_string());
        }

        self.read().by_id.get(&id).map(ToString::to_string)
    }

    /// Whether the ID has a cached value, the "Unknown" sentinel included.
    pub fn contains_id(&self, id: EveId) -> bool {
        self.read().by_id.contains_key(&id)
    }

    /// Whether the ID has a cached value other than the "Unknown" sentinel.
    pub fn is_resolved(&self, id: EveId) -> bool {
        self.read()
            .by_id
            .get(&id)
            .is_some_and(|display| !display.is_unknown())
    }

    /// Number of cached IDs.
    pub fn len(&self) -> usize {
        self.read().by_id.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.read().by_id.is_empty()
    }

    fn insert_display(maps: &mut CacheMaps, id: EveId, display: DisplayName) {
        match maps.by_id.get(&id) {
            Some(existing) if !existing.is_unknown() => {}
            _ => {
                maps.by_id.insert(id, display);
            }
        }
    }

    // Writes are single inserts, a poisoned lock still guards consistent maps.
    fn read(&self) -> RwLockReadGuard<'_, CacheMaps> {
        self.maps.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, CacheMaps> {
        self.maps
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
