//! Path registry - stores path entries and answers filtered queries.
//!
//! Registration typically happens once during application startup; queries
//! run read-only for the rest of the process lifetime while navigation is
//! rendered.

use indexmap::IndexMap;
use tracing::debug;

use crate::entry::{NavLink, PathEntry};

/// Registry of path entries keyed by identifier.
///
/// Query results come back in registration order: the first registration
/// of a key fixes its position, and re-registering the same key replaces
/// the entry in place. Filtering is a linear scan per call; registries are
/// expected to stay small (tens to low hundreds of entries).
#[derive(Debug)]
pub struct PathRegistry {
    entries: IndexMap<String, PathEntry>,
}

impl PathRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Store an entry, replacing any prior entry under the same key.
    ///
    /// Overwrite is intentional and silent; callers wanting uniqueness
    /// enforcement must check before registering.
    pub fn register(&mut self, entry: PathEntry) {
        debug!(key = %entry.key, "registered path");
        self.entries.insert(entry.key.clone(), entry);
    }

    /// Views of every entry whose `navs` contains `nav`.
    ///
    /// The match is exact and case-sensitive. No match yields an empty
    /// vector.
    pub fn nav_links(&self, nav: &str) -> Vec<NavLink> {
        self.entries
            .values()
            .filter(|entry| entry.navs.iter().any(|n| n == nav))
            .map(NavLink::from)
            .collect()
    }

    /// Views of every entry whose `group` equals `group`.
    ///
    /// Ungrouped entries never match, for any query including `""`.
    pub fn group_links(&self, group: &str) -> Vec<NavLink> {
        self.entries
            .values()
            .filter(|entry| entry.group.as_deref() == Some(group))
            .map(NavLink::from)
            .collect()
    }

    /// View of the entry under `key`, or `None` if no entry exists.
    pub fn get(&self, key: &str) -> Option<NavLink> {
        self.entries.get(key).map(NavLink::from)
    }

    /// An independent copy of the current state, keyed by entry key.
    ///
    /// Later registrations do not appear in a snapshot already returned,
    /// and mutating the snapshot does not affect the registry.
    pub fn snapshot(&self) -> IndexMap<String, PathEntry> {
        self.entries.clone()
    }

    /// Registered keys, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PathRegistry {
    fn default() -> Self {
        Self::new()
    }
}
