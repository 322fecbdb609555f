//! Shared registry handle for multi-threaded embedders.
//!
//! The core [`PathRegistry`] is single-owner and carries no internal
//! synchronization. Embedders where registration and queries can genuinely
//! race hold a [`SharedPathRegistry`] instead, which serializes access
//! through a read-write lock.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::entry::{NavLink, PathEntry};
use crate::registry::PathRegistry;

/// Cloneable handle to a registry behind a read-write lock.
///
/// Clones share the same underlying registry.
#[derive(Debug, Clone, Default)]
pub struct SharedPathRegistry {
    inner: Arc<RwLock<PathRegistry>>,
}

impl SharedPathRegistry {
    /// Create a handle to a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-populated registry.
    pub fn from_registry(registry: PathRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Store an entry, replacing any prior entry under the same key.
    pub fn register(&self, entry: PathEntry) {
        self.inner.write().register(entry);
    }

    /// Views of every entry in the named navigation list.
    pub fn nav_links(&self, nav: &str) -> Vec<NavLink> {
        self.inner.read().nav_links(nav)
    }

    /// Views of every entry in the named group.
    pub fn group_links(&self, group: &str) -> Vec<NavLink> {
        self.inner.read().group_links(group)
    }

    /// View of the entry under `key`, or `None` if no entry exists.
    pub fn get(&self, key: &str) -> Option<NavLink> {
        self.inner.read().get(key)
    }

    /// An independent copy of the current state.
    pub fn snapshot(&self) -> IndexMap<String, PathEntry> {
        self.inner.read().snapshot()
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
