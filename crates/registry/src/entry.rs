//! Path entry and view types.
//!
//! A path entry associates a key with an opaque path-generating callable
//! and display metadata. Queries return [`NavLink`] projections rather
//! than the stored entries themselves.

use std::fmt;
use std::sync::Arc;

/// A positional argument passed to a path callable.
///
/// Callables accept any mix of strings, numbers, and omitted values; the
/// registry never interprets them.
#[derive(Debug, Clone, PartialEq)]
pub enum PathArg {
    Str(String),
    Int(i64),
    Float(f64),
    /// An explicitly omitted positional value. Renders as an empty string.
    Absent,
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathArg::Str(s) => f.write_str(s),
            PathArg::Int(n) => write!(f, "{n}"),
            PathArg::Float(n) => write!(f, "{n}"),
            PathArg::Absent => Ok(()),
        }
    }
}

impl From<&str> for PathArg {
    fn from(value: &str) -> Self {
        PathArg::Str(value.to_string())
    }
}

impl From<String> for PathArg {
    fn from(value: String) -> Self {
        PathArg::Str(value)
    }
}

impl From<i64> for PathArg {
    fn from(value: i64) -> Self {
        PathArg::Int(value)
    }
}

impl From<f64> for PathArg {
    fn from(value: f64) -> Self {
        PathArg::Float(value)
    }
}

/// A path-generating callable.
///
/// Shared by reference between the registry and returned views; invoked
/// only by callers, never by the registry.
pub type PathFn = Arc<dyn Fn(&[PathArg]) -> String + Send + Sync>;

/// The stored record for one registered path.
#[derive(Clone)]
pub struct PathEntry {
    /// Unique key within the registry.
    pub key: String,
    /// Display label (e.g., a link's visible text).
    pub label: String,
    /// Navigation lists this path belongs to (e.g., "main", "footer").
    pub navs: Vec<String>,
    /// Optional categorizing group (e.g., "user").
    pub group: Option<String>,
    path: PathFn,
}

impl PathEntry {
    /// Create an entry with no nav membership and no group.
    ///
    /// The key must be non-empty; the registry does not enforce it.
    pub fn new<F>(key: impl Into<String>, path: F, label: impl Into<String>) -> Self
    where
        F: Fn(&[PathArg]) -> String + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            label: label.into(),
            navs: Vec::new(),
            group: None,
            path: Arc::new(path),
        }
    }

    /// Replace the entry's nav-list membership.
    pub fn in_navs<I, S>(mut self, navs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.navs = navs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the entry's group.
    pub fn grouped(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Invoke the stored callable.
    pub fn path(&self, args: &[PathArg]) -> String {
        (self.path)(args)
    }

    /// The stored callable itself, for callers that invoke it later.
    pub fn path_fn(&self) -> PathFn {
        Arc::clone(&self.path)
    }
}

impl fmt::Debug for PathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathEntry")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("navs", &self.navs)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}

/// Read-only projection of a path entry, omitting `key` and `navs`.
///
/// Metadata is an owned copy; the callable is shared with the registry.
/// Mutating a view never affects stored state.
#[derive(Clone)]
pub struct NavLink {
    /// Display label.
    pub label: String,
    /// Optional categorizing group.
    pub group: Option<String>,
    path: PathFn,
}

impl NavLink {
    /// Invoke the callable with the caller's arguments.
    pub fn path(&self, args: &[PathArg]) -> String {
        (self.path)(args)
    }

    /// The callable itself.
    pub fn path_fn(&self) -> PathFn {
        Arc::clone(&self.path)
    }
}

impl From<&PathEntry> for NavLink {
    fn from(entry: &PathEntry) -> Self {
        Self {
            label: entry.label.clone(),
            group: entry.group.clone(),
            path: entry.path_fn(),
        }
    }
}

impl fmt::Debug for NavLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavLink")
            .field("label", &self.label)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}
