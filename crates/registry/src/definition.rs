//! Static path definitions.
//!
//! Embedders that configure fixed paths from data rather than code
//! describe them as JSON arrays of [`PathDefinition`] records. A
//! definition's `path` is a pattern whose `:name` segments are positional
//! parameter slots (e.g., "/user/:id").

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::entry::{PathArg, PathEntry};
use crate::error::DefinitionError;
use crate::registry::PathRegistry;

/// A data-described path: a fixed pattern plus display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathDefinition {
    /// Registry key.
    pub key: String,
    /// Path pattern (e.g., "/about", "/user/:id").
    pub path: String,
    /// Display label.
    pub label: String,
    /// Navigation lists this path belongs to.
    #[serde(default)]
    pub navs: Vec<String>,
    /// Optional categorizing group.
    #[serde(default)]
    pub group: Option<String>,
}

impl PathDefinition {
    /// Convert into a registrable entry.
    ///
    /// The produced callable substitutes positional arguments into the
    /// pattern's `:name` segments in order; a pattern without parameter
    /// segments ignores arguments entirely.
    pub fn into_entry(self) -> PathEntry {
        let PathDefinition {
            key,
            path,
            label,
            navs,
            group,
        } = self;

        let mut entry =
            PathEntry::new(key, move |args| fill_pattern(&path, args), label).in_navs(navs);
        if let Some(group) = group {
            entry = entry.grouped(group);
        }
        entry
    }
}

/// Substitute positional arguments into a pattern's `:name` segments.
///
/// Pattern: "/blog/:slug/edit"
/// Args: ["my-post"]
/// Result: "/blog/my-post/edit"
///
/// Arguments beyond the pattern's parameter count are ignored; parameters
/// beyond the argument count, and `Absent` arguments, render empty.
pub fn fill_pattern(pattern: &str, args: &[PathArg]) -> String {
    let mut args = args.iter();

    pattern
        .split('/')
        .map(|segment| {
            if segment.starts_with(':') {
                args.next().map(ToString::to_string).unwrap_or_default()
            } else {
                segment.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Strictly parse a JSON array of path definitions.
///
/// Rejects malformed JSON and definitions with an empty key. For the
/// lenient skip-and-warn behavior, see
/// [`PathRegistry::from_definition_sources`].
pub fn parse_definitions(json: &str) -> Result<Vec<PathDefinition>, DefinitionError> {
    let defs: Vec<PathDefinition> = serde_json::from_str(json)?;

    if let Some(def) = defs.iter().find(|d| d.key.is_empty()) {
        return Err(DefinitionError::EmptyKey {
            label: def.label.clone(),
        });
    }

    Ok(defs)
}

impl PathRegistry {
    /// Build a registry from `(source name, JSON array)` pairs.
    ///
    /// A source that fails to parse is skipped with a warning, as is any
    /// definition with an empty key; everything else registers normally.
    pub fn from_definition_sources(sources: Vec<(String, String)>) -> Self {
        let mut registry = Self::new();

        for (source, json) in sources {
            match serde_json::from_str::<Vec<PathDefinition>>(&json) {
                Ok(defs) => {
                    for def in defs {
                        if def.key.is_empty() {
                            warn!(
                                source = %source,
                                label = %def.label,
                                "skipping path definition with empty key"
                            );
                            continue;
                        }
                        registry.register(def.into_entry());
                    }
                }
                Err(e) => {
                    warn!(
                        source = %source,
                        error = %e,
                        "failed to parse path definitions"
                    );
                }
            }
        }

        registry
    }

    /// Register a batch of already-parsed definitions.
    pub fn load_definitions(&mut self, defs: Vec<PathDefinition>) {
        let count = defs.len();
        for def in defs {
            self.register(def.into_entry());
        }
        debug!(count, "loaded path definitions");
    }
}
