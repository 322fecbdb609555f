//! Signpost — an in-memory registry of navigation path callables.
//!
//! Applications register a path-generating callable per key along with a
//! display label, navigation-list membership, and an optional group, then
//! query filtered views while building navigation:
//! - [`PathRegistry::nav_links`] for the links of one navigation list
//! - [`PathRegistry::group_links`] for the links of one group
//! - [`PathRegistry::get`] for a single keyed lookup
//!
//! The registry never inspects stored callables or the URLs they produce;
//! it is not a router.

pub mod definition;
pub mod entry;
pub mod error;
pub mod registry;
pub mod shared;

pub use definition::{PathDefinition, parse_definitions};
pub use entry::{NavLink, PathArg, PathEntry, PathFn};
pub use error::DefinitionError;
pub use registry::PathRegistry;
pub use shared::SharedPathRegistry;
