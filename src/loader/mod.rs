//! Term loaders that populate filter configuration from external sources.
//!
//! A term loader produces a flat, ordered list of strings for use as filter
//! configuration (keywords, stop words, override rules, synonym rules). The
//! only implementation provided here reads from a relational database; other
//! sources (e.g. object storage) can slot in behind the same trait and the
//! factories will treat them uniformly.

use crate::error::Result;

/// Trait for components that load a term list from an external source.
///
/// Loading is synchronous and happens exactly once, at filter-construction
/// time. Implementations must not cache results across instances.
pub trait TermLoader: Send + Sync {
    /// Load the terms now.
    ///
    /// Returns the terms in source order, duplicates permitted. Every element
    /// is non-empty and does not start with `#`; comment and blank lines are
    /// filtered at the source. Fails with a load error when the source is
    /// unreachable, misconfigured, or returns malformed data.
    fn load_terms(&self) -> Result<Vec<String>>;

    /// Get the name of this loader (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod database;

pub use database::DatabaseTermLoader;
