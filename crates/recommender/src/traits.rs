//! Core traits for the recommendation engine.
//!
//! This module defines the GenreMatcher trait that decides which bucket a
//! ranked candidate lands in.

use data_loader::CatalogEntry;

/// Decides whether a candidate counts as "same genre" as the query movie.
///
/// ## Design Note
/// - `Send + Sync` allows a matcher to live inside a shared `Recommender`
/// - The relation does not have to be symmetric
pub trait GenreMatcher: Send + Sync {
    /// Returns the name of this matcher (for logging/debugging)
    fn name(&self) -> &str;

    /// `true` puts the candidate in the same-genre bucket,
    /// `false` in the other-genre bucket
    fn is_same_genre(&self, query: &CatalogEntry, candidate: &CatalogEntry) -> bool;
}
