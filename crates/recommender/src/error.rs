//! Error types for the recommender crate.

use thiserror::Error;

/// Errors returned by a recommendation query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// The query title has no exact match in the catalog
    #[error("Movie not found: {title}")]
    MovieNotFound { title: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;
