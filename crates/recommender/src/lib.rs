//! Content-based movie recommendations.
//!
//! This crate provides:
//! - CountMatrix for bag-of-words vectorization of catalog text
//! - Cosine similarity (single row or the full SimilarityMatrix)
//! - GenreMatcher trait and implementations for splitting results
//! - Recommender / recommend for ranked same-genre and other-genre buckets
//!
//! ## Architecture
//! A query is processed in stages:
//! 1. Every entry's combined text (genres + title) becomes a count vector
//! 2. The query row is compared with every row by cosine similarity
//! 3. Candidates are ranked and split into buckets by the GenreMatcher
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::Catalog;
//! use recommender::{recommend, Recommender};
//!
//! let catalog = Catalog::load_from_file(Path::new("data/movies.csv"))?;
//!
//! // One-off query, nothing cached
//! let result = recommend(&catalog, "Toy Story (1995)")?;
//!
//! // Many queries: vectorize once
//! let recommender = Recommender::new(&catalog);
//! for title in titles {
//!     let result = recommender.recommend(title)?;
//! }
//! ```

pub mod error;
pub mod vectorizer;
pub mod similarity;
pub mod traits;
pub mod matchers;
pub mod engine;

// Re-export main types
pub use error::{RecommendError, Result};
pub use vectorizer::{CountMatrix, SparseVector, tokenize};
pub use similarity::{SimilarityMatrix, cosine_similarity, similarity_row};
pub use traits::GenreMatcher;
pub use matchers::{ExactGenreMatcher, SubstringGenreMatcher};
pub use engine::{
    DEFAULT_MIN_BUCKET_SIZE, RecommendationResult, Recommender, ScoredEntry, rank, recommend,
};
