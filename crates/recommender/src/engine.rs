//! Content-based recommendation engine.
//!
//! Given a query title, ranks every other catalog movie by textual
//! similarity and splits the ranking into a same-genre and an other-genre
//! bucket.
//!
//! ## Algorithm
//! 1. Vectorize every entry's combined text (genres + title) into counts
//! 2. Cosine similarity of the query row against every row
//! 3. Stable sort of all non-query rows by descending similarity
//! 4. Walk the ranking, putting each candidate into a bucket with the
//!    GenreMatcher (default: genre substring)
//! 5. Stop walking as soon as BOTH buckets hold `min_bucket_size` entries
//!
//! Step 5 halts the scan instead of truncating afterwards: one bucket may end
//! up longer than the minimum, and both may be shorter when the catalog runs
//! out first.

use crate::error::{RecommendError, Result};
use crate::matchers::SubstringGenreMatcher;
use crate::similarity::{SimilarityMatrix, similarity_row};
use crate::traits::GenreMatcher;
use crate::vectorizer::CountMatrix;
use data_loader::{Catalog, CatalogEntry};
use serde::Serialize;
use tracing::{debug, instrument};

/// Scan stops once both buckets reach this size (unless configured otherwise)
pub const DEFAULT_MIN_BUCKET_SIZE: usize = 3;

/// A recommended movie with its similarity to the query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredEntry {
    /// Row of the movie in the catalog
    pub row: usize,
    pub score: f64,
    pub entry: CatalogEntry,
}

/// The two ranked buckets for one query.
///
/// Invariants: the query movie is in neither bucket, and each bucket is
/// ordered by non-increasing score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub query: CatalogEntry,
    pub same_genre: Vec<ScoredEntry>,
    pub other_genre: Vec<ScoredEntry>,
}

impl RecommendationResult {
    /// Total number of recommended movies across both buckets
    pub fn len(&self) -> usize {
        self.same_genre.len() + self.other_genre.len()
    }

    pub fn is_empty(&self) -> bool {
        self.same_genre.is_empty() && self.other_genre.is_empty()
    }
}

/// Recommend movies for `query_title` from scratch.
///
/// Vectorizes the whole catalog on every call and keeps nothing afterwards.
/// Use [`Recommender`] to vectorize once and answer many queries.
pub fn recommend(catalog: &Catalog, query_title: &str) -> Result<RecommendationResult> {
    if catalog.position(query_title).is_none() {
        return Err(not_found(query_title));
    }
    Recommender::new(catalog).recommend(query_title)
}

fn not_found(title: &str) -> RecommendError {
    RecommendError::MovieNotFound {
        title: title.to_string(),
    }
}

/// Recommendation engine over a borrowed catalog.
///
/// The count vectors are computed once in [`Recommender::new`]; every query
/// then only computes one similarity row. Results are identical to the
/// stateless [`recommend`].
///
/// ## Usage
/// ```ignore
/// let recommender = Recommender::new(&catalog)
///     .with_min_bucket_size(3)
///     .with_matcher(SubstringGenreMatcher);
///
/// let result = recommender.recommend("Toy Story (1995)")?;
/// ```
pub struct Recommender<'a> {
    /// Shared reference to the catalog (read-only)
    catalog: &'a Catalog,
    counts: CountMatrix,
    min_bucket_size: usize,
    matcher: Box<dyn GenreMatcher>,
}

impl<'a> Recommender<'a> {
    /// Vectorize the catalog and create a recommender with default settings
    pub fn new(catalog: &'a Catalog) -> Self {
        let counts = CountMatrix::from_catalog(catalog);
        debug!(
            movies = counts.len(),
            vocabulary = counts.vocabulary_size(),
            "Vectorized catalog"
        );

        Self {
            catalog,
            counts,
            min_bucket_size: DEFAULT_MIN_BUCKET_SIZE,
            matcher: Box::new(SubstringGenreMatcher),
        }
    }

    /// Configure the bucket size that stops the scan (default: 3)
    pub fn with_min_bucket_size(mut self, size: usize) -> Self {
        self.min_bucket_size = size;
        self
    }

    /// Configure the genre partition rule (default: SubstringGenreMatcher)
    pub fn with_matcher(mut self, matcher: impl GenreMatcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub fn min_bucket_size(&self) -> usize {
        self.min_bucket_size
    }

    pub fn vocabulary_size(&self) -> usize {
        self.counts.vocabulary_size()
    }

    /// Full pairwise similarity matrix of the catalog
    pub fn similarity_matrix(&self) -> SimilarityMatrix {
        SimilarityMatrix::compute(&self.counts)
    }

    /// Recommend movies similar to `query_title` (exact title match).
    ///
    /// # Returns
    /// * `Ok(RecommendationResult)` - the two ranked buckets
    /// * `Err(RecommendError::MovieNotFound)` - no movie has this exact title
    #[instrument(skip(self), fields(catalog_size = self.catalog.len()))]
    pub fn recommend(&self, query_title: &str) -> Result<RecommendationResult> {
        let query_row = self
            .catalog
            .position(query_title)
            .ok_or_else(|| not_found(query_title))?;
        let query = &self.catalog.entries()[query_row];

        // Step 1-2: similarity of the query against every row
        let scores = similarity_row(&self.counts, query_row);

        // Step 3: rank everything except the query itself
        let ranked = rank(&scores, query_row);

        // Step 4-5: partition with early stop
        let (same_genre, other_genre) = self.partition(query, &ranked);

        debug!(
            matcher = self.matcher.name(),
            same_genre = same_genre.len(),
            other_genre = other_genre.len(),
            "Recommendations ready"
        );

        Ok(RecommendationResult {
            query: query.clone(),
            same_genre,
            other_genre,
        })
    }

    fn partition(
        &self,
        query: &CatalogEntry,
        ranked: &[(usize, f64)],
    ) -> (Vec<ScoredEntry>, Vec<ScoredEntry>) {
        let mut same_genre = Vec::new();
        let mut other_genre = Vec::new();

        for &(row, score) in ranked {
            let entry = &self.catalog.entries()[row];
            let scored = ScoredEntry {
                row,
                score,
                entry: entry.clone(),
            };

            if self.matcher.is_same_genre(query, entry) {
                same_genre.push(scored);
            } else {
                other_genre.push(scored);
            }

            if same_genre.len() >= self.min_bucket_size
                && other_genre.len() >= self.min_bucket_size
            {
                break;
            }
        }

        (same_genre, other_genre)
    }
}

/// Rows other than `exclude`, ordered by descending score.
///
/// The sort is stable, so equal scores keep row order.
pub fn rank(scores: &[f64], exclude: usize) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|&(row, _)| row != exclude)
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}
