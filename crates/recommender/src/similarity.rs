//! Cosine similarity over count vectors.
//!
//! `sim(a, b) = dot(a, b) / (|a| * |b|)`, defined as 0 when either vector is
//! all zeros. Counts are non-negative, so scores land in [0, 1].

use crate::vectorizer::{CountMatrix, SparseVector};
use rayon::prelude::*;

/// Cosine similarity of two count vectors
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }
    a.dot(b) / (a.norm() * b.norm())
}

/// Similarity of one row against every row of the matrix (itself included).
///
/// This is row `row` of the full [`SimilarityMatrix`], without building the
/// other rows. Returns an empty vec for an out-of-range row.
pub fn similarity_row(matrix: &CountMatrix, row: usize) -> Vec<f64> {
    let Some(query) = matrix.row(row) else {
        return Vec::new();
    };

    matrix
        .rows()
        .par_iter()
        .map(|other| cosine_similarity(query, other))
        .collect()
}

/// Dense pairwise similarity of every catalog row.
///
/// Entry `[i][j]` is the cosine similarity of rows i and j. The matrix is
/// symmetric and its diagonal is 1 for every non-zero row.
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix {
    scores: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Compute all rows in parallel
    pub fn compute(matrix: &CountMatrix) -> Self {
        let scores = (0..matrix.len())
            .into_par_iter()
            .map(|row| similarity_row(matrix, row))
            .collect();
        Self { scores }
    }

    /// Side length
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.scores.get(i).and_then(|row| row.get(j)).copied()
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.scores.get(i).map(Vec::as_slice)
    }
}
