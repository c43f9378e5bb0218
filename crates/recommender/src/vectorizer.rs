//! Bag-of-words vectorization of catalog text.
//!
//! Turns every entry's `combined_text` into a sparse count vector over a
//! vocabulary shared by the whole catalog.
//!
//! ## Tokenization
//! Text is lowercased, then every run of two or more word characters is a
//! token (`\b\w\w+\b`). Punctuation and whitespace separate tokens and
//! single-character words are dropped:
//!
//! "Action,Sci-Fi Alien (1979)" -> ["action", "sci", "fi", "alien", "1979"]
//!
//! ## Learning Goals
//! - `LazyLock` for a regex compiled once per process
//! - BTreeMap/BTreeSet for a deterministic, sorted vocabulary
//! - Rayon `par_iter` for per-document work that is independent

use data_loader::Catalog;
use rayon::prelude::*;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Split text into lowercase tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// A sparse vector of term counts.
///
/// `terms` holds `(column, count)` pairs sorted by column with no zero
/// counts, so two vectors can be multiplied with a single merge pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    terms: Vec<(usize, u32)>,
    norm: f64,
}

impl SparseVector {
    /// Build from unsorted `(column, count)` pairs
    pub fn from_counts(counts: BTreeMap<usize, u32>) -> Self {
        let terms: Vec<(usize, u32)> = counts.into_iter().filter(|&(_, c)| c > 0).collect();
        let norm = terms
            .iter()
            .map(|&(_, c)| (c as f64) * (c as f64))
            .sum::<f64>()
            .sqrt();
        Self { terms, norm }
    }

    /// Euclidean length
    pub fn norm(&self) -> f64 {
        self.norm
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[(usize, u32)] {
        &self.terms
    }

    /// Count for a column (0 when absent)
    pub fn get(&self, column: usize) -> u32 {
        self.terms
            .binary_search_by_key(&column, |&(col, _)| col)
            .map(|i| self.terms[i].1)
            .unwrap_or(0)
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;

        while i < self.terms.len() && j < other.terms.len() {
            let (col_a, count_a) = self.terms[i];
            let (col_b, count_b) = other.terms[j];
            if col_a == col_b {
                sum += (count_a as f64) * (count_b as f64);
                i += 1;
                j += 1;
            } else if col_a < col_b {
                i += 1;
            } else {
                j += 1;
            }
        }

        sum
    }
}

/// Count vectors for every catalog row plus the vocabulary they index into.
#[derive(Debug, Clone, Default)]
pub struct CountMatrix {
    vocabulary: BTreeMap<String, usize>,
    rows: Vec<SparseVector>,
}

impl CountMatrix {
    /// Vectorize a list of documents.
    ///
    /// ## Algorithm
    /// 1. Tokenize every document (in parallel)
    /// 2. Vocabulary = sorted set of all distinct tokens; column = sorted position
    /// 3. Count each document's tokens into a sparse vector (in parallel)
    pub fn from_documents<S: AsRef<str> + Sync>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents
            .par_iter()
            .map(|doc| tokenize(doc.as_ref()))
            .collect();

        let distinct: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        let vocabulary: BTreeMap<String, usize> = distinct
            .into_iter()
            .enumerate()
            .map(|(column, token)| (token.to_string(), column))
            .collect();

        let rows = tokenized
            .par_iter()
            .map(|tokens| {
                let mut counts = BTreeMap::new();
                for token in tokens {
                    if let Some(&column) = vocabulary.get(token) {
                        *counts.entry(column).or_insert(0) += 1;
                    }
                }
                SparseVector::from_counts(counts)
            })
            .collect();

        Self { vocabulary, rows }
    }

    /// Vectorize every entry's combined text, in catalog row order
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let documents: Vec<&str> = catalog
            .entries()
            .iter()
            .map(|entry| entry.combined_text.as_str())
            .collect();
        Self::from_documents(documents.as_slice())
    }

    /// Number of rows (documents)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Column of a token, if it is in the vocabulary
    pub fn column(&self, token: &str) -> Option<usize> {
        self.vocabulary.get(token).copied()
    }

    pub fn row(&self, row: usize) -> Option<&SparseVector> {
        self.rows.get(row)
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Action,Sci-Fi Alien (1979)"),
            vec!["action", "sci", "fi", "alien", "1979"]
        );
        // Single characters are not tokens
        assert_eq!(tokenize("Drama A Beautiful Mind"), vec!["drama", "beautiful", "mind"]);
        assert!(tokenize(" ,|()").is_empty());
    }

    #[test]
    fn test_tokenize_unicode() {
        assert_eq!(tokenize("Comedy Amélie"), vec!["comedy", "amélie"]);
    }

    #[test]
    fn test_vocabulary_is_shared_and_sorted() {
        let matrix = CountMatrix::from_documents(&["comedy heat", "drama heat heat"]);

        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.vocabulary_size(), 3);
        assert_eq!(matrix.column("comedy"), Some(0));
        assert_eq!(matrix.column("drama"), Some(1));
        assert_eq!(matrix.column("heat"), Some(2));

        let second = matrix.row(1).unwrap();
        assert_eq!(second.get(2), 2);
        assert_eq!(second.get(0), 0);
        assert!((second.norm() - 5.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_dot_product() {
        let matrix = CountMatrix::from_documents(&["a1 b2 b2 c3", "b2 c3 c3 d4"]);
        let a = matrix.row(0).unwrap();
        let b = matrix.row(1).unwrap();

        // b2: 2*1, c3: 1*2
        assert_eq!(a.dot(b), 4.0);
        assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn test_empty_document_is_zero_vector() {
        let matrix = CountMatrix::from_documents(&["", "drama"]);

        assert!(matrix.row(0).unwrap().is_zero());
        assert_eq!(matrix.row(0).unwrap().norm(), 0.0);
        assert!(!matrix.row(1).unwrap().is_zero());
    }
}
