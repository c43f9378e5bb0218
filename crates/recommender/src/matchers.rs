//! GenreMatcher implementations.

use crate::traits::GenreMatcher;
use data_loader::CatalogEntry;
use std::collections::HashSet;

/// Same genre when the query's genre text is a substring of the candidate's.
///
/// This is the default partition rule. It is asymmetric: a "Comedy" query
/// matches a "Comedy,Drama" candidate, but a "Comedy,Drama" query does not
/// match a "Comedy" candidate. It also matches inside genre names, so a
/// "Crime" query matches "Crime,Thriller" and an empty genre text matches
/// everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringGenreMatcher;

impl GenreMatcher for SubstringGenreMatcher {
    fn name(&self) -> &str {
        "SubstringGenreMatcher"
    }

    fn is_same_genre(&self, query: &CatalogEntry, candidate: &CatalogEntry) -> bool {
        candidate.genre_text.contains(query.genre_text.as_str())
    }
}

/// Same genre when both movies carry exactly the same set of genres
/// (order and duplicates ignored).
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactGenreMatcher;

impl GenreMatcher for ExactGenreMatcher {
    fn name(&self) -> &str {
        "ExactGenreMatcher"
    }

    fn is_same_genre(&self, query: &CatalogEntry, candidate: &CatalogEntry) -> bool {
        let query_genres: HashSet<&str> = query.genres.iter().map(String::as_str).collect();
        let candidate_genres: HashSet<&str> =
            candidate.genres.iter().map(String::as_str).collect();
        query_genres == candidate_genres
    }
}
