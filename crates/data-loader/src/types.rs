//! Core domain types for the movie catalog.
//!
//! This module defines the fundamental data structures used throughout the system.
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (MovieId)
//! - Structs with public fields built through a constructor that derives the rest
//! - HashMap for title lookups next to a Vec that keeps row order

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie (the `movieId` column in MovieLens files)
pub type MovieId = u32;

/// Separator used between genres in the source files: "Adventure|Comedy"
pub const SOURCE_GENRE_SEPARATOR: char = '|';

/// Separator used between genres once loaded: "Adventure,Comedy"
pub const GENRE_SEPARATOR: char = ',';

// =============================================================================
// CatalogEntry
// =============================================================================

/// One movie row of the catalog.
///
/// `genre_text` and `combined_text` are derived once in [`CatalogEntry::new`]
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: MovieId,
    pub title: String,
    /// Genres in source order
    pub genres: Vec<String>,
    /// Genres joined with [`GENRE_SEPARATOR`], e.g. "Animation,Comedy"
    pub genre_text: String,
    /// `genre_text + " " + title`, the text the recommender vectorizes
    pub combined_text: String,
}

impl CatalogEntry {
    /// Build an entry and derive its text features
    pub fn new(id: MovieId, title: impl Into<String>, genres: Vec<String>) -> Self {
        let title = title.into();
        let genre_text = genres.join(GENRE_SEPARATOR.to_string().as_str());
        let combined_text = format!("{} {}", genre_text, title);

        Self {
            id,
            title,
            genres,
            genre_text,
            combined_text,
        }
    }

    /// Build an entry from a raw pipe-separated genre list ("Action|Sci-Fi")
    ///
    /// `genre_text` is the raw list with every `|` swapped for `,` and nothing
    /// else touched, so stray spaces and empty segments survive into it. Only
    /// the `genres` list is trimmed. An empty string yields no genres.
    pub fn from_raw_genres(id: MovieId, title: impl Into<String>, raw_genres: &str) -> Self {
        let title = title.into();
        let genre_text = normalize_genres(raw_genres);
        let combined_text = format!("{} {}", genre_text, title);

        Self {
            id,
            title,
            genres: split_genres(raw_genres),
            genre_text,
            combined_text,
        }
    }
}

/// Swap the source separator for [`GENRE_SEPARATOR`], keeping everything else
///
/// Example: "Comedy| Drama||Romance" -> "Comedy, Drama,,Romance"
pub fn normalize_genres(raw: &str) -> String {
    raw.replace(SOURCE_GENRE_SEPARATOR, GENRE_SEPARATOR.to_string().as_str())
}

/// Split a pipe-separated genre list
///
/// Example: "Action|Adventure|Sci-Fi" -> ["Action", "Adventure", "Sci-Fi"]
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split(SOURCE_GENRE_SEPARATOR)
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Catalog - The In-Memory Movie Table
// =============================================================================

/// The whole movie table, in file order.
///
/// Rust concepts demonstrated:
/// - `Vec<T>` keeps row positions stable; the recommender refers to rows by index
/// - `HashMap<String, usize>` gives O(1) title lookups
/// - Borrowing: getters return `&CatalogEntry`, never clones
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) entries: Vec<CatalogEntry>,
    /// Title -> row of its first occurrence
    pub(crate) title_index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from entries in row order
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry);
        }
        catalog
    }

    /// Append an entry at the next row
    ///
    /// A title that already exists keeps pointing at its first row.
    pub fn insert(&mut self, entry: CatalogEntry) {
        let row = self.entries.len();
        self.title_index.entry(entry.title.clone()).or_insert(row);
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in row order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Get an entry by row position
    pub fn get(&self, row: usize) -> Option<&CatalogEntry> {
        self.entries.get(row)
    }

    /// Row of the first entry whose title matches exactly
    pub fn position(&self, title: &str) -> Option<usize> {
        self.title_index.get(title).copied()
    }

    /// First entry whose title matches exactly
    pub fn get_by_title(&self, title: &str) -> Option<&CatalogEntry> {
        self.position(title).map(|row| &self.entries[row])
    }

    /// Case-insensitive title search.
    ///
    /// Exact matches come first, then substring matches; row order is kept
    /// within each group.
    pub fn search(&self, fragment: &str) -> Vec<&CatalogEntry> {
        let needle = fragment.to_lowercase();
        let mut exact = Vec::new();
        let mut partial = Vec::new();

        for entry in &self.entries {
            let title = entry.title.to_lowercase();
            if title == needle {
                exact.push(entry);
            } else if title.contains(&needle) {
                partial.push(entry);
            }
        }

        exact.extend(partial);
        exact
    }

    /// Number of distinct titles (differs from `len` when titles collide)
    pub fn distinct_titles(&self) -> usize {
        self.title_index.len()
    }
}
