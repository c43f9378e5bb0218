//! # Data Loader Crate
//!
//! This crate loads the movie catalog the recommender works on.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (CatalogEntry, Catalog)
//! - **parser**: Parse movies.csv / movies.dat files into entries
//! - **index**: Build the catalog and its title index from a file
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! // Load the catalog once at startup
//! let catalog = Catalog::load_from_file(Path::new("data/movies.csv"))?;
//!
//! // Query data
//! let movie = catalog.get_by_title("Toy Story (1995)").unwrap();
//! println!("{} -> {}", movie.title, movie.combined_text);
//! ```
//!
//! ## Learning Goals
//!
//! 1. **Ownership and Borrowing**: Catalog owns the entries, methods return references
//! 2. **Error Handling**: Using Result<T> and custom error types
//! 3. **Type Safety**: Derived fields computed once in a constructor
//! 4. **Collections**: Vec for row order, HashMap for title lookups
//! 5. **Ecosystem crates**: `csv` for quoted fields, `thiserror` for errors

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    MovieId,
    // Core types
    Catalog,
    CatalogEntry,
    // Helpers
    normalize_genres,
    split_genres,
    GENRE_SEPARATOR,
    SOURCE_GENRE_SEPARATOR,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: MovieId, title: &str, genres: &str) -> CatalogEntry {
        CatalogEntry::from_raw_genres(id, title, genres)
    }

    #[test]
    fn test_catalog_creation() {
        // Test that we can create an empty Catalog
        let catalog = Catalog::new();

        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
        assert!(catalog.get(0).is_none());
    }

    #[test]
    fn test_entry_derives_text_features() {
        let movie = entry(1, "Toy Story (1995)", "Animation|Children's|Comedy");

        assert_eq!(movie.genres, vec!["Animation", "Children's", "Comedy"]);
        assert_eq!(movie.genre_text, "Animation,Children's,Comedy");
        assert_eq!(movie.combined_text, "Animation,Children's,Comedy Toy Story (1995)");
    }

    #[test]
    fn test_genre_text_keeps_raw_spacing() {
        let movie = entry(1, "X", "Comedy| Drama||Romance");

        assert_eq!(movie.genre_text, "Comedy, Drama,,Romance");
        assert_eq!(movie.combined_text, "Comedy, Drama,,Romance X");
        assert_eq!(movie.genres, vec!["Comedy", "Drama", "Romance"]);
        assert_eq!(normalize_genres("Action|Sci-Fi"), "Action,Sci-Fi");
    }

    #[test]
    fn test_entry_without_genres() {
        let movie = entry(7, "Untitled", "");

        assert!(movie.genres.is_empty());
        assert_eq!(movie.genre_text, "");
        assert_eq!(movie.combined_text, " Untitled");
    }

    #[test]
    fn test_duplicate_titles_resolve_to_first_row() {
        let catalog = Catalog::from_entries(vec![
            entry(1, "Hamlet", "Drama"),
            entry(2, "Heat", "Action|Crime"),
            entry(3, "Hamlet", "Drama|Romance"),
        ]);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.distinct_titles(), 2);
        assert_eq!(catalog.position("Hamlet"), Some(0));
        assert_eq!(catalog.get_by_title("Hamlet").unwrap().id, 1);
        assert_eq!(catalog.get(2).unwrap().id, 3);
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = Catalog::from_entries(vec![entry(1, "Heat", "Action")]);

        assert!(catalog.get_by_title("heat").is_none());
        assert!(catalog.get_by_title("Heat ").is_none());
        assert!(catalog.position("Nonexistent Title").is_none());
    }

    #[test]
    fn test_search_exact_first() {
        let catalog = Catalog::from_entries(vec![
            entry(1, "Heat Wave", "Drama"),
            entry(2, "Heat", "Action"),
            entry(3, "Casablanca", "Romance"),
        ]);

        let found: Vec<MovieId> = catalog.search("HEAT").iter().map(|e| e.id).collect();
        assert_eq!(found, vec![2, 1]);
        assert!(catalog.search("zzz").is_empty());
    }
}
