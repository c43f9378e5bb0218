//! Catalog building and loading.
//!
//! Parses a movie file and builds the [`Catalog`] with its title index.
//! The file format is picked from the extension: `.dat` is the MovieLens 1M
//! layout, anything else is read as CSV.

use crate::error::Result;
use crate::parser;
use crate::types::Catalog;
use std::path::Path;
use tracing::{debug, info, warn};

impl Catalog {
    /// Load a movie catalog from a file
    ///
    /// This is the main entry point for loading data.
    ///
    /// Steps:
    /// 1. Parse the file into entries (genres normalized, combined text derived)
    /// 2. Insert entries in file order, building the title index
    /// 3. Log counts
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", path);

        let is_dat = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("dat"));
        let entries = if is_dat {
            parser::parse_movies_dat(path)?
        } else {
            parser::parse_movies_csv(path)?
        };

        let catalog = Catalog::from_entries(entries);

        let duplicates = catalog.len() - catalog.distinct_titles();
        if duplicates > 0 {
            // Lookups resolve to the first row; later rows stay rankable
            warn!("{} duplicate titles in catalog", duplicates);
        }
        if catalog.is_empty() {
            warn!("Catalog {:?} has no movies", path);
        }

        debug!(distinct_titles = catalog.distinct_titles(), "Built title index");
        info!("Loaded {} movies", catalog.len());
        Ok(catalog)
    }
}
