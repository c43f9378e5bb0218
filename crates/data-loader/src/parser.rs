//! Parsers for movie catalog files.
//!
//! Two layouts are understood:
//! - movies.csv (MovieLens "latest"): header row `movieId,title,genres`,
//!   quoted titles such as `"American President, The (1995)"`
//! - movies.dat (MovieLens 1M): `movieId::title::genres`, ISO-8859-1 encoded
//!
//! In both, genres are pipe-separated: "Animation|Children's|Comedy".
//! The parsers hand back rows in file order; building the lookup index is
//! the job of [`crate::index`].

use crate::error::{DataLoadError, Result};
use crate::types::{CatalogEntry, MovieId};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Column holding the movie title (required)
pub const TITLE_COLUMN: &str = "title";
/// Column holding the pipe-separated genre list (required)
pub const GENRES_COLUMN: &str = "genres";
/// Column holding the numeric id (optional; row number is used when absent)
pub const ID_COLUMN: &str = "movieId";

/// Open a file, turning "not found" into [`DataLoadError::FileNotFound`]
fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse a movies.csv file
pub fn parse_movies_csv(path: &Path) -> Result<Vec<CatalogEntry>> {
    let file = open(path)?;
    parse_movies_csv_reader(file, &file_name(path))
}

/// Parse CSV movie rows from any reader.
///
/// `source` only names the input in error messages.
pub fn parse_movies_csv_reader<R: Read>(reader: R, source: &str) -> Result<Vec<CatalogEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    // Locate columns by name so column order in the file doesn't matter
    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);

    let missing = |name: &str| DataLoadError::MissingColumn {
        column: name.to_string(),
        file: source.to_string(),
    };
    let title_idx = column(TITLE_COLUMN).ok_or_else(|| missing(TITLE_COLUMN))?;
    let genres_idx = column(GENRES_COLUMN).ok_or_else(|| missing(GENRES_COLUMN))?;
    let id_idx = column(ID_COLUMN);

    let mut entries = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let line_no = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row + 2);

        let field = |idx: usize, name: &str| {
            record.get(idx).ok_or_else(|| DataLoadError::ParseError {
                file: source.to_string(),
                line: line_no,
                reason: format!("Missing {}", name),
            })
        };

        let title = field(title_idx, TITLE_COLUMN)?;
        let genres = field(genres_idx, GENRES_COLUMN)?;
        let id = match id_idx {
            Some(idx) => parse_id(field(idx, ID_COLUMN)?, source, line_no)?,
            None => (row + 1) as MovieId,
        };

        entries.push(CatalogEntry::from_raw_genres(id, title, genres));
    }

    Ok(entries)
}

/// Parse a movies.dat file (MovieLens 1M)
///
/// Format: movieId::title::genres
pub fn parse_movies_dat(path: &Path) -> Result<Vec<CatalogEntry>> {
    let lines = read_lines_latin1(path)?;
    let source = file_name(path);
    let mut entries = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue;
        }

        let mut parts = line_trimmed.split("::");
        let mut next = |name: &str| {
            parts.next().ok_or_else(|| DataLoadError::ParseError {
                file: source.clone(),
                line: line_no,
                reason: format!("Missing {}", name),
            })
        };

        let id = next(ID_COLUMN)?;
        let title = next(TITLE_COLUMN)?;
        let genres = next(GENRES_COLUMN)?;

        entries.push(CatalogEntry::from_raw_genres(
            parse_id(id, &source, line_no)?,
            title,
            genres,
        ));
    }

    Ok(entries)
}

fn parse_id(raw: &str, source: &str, line: usize) -> Result<MovieId> {
    raw.trim().parse().map_err(|e| DataLoadError::ParseError {
        file: source.to_string(),
        line,
        reason: format!("Invalid movieId '{}': {}", raw, e),
    })
}

/// Read a file with ISO-8859-1 encoding (Latin-1)
///
/// The MovieLens 1M dataset uses ISO-8859-1, not UTF-8. Each byte maps
/// directly to the Unicode code point of the same value.
fn read_lines_latin1(path: &Path) -> Result<Vec<String>> {
    let mut file = open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    let content: String = bytes.iter().map(|&b| b as char).collect();

    Ok(content.lines().map(|s| s.to_string()).collect())
}
