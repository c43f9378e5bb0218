//! Error types for the data-loader crate.
//!
//! Every way the catalog can fail to load is a variant of [`DataLoadError`].
//! Loading happens once at startup, so callers usually treat any of these
//! as fatal and surface the message to the user.

use thiserror::Error;

/// Errors that can occur while loading a movie catalog
///
/// Rust concept: Using an enum for errors lets us handle different cases
/// The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from our `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the file (bad quoting, wrong field count, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column the catalog cannot live without is absent from the header row
    #[error("Missing required column '{column}' in {file}")]
    MissingColumn { column: String, file: String },

    /// Line in data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
///
/// Instead of writing `Result<T, DataLoadError>` everywhere,
/// we can write `Result<T>`
pub type Result<T> = std::result::Result<T, DataLoadError>;
