//! Interactive session: log in, then ask for titles until the user quits.
//!
//! Input and output are generic so the whole flow can be driven from tests
//! with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use recommender::{RecommendError, Recommender};
use tracing::{debug, info};

use crate::auth::Credentials;
use crate::display;
use crate::posters::PosterLibrary;

/// Print a prompt and read one line; `None` on end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Ask for credentials until they match.
///
/// Returns `false` if input ends before a successful login.
pub fn login<R: BufRead, W: Write>(input: &mut R, output: &mut W, credentials: &Credentials) -> Result<bool> {
    loop {
        let Some(username) = prompt(input, output, "Username: ")? else {
            return Ok(false);
        };
        let Some(password) = prompt(input, output, "Password: ")? else {
            return Ok(false);
        };

        if credentials.verify(&username, &password) {
            info!(username = %username, "Login succeeded");
            writeln!(output, "{}", "Welcome!".green())?;
            return Ok(true);
        }

        debug!(username = %username, "Login rejected");
        writeln!(output, "{}", "Invalid credentials. Please try again.".red())?;
    }
}

/// Log in, then answer title queries until an empty line or end of input
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    recommender: &Recommender<'_>,
    posters: Option<&PosterLibrary>,
    credentials: &Credentials,
) -> Result<()> {
    if !login(input, output, credentials)? {
        writeln!(output)?;
        return Ok(());
    }
    info!(
        movies = recommender.catalog().len(),
        vocabulary = recommender.vocabulary_size(),
        min_bucket = recommender.min_bucket_size(),
        "Ready for queries"
    );

    loop {
        // Titles match exactly as typed; only the line ending is dropped
        let Some(title) = prompt(input, output, "Enter Movie Title: ")? else {
            break;
        };
        if title.is_empty() {
            break;
        }

        match recommender.recommend(&title) {
            Ok(result) => {
                writeln!(output, "{}", display::render_result(&result, posters))?;
            }
            Err(RecommendError::MovieNotFound { .. }) => {
                writeln!(output, "{}", "Movie not found!".red())?;
            }
        }
    }

    Ok(())
}
