//! Terminal rendering of recommendation results.
//!
//! Layout: a "Main Movie" header, then each bucket as a grid of cards,
//! four cards per row. A card shows the title, the similarity score and,
//! when one was found, the placeholder poster path.

use colored::Colorize;
use data_loader::CatalogEntry;
use recommender::{RecommendationResult, ScoredEntry};

use crate::posters::PosterLibrary;

/// Cards per grid row
pub const GRID_COLUMNS: usize = 4;

/// Width of one card in characters
const CARD_WIDTH: usize = 30;

/// Render both buckets of a result
pub fn render_result(result: &RecommendationResult, posters: Option<&PosterLibrary>) -> String {
    let mut out = String::new();

    out.push_str(&format!("Main Movie: {}", result.query.title).bold().to_string());
    out.push('\n');
    out.push('\n');

    out.push_str(&"Movies with Similar Genre:".bold().blue().to_string());
    out.push('\n');
    out.push_str(&render_grid(&result.same_genre, posters));

    out.push('\n');
    out.push_str(&"Movies with Other Genres:".bold().blue().to_string());
    out.push('\n');
    out.push_str(&render_grid(&result.other_genre, posters));

    out
}

/// Render a bucket as rows of [`GRID_COLUMNS`] cards
pub fn render_grid(movies: &[ScoredEntry], posters: Option<&PosterLibrary>) -> String {
    if movies.is_empty() {
        return format!("  {}\n", "(none)".dimmed());
    }

    let mut out = String::new();
    for row in movies.chunks(GRID_COLUMNS) {
        let titles: Vec<String> = row.iter().map(|m| fit(&m.entry.title)).collect();
        let scores: Vec<String> = row
            .iter()
            .map(|m| fit(&format!("score {:.3}", m.score)))
            .collect();

        out.push_str(&join_cards(&titles).bold().to_string());
        out.push('\n');
        out.push_str(&join_cards(&scores).green().to_string());
        out.push('\n');

        if let Some(library) = posters {
            let paths: Vec<String> = row
                .iter()
                .map(|m| match library.pick(&m.entry.title) {
                    Some(path) => fit(&path.display().to_string()),
                    None => fit("[no poster]"),
                })
                .collect();
            out.push_str(&join_cards(&paths).dimmed().to_string());
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// One line per search hit: id, title, genres
pub fn render_search(fragment: &str, hits: &[&CatalogEntry], limit: usize) -> String {
    let mut out = format!("Search results for '{}':", fragment)
        .bold()
        .blue()
        .to_string();
    out.push('\n');

    for entry in hits.iter().take(limit) {
        out.push_str(&format!(
            "{}: {} [{}]\n",
            entry.id.to_string().green(),
            entry.title,
            entry.genres.join(", ")
        ));
    }
    if hits.len() > limit {
        out.push_str(&format!("... and {} more\n", hits.len() - limit));
    }
    out
}

fn join_cards(cells: &[String]) -> String {
    format!("  {}", cells.join("  ")).trim_end().to_string()
}

/// Pad or truncate to exactly CARD_WIDTH characters
fn fit(text: &str) -> String {
    let len = text.chars().count();
    if len <= CARD_WIDTH {
        format!("{:<width$}", text, width = CARD_WIDTH)
    } else {
        let cut: String = text.chars().take(CARD_WIDTH - 1).collect();
        format!("{}…", cut)
    }
}
