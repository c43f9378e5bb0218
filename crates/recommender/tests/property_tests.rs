//! Property-based tests for ranking invariants.
//!
//! Catalogs are generated from a small pool of genres and title words so that
//! similarity ties, shared genres and duplicate titles all show up often.

use data_loader::{Catalog, CatalogEntry};
use proptest::prelude::*;
use recommender::{Recommender, recommend};

const GENRES: &[&str] = &["Action", "Comedy", "Drama", "Horror", "Romance", "Sci-Fi"];
const WORDS: &[&str] = &["Heat", "Night", "Love", "Star", "Dead", "Old", "Men", "II"];

/// One catalog row: (title, pipe-separated genres)
fn movie_row() -> impl Strategy<Value = (String, String)> {
    let title = prop::collection::vec(prop::sample::select(WORDS), 1..4)
        .prop_map(|words| words.join(" "));
    let genres = prop::collection::vec(prop::sample::select(GENRES), 0..3)
        .prop_map(|genres| genres.join("|"));
    (title, genres)
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(movie_row(), 1..24).prop_map(|rows| {
        Catalog::from_entries(
            rows.into_iter()
                .enumerate()
                .map(|(i, (title, genres))| {
                    CatalogEntry::from_raw_genres(i as u32 + 1, title, &genres)
                })
                .collect(),
        )
    })
}

proptest! {
    /// The queried row never shows up in either bucket
    #[test]
    fn query_is_never_recommended(catalog in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        let row = pick.index(catalog.len());
        let title = catalog.get(row).unwrap().title.clone();
        let query_row = catalog.position(&title).unwrap();

        let result = recommend(&catalog, &title).unwrap();

        prop_assert!(result.same_genre.iter().all(|s| s.row != query_row));
        prop_assert!(result.other_genre.iter().all(|s| s.row != query_row));
    }

    /// Similarity does not depend on argument order
    #[test]
    fn similarity_is_symmetric(catalog in catalog_strategy()) {
        let matrix = Recommender::new(&catalog).similarity_matrix();

        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                prop_assert_eq!(matrix.get(i, j), matrix.get(j, i));
                let score = matrix.get(i, j).unwrap();
                prop_assert!((0.0..=1.0 + 1e-9).contains(&score));
            }
        }
    }

    /// Both buckets come out ordered by non-increasing score
    #[test]
    fn buckets_are_sorted(catalog in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        let title = catalog.get(pick.index(catalog.len())).unwrap().title.clone();

        let result = recommend(&catalog, &title).unwrap();

        for bucket in [&result.same_genre, &result.other_genre] {
            prop_assert!(bucket.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    /// The scan stops as soon as both buckets are full, and only then
    #[test]
    fn scan_stops_at_minimum(
        catalog in catalog_strategy(),
        pick in any::<prop::sample::Index>(),
        min in 1usize..5,
    ) {
        let title = catalog.get(pick.index(catalog.len())).unwrap().title.clone();

        let result = Recommender::new(&catalog)
            .with_min_bucket_size(min)
            .recommend(&title)
            .unwrap();

        let both_full = result.same_genre.len() >= min && result.other_genre.len() >= min;
        if both_full {
            // The last scanned candidate is the one that filled a bucket
            prop_assert!(result.same_genre.len() == min || result.other_genre.len() == min);
        } else {
            // Otherwise the whole catalog was scanned
            prop_assert_eq!(result.len(), catalog.len() - 1);
        }
    }
}
