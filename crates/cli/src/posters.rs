//! Placeholder posters for recommended movies.
//!
//! There is no real poster source: each card gets a random `movieN.png`
//! (N in 1..=9) from the poster directory. A missing file only costs the
//! card its poster; it never fails a query.

use rand::Rng;
use std::path::PathBuf;
use tracing::warn;

/// Number of placeholder images, named movie1.png .. movie9.png
pub const POSTER_VARIANTS: u32 = 9;

#[derive(Debug, Clone)]
pub struct PosterLibrary {
    dir: PathBuf,
}

impl PosterLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Pick a random placeholder for `title` using the thread-local RNG
    pub fn pick(&self, title: &str) -> Option<PathBuf> {
        self.pick_with(&mut rand::rng(), title)
    }

    /// Pick a placeholder with the given RNG.
    ///
    /// Returns `None` (and logs a warning) when the picked file is missing.
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R, title: &str) -> Option<PathBuf> {
        let n = rng.random_range(1..=POSTER_VARIANTS);
        let path = self.dir.join(format!("movie{}.png", n));

        if path.is_file() {
            Some(path)
        } else {
            warn!("Error fetching poster for {}: {} not found", title, path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    #[test]
    fn test_pick_existing_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        for n in 1..=POSTER_VARIANTS {
            fs::write(dir.path().join(format!("movie{}.png", n)), b"png").unwrap();
        }
        let library = PosterLibrary::new(dir.path());
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let path = library.pick_with(&mut rng, "Heat (1995)").unwrap();
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            let n: u32 = name
                .trim_start_matches("movie")
                .trim_end_matches(".png")
                .parse()
                .unwrap();
            assert!((1..=POSTER_VARIANTS).contains(&n));
            assert_eq!(path.parent().unwrap(), dir.path());
        }
    }

    #[test]
    fn test_missing_directory_is_not_fatal() {
        let library = PosterLibrary::new("no/such/poster/dir");

        assert!(library.pick("Heat (1995)").is_none());
    }

    #[test]
    fn test_partial_poster_set() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("movie1.png"), b"png").unwrap();
        let library = PosterLibrary::new(dir.path());
        let mut rng = StdRng::seed_from_u64(42);

        let picks: Vec<Option<PathBuf>> =
            (0..100).map(|_| library.pick_with(&mut rng, "Heat")).collect();

        assert!(picks.iter().any(Option::is_none));
        assert!(picks.iter().flatten().all(|p| p.ends_with("movie1.png")));
    }
}
