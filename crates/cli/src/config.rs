use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use recommender::DEFAULT_MIN_BUCKET_SIZE;

use crate::auth::Credentials;

pub const DEFAULT_CATALOG_PATH: &str = "data/movies.csv";
pub const DEFAULT_POSTER_DIR: &str = "posters";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so every value can live
/// there instead of the shell. Command-line flags override what is set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Movie table to load (REEL_CATALOG_PATH)
    pub catalog_path: PathBuf,
    /// Directory with movie1.png .. movie9.png placeholders (REEL_POSTER_DIR)
    pub poster_dir: PathBuf,
    /// Login for the interactive session (REEL_USERNAME / REEL_PASSWORD)
    pub credentials: Credentials,
    /// Bucket size that stops the scan (REEL_MIN_BUCKET)
    pub min_bucket_size: usize,
    /// tracing filter directives (RUST_LOG)
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only a malformed REEL_MIN_BUCKET is an error.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the environment in `load`)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Credentials::default();

        let min_bucket_size = match lookup("REEL_MIN_BUCKET") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("REEL_MIN_BUCKET must be a number, got '{}'", raw))?,
            None => DEFAULT_MIN_BUCKET_SIZE,
        };

        Ok(Self {
            catalog_path: lookup("REEL_CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH)),
            poster_dir: lookup("REEL_POSTER_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_POSTER_DIR)),
            credentials: Credentials::new(
                lookup("REEL_USERNAME").unwrap_or(defaults.username),
                lookup("REEL_PASSWORD").unwrap_or(defaults.password),
            ),
            min_bucket_size,
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.catalog_path, PathBuf::from("data/movies.csv"));
        assert_eq!(config.poster_dir, PathBuf::from("posters"));
        assert_eq!(config.credentials, Credentials::default());
        assert_eq!(config.min_bucket_size, 3);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("REEL_CATALOG_PATH", "/srv/ml-1m/movies.dat"),
            ("REEL_USERNAME", "ana"),
            ("REEL_MIN_BUCKET", " 5 "),
        ])
        .unwrap();

        assert_eq!(config.catalog_path, PathBuf::from("/srv/ml-1m/movies.dat"));
        assert!(config.credentials.verify("ana", "admin"));
        assert_eq!(config.min_bucket_size, 5);
    }

    #[test]
    fn test_dotenv_file_sets_log_filter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "RUST_LOG=debug\nREEL_POSTER_DIR=art\n").unwrap();

        let vars: HashMap<String, String> = dotenvy::from_path_iter(&path)
            .unwrap()
            .map(|item| item.unwrap())
            .collect();
        let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();

        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.poster_dir, PathBuf::from("art"));
    }

    #[test]
    fn test_bad_min_bucket() {
        let err = config_from(&[("REEL_MIN_BUCKET", "three")]).unwrap_err();
        assert!(err.to_string().contains("REEL_MIN_BUCKET"));
    }
}
