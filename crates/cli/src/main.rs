mod auth;
mod config;
mod display;
mod posters;
mod session;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::Catalog;
use rand::Rng;
use recommender::{recommend, Recommender};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

use config::Config;
use posters::PosterLibrary;

/// ReelRecs - Content-based movie recommendations
#[derive(Parser)]
#[command(name = "reel-recs")]
#[command(about = "Movie recommendations by genre and title similarity", long_about = None)]
struct Cli {
    /// Path to the movie table (movies.csv or movies.dat); overrides REEL_CATALOG_PATH
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Directory with placeholder posters; overrides REEL_POSTER_DIR
    #[arg(short, long)]
    posters: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to a title
    Recommend {
        /// Exact movie title, e.g. "Toy Story (1995)"
        #[arg(long)]
        title: String,

        /// Stop once both buckets hold this many movies
        #[arg(long)]
        min_bucket: Option<usize>,

        /// Print the result as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Log in and ask for recommendations interactively
    Interactive,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Vectorize the catalog once instead of on every request
        #[arg(long)]
        cached: bool,
    },
}

fn main() -> Result<()> {
    // Load .env before anything reads the environment, RUST_LOG included.
    // A missing file is fine; the environment and defaults still apply.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    if let Some(path) = cli.catalog {
        config.catalog_path = path;
    }
    if let Some(dir) = cli.posters {
        config.poster_dir = dir;
    }

    // Load the catalog once; every command works on it
    let start = Instant::now();
    let catalog = Catalog::load_from_file(&config.catalog_path).with_context(|| {
        format!(
            "Failed to load movie catalog from {}",
            config.catalog_path.display()
        )
    })?;
    info!("Loaded catalog in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            title,
            min_bucket,
            json,
        } => handle_recommend(&catalog, &config, &title, min_bucket, json)?,
        Commands::Search { title } => handle_search(&catalog, &title),
        Commands::Interactive => handle_interactive(&catalog, &config)?,
        Commands::Benchmark { requests, cached } => {
            handle_benchmark(&catalog, &config, requests, cached)?
        }
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: &Catalog,
    config: &Config,
    title: &str,
    min_bucket: Option<usize>,
    json: bool,
) -> Result<()> {
    let recommender = Recommender::new(catalog)
        .with_min_bucket_size(min_bucket.unwrap_or(config.min_bucket_size));

    let result = recommender.recommend(title)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let posters = PosterLibrary::new(&config.poster_dir);
        print!("{}", display::render_result(&result, Some(&posters)));
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, title: &str) {
    let hits = catalog.search(title);
    print!("{}", display::render_search(title, &hits, 20));
}

/// Handle the 'interactive' command
fn handle_interactive(catalog: &Catalog, config: &Config) -> Result<()> {
    let recommender =
        Recommender::new(catalog).with_min_bucket_size(config.min_bucket_size);
    let posters = PosterLibrary::new(&config.poster_dir);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    session::run(
        &mut input,
        &mut output,
        &recommender,
        Some(&posters),
        &config.credentials,
    )
}

/// Handle the 'benchmark' command
fn handle_benchmark(catalog: &Catalog, config: &Config, requests: usize, cached: bool) -> Result<()> {
    if catalog.is_empty() {
        bail!("Cannot benchmark an empty catalog");
    }
    if requests == 0 {
        bail!("--requests must be at least 1");
    }

    let recommender = cached.then(|| {
        Recommender::new(catalog).with_min_bucket_size(config.min_bucket_size)
    });

    // Pick random titles from the catalog
    let mut rng = rand::rng();
    let titles: Vec<&str> = (0..requests)
        .map(|_| {
            let row = rng.random_range(0..catalog.len());
            catalog.entries()[row].title.as_str()
        })
        .collect();

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for title in titles {
        let start = Instant::now();
        match &recommender {
            Some(recommender) => recommender.recommend(title)?,
            None => recommend(catalog, title)?,
        };
        timings.push(start.elapsed());
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / timings.len() as u32;
    timings.sort();
    let percentile = |p: f64| {
        let idx = ((timings.len() as f64 * p) as usize).min(timings.len() - 1);
        timings[idx]
    };
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Mode: {}", if cached { "cached vectors" } else { "recompute per request" });
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}
