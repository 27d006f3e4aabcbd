//! `gab-tidy` — load Gab archive NDJSON files into a tidy SQLite database.
//!
//! # Usage
//!
//! ```
//! gab-tidy gabs.db posts-2021-02.json posts-2021-03.json
//! gab-tidy --log-level debug gabs.db posts.json
//! ```
//!
//! Files are loaded strictly one at a time, in the order given. Running
//! with no input files still creates and initialises the database.

use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gab_tidy_store_sqlite::SqliteStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "gab-tidy",
  about = "Load newline-delimited Gab JSON archives into a tidy SQLite database"
)]
struct Args {
  /// The SQLite database to create or add to.
  database: PathBuf,

  /// Newline-delimited JSON archive files, one gab per line.
  json_files: Vec<PathBuf>,

  /// Minimum severity to log (overridden by RUST_LOG if set).
  #[arg(long, value_enum, default_value = "info")]
  log_level: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
  Warning,
  Info,
  Debug,
}

impl LogLevel {
  fn as_filter(self) -> &'static str {
    match self {
      LogLevel::Warning => "warn",
      LogLevel::Info => "info",
      LogLevel::Debug => "debug",
    }
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.as_filter())),
    )
    .with_writer(std::io::stderr)
    .init();

  info!(
    files = args.json_files.len(),
    database = %args.database.display(),
    "loading JSON files"
  );

  // The schema gate runs here: a fresh database is initialised even when
  // no input files are given; an incompatible one is rejected before any
  // file is touched.
  let store = SqliteStore::open(&args.database).await.with_context(|| {
    format!(
      "opening database {}; {} input file(s) were not processed",
      args.database.display(),
      args.json_files.len()
    )
  })?;

  let mut files_loaded = 0u64;
  let mut total_gabs: i64 = 0;
  let mut total_failures: i64 = 0;

  for path in &args.json_files {
    let label = path
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_else(|| path.display().to_string());

    let file = File::open(path)
      .with_context(|| format!("opening input file {}", path.display()))?;

    let summary = store
      .load_file(&label, BufReader::new(file))
      .await
      .with_context(|| format!("loading {}", path.display()))?;

    println!(
      "{label}: {} gabs added, {} lines skipped",
      summary.gabs_added, summary.parse_failures
    );

    files_loaded += 1;
    total_gabs += summary.gabs_added;
    total_failures += summary.parse_failures;
  }

  println!(
    "Loaded {files_loaded} file(s): {total_gabs} gabs added, \
     {total_failures} lines skipped; database now holds {} gabs",
    store.gab_count().await?
  );

  Ok(())
}
