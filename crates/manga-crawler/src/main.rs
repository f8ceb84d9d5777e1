//! Manga crawler CLI application.

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Parser;
use manga_crawler::api::{resolve_api_key, CrawlOptions, FirecrawlClient};
use manga_crawler::{extract_record, output};
use shared::{Config, DataPaths};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Manga page URL to crawl
    url: String,

    /// Firecrawl API key (falls back to FIRECRAWL_API_KEY, then config)
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Output file path (default: generated from title and timestamp)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Remote page-load wait time in milliseconds
    #[arg(short, long)]
    wait: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Initialize logging
    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    shared::logging::init(shared::LogConfig {
        log_dir: config.log_dir().to_string_lossy().to_string(),
        component: "manga-crawler".to_string(),
        default_level: log_level,
        console: config.logging.console,
        file: config.logging.file,
        json_format: config.logging.json_format,
    })?;

    info!("Manga crawler starting");
    info!(config_file = %args.config.display(), "Loaded configuration");

    // Initialize data paths
    let data_paths = DataPaths::new(config.data_dir());
    data_paths
        .create_dirs()
        .context("Failed to create data directories")?;

    // Resolve credentials before touching the network
    let api_key = resolve_api_key(
        args.api_key,
        std::env::var("FIRECRAWL_API_KEY").ok(),
        &config.crawler.api_key,
    );
    let Some(api_key) = api_key else {
        bail!("no API key provided; use --api-key or set FIRECRAWL_API_KEY");
    };

    // Initialize API client
    let client = FirecrawlClient::new(
        config.crawler.base_url.clone(),
        api_key,
        Duration::from_secs(config.crawler.timeout_seconds),
    )
    .context("Failed to create crawl client")?;

    let options = CrawlOptions {
        wait_ms: args.wait.unwrap_or(config.crawler.wait_ms),
        javascript: config.crawler.javascript,
        format: config.crawler.format.clone(),
    };

    // Crawl
    info!(url = %args.url, "Crawling page");
    let markdown = client
        .crawl(&args.url, &options)
        .context("Crawl failed, no data to extract")?;

    // Extract
    info!(bytes = markdown.len(), "Crawl succeeded, extracting fields");
    let record = extract_record(&markdown);

    if record.is_empty() {
        warn!("No field patterns matched the crawled text");
    }

    info!("=== Extracted Record ===");
    info!("Title: {}", record.title);
    info!("Author: {}", record.author);
    info!("Tags: {}", record.tags.join(", "));
    info!("Chapters: {}", record.chapters.len());
    if !record.cover_url.is_empty() {
        info!("Cover: {}", record.cover_url);
    }

    // Persist
    let output_path = match args.output {
        Some(path) => path,
        None => {
            let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
            data_paths.record_file(&record.title, &timestamp)
        }
    };

    output::save_record(&record, &output_path)
        .with_context(|| format!("Failed to save record to {}", output_path.display()))?;

    info!(path = %output_path.display(), "Manga crawler finished successfully");

    Ok(())
}
