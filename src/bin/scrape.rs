//! CLI entry point: scrape one or more characters and persist the records.
//!
//! Usage: `scrape [--csv] [NAME]...`
//!
//! Defaults to scraping Daria when no names are given. Log verbosity is
//! controlled through `RUST_LOG`.

use std::env;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use outpost_scrape::{
    CharacterRecord, FetchConfig, HttpFetcher, OutputConfig, Scraper, SiteConfig, Storage,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut write_csv = false;
    let mut names: Vec<String> = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--csv" => write_csv = true,
            "--help" | "-h" => {
                eprintln!("usage: scrape [--csv] [NAME]...");
                return ExitCode::SUCCESS;
            }
            _ => names.push(arg),
        }
    }
    if names.is_empty() {
        names.push("Daria".to_string());
    }

    match run(&names, write_csv) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "scrape failed");
            ExitCode::FAILURE
        }
    }
}

fn run(names: &[String], write_csv: bool) -> outpost_scrape::Result<()> {
    let site = SiteConfig::default();
    let fetcher = HttpFetcher::new(FetchConfig::default())?;
    let storage = Storage::new(&OutputConfig::default())?;
    let scraper = Scraper::new(&fetcher, &site);

    let mut records: Vec<CharacterRecord> = Vec::new();
    for name in names {
        match scraper.scrape_character(name) {
            Ok(record) => {
                storage.save_json(&name.to_lowercase(), &record)?;
                records.push(record);
            }
            // One failed name does not stop the rest of the run.
            Err(err) => error!(name = %name, error = %err, "skipping character"),
        }
    }

    if write_csv && !records.is_empty() {
        storage.save_csv("characters", &records)?;
    }

    info!(scraped = records.len(), requested = names.len(), "done");
    Ok(())
}
