//! Error types for outpost-scrape.
//!
//! Extraction itself never fails: absent links, sections, and fields degrade
//! to empty values. Errors are reserved for the transport, persistence, and
//! the entity-level "no page for this name" case.

/// Error type for scraping operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The listing page had no link for the requested character.
    #[error("no character page found for {0:?}")]
    CharacterNotFound(String),

    /// A page could not be fetched after exhausting retries.
    #[error("failed to fetch {url} after {attempts} attempts")]
    Fetch { url: String, attempts: u32 },

    /// HTTP client construction or transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem error while persisting records.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, Error>;
