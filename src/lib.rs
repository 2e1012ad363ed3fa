//! # outpost-scrape
//!
//! Tolerant extraction of character data from the Outpost Daria Reborn fan
//! site. The pages have no stable schema: labeled fields appear as bold
//! inline text, loose text nodes, or plain paragraphs, and gallery sections
//! are delimited only by headings and named anchors.
//!
//! The crate resolves a character's detail page from the listing, recovers
//! labeled fields and description paragraphs through layered fallback
//! strategies, and collects the character's alter-ego images from their
//! section of the gallery page.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use outpost_scrape::{HttpFetcher, Scraper, FetchConfig, SiteConfig};
//!
//! let site = SiteConfig::default();
//! let fetcher = HttpFetcher::new(FetchConfig::default())?;
//! let scraper = Scraper::new(&fetcher, &site);
//!
//! let record = scraper.scrape_character("Daria")?;
//! println!("{} images", record.alter_ego_images.len());
//! # Ok::<(), outpost_scrape::Error>(())
//! ```

mod error;

/// Target-site, transport, and output configuration.
pub mod config;

/// Thin adapter over `dom_query`.
pub mod dom;

/// Charset detection and transcoding for fetched pages.
pub mod encoding;

/// The fetch collaborator and its in-memory test double.
pub mod fetch;

/// Multi-strategy labeled-field and description extraction.
pub mod fields;

/// Section-scoped alter-ego image collection.
pub mod images;

/// Link resolution on listing and detail pages.
pub mod links;

/// Character record and the static field-label table.
pub mod record;

/// The per-character scraping pipeline.
pub mod scraper;

/// JSON and CSV persistence.
pub mod storage;

/// Text extraction and label/value splitting helpers.
pub mod text;

/// Absolute-URL checks and relative resolution.
pub mod url_utils;

// Public API - re-exports
pub use config::{FetchConfig, OutputConfig, SiteConfig};
pub use error::{Error, Result};
pub use fetch::{Fetch, HttpFetcher, StaticFetcher};
pub use record::{CharacterRecord, FieldLabel, ImageReference};
pub use scraper::Scraper;
pub use storage::Storage;
