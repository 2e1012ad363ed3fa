//! The per-character pipeline: listing → detail → alter-egos.
//!
//! Strictly sequential; each fetch gates the next. Missing listing or
//! detail pages are entity-level failures (no record at all); everything
//! deeper degrades to a partial record.

use tracing::{info, warn};

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::fetch::Fetch;
use crate::record::CharacterRecord;
use crate::{fields, images, links};

/// Scrapes one character record at a time against a fixed site
/// configuration. No state is shared across names.
pub struct Scraper<'a> {
    fetcher: &'a dyn Fetch,
    config: &'a SiteConfig,
}

impl<'a> Scraper<'a> {
    #[must_use]
    pub fn new(fetcher: &'a dyn Fetch, config: &'a SiteConfig) -> Self {
        Self { fetcher, config }
    }

    /// Build a complete record for one character name.
    ///
    /// Errors only when the listing page cannot be fetched, no detail link
    /// matches the name, or the detail page cannot be fetched. A missing
    /// alter-egos link or page yields a record with an empty image list.
    pub fn scrape_character(&self, name: &str) -> Result<CharacterRecord> {
        info!(name, "looking up character page");
        let listing = self.fetcher.fetch(self.config.characters_url.as_str())?;

        let detail_url = links::find_character_link(&listing, self.config, name)
            .ok_or_else(|| Error::CharacterNotFound(name.to_string()))?;
        info!(name, url = %detail_url, "found character page");

        let detail = self.fetcher.fetch(detail_url.as_str())?;

        let mut record = CharacterRecord::new(detail_url.as_str());
        fields::extract_fields(&detail, &mut record);
        record.description = fields::extract_description(&detail, self.config.min_description_len);

        let Some(alter_egos) = links::find_alter_egos_link(&detail, self.config) else {
            warn!(name, "no alter-egos link on character page");
            return Ok(record);
        };

        let page = match self.fetcher.fetch(alter_egos.url.as_str()) {
            Ok(page) => page,
            Err(err) => {
                warn!(name, error = %err, "alter-egos page unavailable");
                return Ok(record);
            }
        };

        let key = record.character_key(name);
        record.alter_ego_images = images::collect_images(
            &page,
            alter_egos.fragment.as_deref(),
            &key,
            &self.config.base_url,
        );
        info!(name, count = record.alter_ego_images.len(), "collected alter-ego images");

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticFetcher;

    const LISTING_URL: &str = "https://outpost-daria-reborn.info/characters.html";

    fn fetcher_with_listing(listing_html: &str) -> StaticFetcher {
        let mut fetcher = StaticFetcher::new();
        fetcher.insert(LISTING_URL, listing_html);
        fetcher
    }

    #[test]
    fn missing_listing_page_is_fatal() {
        let fetcher = StaticFetcher::new();
        let config = SiteConfig::default();
        let scraper = Scraper::new(&fetcher, &config);

        assert!(matches!(
            scraper.scrape_character("Daria"),
            Err(Error::Fetch { .. })
        ));
    }

    #[test]
    fn unknown_name_is_entity_level_failure() {
        let fetcher = fetcher_with_listing(r#"<a href="ch_quinn.html">Quinn</a>"#);
        let config = SiteConfig::default();
        let scraper = Scraper::new(&fetcher, &config);

        assert!(matches!(
            scraper.scrape_character("Daria"),
            Err(Error::CharacterNotFound(_))
        ));
    }

    #[test]
    fn missing_detail_page_is_fatal() {
        // The listing links to a page the fetcher does not know.
        let fetcher = fetcher_with_listing(r#"<a href="ch_daria.html">Daria</a>"#);
        let config = SiteConfig::default();
        let scraper = Scraper::new(&fetcher, &config);

        assert!(matches!(
            scraper.scrape_character("Daria"),
            Err(Error::Fetch { .. })
        ));
    }

    #[test]
    fn record_without_alter_egos_link_has_no_images() {
        let mut fetcher = fetcher_with_listing(r#"<a href="ch_daria.html">Daria</a>"#);
        fetcher.insert(
            "https://outpost-daria-reborn.info/ch_daria.html",
            r#"<p><b>Full Name:</b> Daria Morgendorffer</p>"#,
        );
        let config = SiteConfig::default();
        let scraper = Scraper::new(&fetcher, &config);

        let record = scraper.scrape_character("Daria").unwrap();
        assert_eq!(record.full_name, "Daria Morgendorffer");
        assert!(record.alter_ego_images.is_empty());
    }

    #[test]
    fn unavailable_alter_egos_page_degrades_to_partial_record() {
        let mut fetcher = fetcher_with_listing(r#"<a href="ch_daria.html">Daria</a>"#);
        fetcher.insert(
            "https://outpost-daria-reborn.info/ch_daria.html",
            r##"
            <p><b>Full Name:</b> Daria Morgendorffer</p>
            <a href="art_alter-egos.html#daria">alter egos</a>
            "##,
        );
        let config = SiteConfig::default();
        let scraper = Scraper::new(&fetcher, &config);

        let record = scraper.scrape_character("Daria").unwrap();
        assert_eq!(record.full_name, "Daria Morgendorffer");
        assert!(record.alter_ego_images.is_empty());
    }
}
