//! Configuration for the target site, the HTTP transport, and output files.
//!
//! The extraction core treats these as opaque inputs: the base URL, the
//! href-pattern conventions used to recognize character and alter-egos
//! links, and the description length threshold. `Default` carries the
//! values for Outpost Daria Reborn.

use url::Url;

const DEFAULT_BASE_URL: &str = "https://outpost-daria-reborn.info/";

/// Site-specific settings consumed by the extraction core.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base URL every relative reference is resolved against.
    pub base_url: Url,

    /// Absolute URL of the character listing page.
    pub characters_url: Url,

    /// Prefix of character detail hrefs, e.g. `ch_` in `ch_daria.html`.
    pub character_link_prefix: String,

    /// Fixed marker identifying the alter-egos page href.
    pub alter_egos_marker: String,

    /// Minimum trimmed length for a paragraph to count as description text.
    pub min_description_len: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        #[allow(clippy::expect_used)]
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL parses");
        #[allow(clippy::expect_used)]
        let characters_url = base_url.join("characters.html").expect("valid listing path");
        Self {
            base_url,
            characters_url,
            character_link_prefix: "ch_".to_string(),
            alter_egos_marker: "art_alter-egos.html".to_string(),
            min_description_len: 50,
        }
    }
}

impl SiteConfig {
    /// Derive the href slug for a character name: lower-cased, spaces
    /// removed, wrapped in the listing's `ch_<name>.html` convention.
    #[must_use]
    pub fn character_slug(&self, name: &str) -> String {
        let compact: String = name
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        format!("{}{compact}.html", self.character_link_prefix)
    }
}

/// Settings for the blocking HTTP transport.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User-Agent header sent with every request.
    pub user_agent: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Number of retries after a failed request.
    pub retries: u32,

    /// Delay before each retry, in seconds.
    pub retry_delay_secs: u64,

    /// Politeness delay after each successful request, in seconds.
    pub request_delay_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 ",
                "(KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
            )
            .to_string(),
            timeout_secs: 30,
            retries: 3,
            retry_delay_secs: 5,
            request_delay_secs: 1,
        }
    }
}

/// Settings for record persistence.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Directory output files are written into; created if missing.
    pub data_dir: String,

    /// Prefix for generated filenames.
    pub filename_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            filename_prefix: "outpost_scrape".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_site_config_resolves_listing_url() {
        let cfg = SiteConfig::default();
        assert_eq!(
            cfg.characters_url.as_str(),
            "https://outpost-daria-reborn.info/characters.html"
        );
    }

    #[test]
    fn character_slug_lowercases_and_strips_spaces() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.character_slug("Daria"), "ch_daria.html");
        assert_eq!(cfg.character_slug("Mr. O'Neill"), "ch_mr.o'neill.html");
        assert_eq!(cfg.character_slug("Jane Lane"), "ch_janelane.html");
    }
}
