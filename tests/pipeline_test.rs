//! End-to-end pipeline tests over an in-memory fetcher.

use outpost_scrape::{Scraper, SiteConfig, StaticFetcher};

const BASE: &str = "https://outpost-daria-reborn.info";

fn url(path: &str) -> String {
    format!("{BASE}/{path}")
}

#[test]
fn scrapes_full_record_for_jane() {
    let mut fetcher = StaticFetcher::new();
    fetcher.insert(
        url("characters.html"),
        r#"<html><body><a href="ch_jane.html">Jane</a></body></html>"#,
    );
    fetcher.insert(
        url("ch_jane.html"),
        r##"
        <html><body>
          <p><b>Full Name:</b> Jane Lane<br><b>Siblings:</b> Erin, Penny</p>
          <p>Jane is Daria's best friend, a laconic artist with a taste for the absurd and a paint-splattered room.</p>
          <a href="art_alter-egos.html#jane">alter egos</a>
        </body></html>
        "##,
    );
    fetcher.insert(
        url("art_alter-egos.html"),
        r#"
        <html><body>
          <a name="jane"></a>
          <p><img src="jane_1.jpg"></p>
          <h2>Next</h2>
          <p><img src="other.jpg"></p>
        </body></html>
        "#,
    );

    let config = SiteConfig::default();
    let scraper = Scraper::new(&fetcher, &config);
    let record = scraper.scrape_character("Jane").unwrap();

    assert_eq!(record.source_url, url("ch_jane.html"));
    assert_eq!(record.full_name, "Jane Lane");
    assert_eq!(record.siblings, "Erin, Penny");
    assert_eq!(record.description.len(), 1);
    assert!(record.description[0].starts_with("Jane is"));

    assert_eq!(record.alter_ego_images.len(), 1);
    assert_eq!(record.alter_ego_images[0].link, url("jane_1.jpg"));
    assert_eq!(record.alter_ego_images[0].width, "");
    assert_eq!(record.alter_ego_images[0].height, "");
}

#[test]
fn alter_egos_without_fragment_collects_whole_page() {
    let mut fetcher = StaticFetcher::new();
    fetcher.insert(
        url("characters.html"),
        r#"<a href="ch_trent.html">Trent</a>"#,
    );
    fetcher.insert(
        url("ch_trent.html"),
        r#"
        <p><b>Full Name:</b> Trent Lane</p>
        <a href="art_alter-egos.html">alter egos</a>
        "#,
    );
    fetcher.insert(
        url("art_alter-egos.html"),
        r#"<img src="a.jpg"><h2>Section</h2><img src="b.jpg">"#,
    );

    let config = SiteConfig::default();
    let scraper = Scraper::new(&fetcher, &config);
    let record = scraper.scrape_character("Trent").unwrap();

    // No fragment means no section scoping at all.
    assert_eq!(record.alter_ego_images.len(), 2);
}

#[test]
fn failed_fragment_lookup_falls_back_to_name_match() {
    let mut fetcher = StaticFetcher::new();
    fetcher.insert(
        url("characters.html"),
        r#"<a href="ch_daria.html">Daria</a>"#,
    );
    fetcher.insert(
        url("ch_daria.html"),
        r##"
        <p><b>Full Name:</b> Daria Morgendorffer</p>
        <a href="art_alter-egos.html#nonexistent">alter egos</a>
        "##,
    );
    fetcher.insert(
        url("art_alter-egos.html"),
        r#"
        <div><img src="daria_1.jpg"></div>
        <div><img src="quinn_1.jpg"></div>
        <div><img src="daria_2.jpg"></div>
        "#,
    );

    let config = SiteConfig::default();
    let scraper = Scraper::new(&fetcher, &config);
    let record = scraper.scrape_character("Daria").unwrap();

    // The key derives from the extracted full name's first word.
    let links: Vec<&str> = record
        .alter_ego_images
        .iter()
        .map(|i| i.link.as_str())
        .collect();
    assert_eq!(links, vec![url("daria_1.jpg"), url("daria_2.jpg")]);
}

#[test]
fn listing_text_fallback_resolves_unconventional_href() {
    let mut fetcher = StaticFetcher::new();
    fetcher.insert(
        url("characters.html"),
        r#"<a href="profiles/upchuck.html">Upchuck</a>"#,
    );
    fetcher.insert(
        url("profiles/upchuck.html"),
        r#"<p>Charles Ruttheimer III, self-styled ladies' man. No labeled fields here at all.</p>"#,
    );

    let config = SiteConfig::default();
    let scraper = Scraper::new(&fetcher, &config);
    let record = scraper.scrape_character("Upchuck").unwrap();

    assert_eq!(record.source_url, url("profiles/upchuck.html"));
    assert_eq!(record.full_name, "");
    assert!(record.alter_ego_images.is_empty());
    assert_eq!(record.description.len(), 1);
}
