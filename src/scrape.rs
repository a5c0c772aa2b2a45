// src/scrape.rs
use scraper::Html;
use tracing::{ info, warn };

use crate::{
    config::consts::HOST,
    core::net::Fetch,
    data::ProfileRecord,
    error::{ Result, ScrapeError },
    report::Report,
    specs,
};

/// A token that mentions the profile host is taken as the URL, trimmed but otherwise unchanged.
/// Anything else would need a username search, which is not implemented.
pub fn resolve_locator(input: &str) -> Option<String> {
    let input = input.trim();
    if input.contains(HOST) {
        Some(input.to_string())
    } else {
        warn!("Searching for profile is not implemented. Please provide a full Steam profile URL.");
        None
    }
}

/// input → URL → GET → parse → record.
/// Locator and transport failures end the run here; field problems go to `report`.
pub fn scrape_profile(
    input: &str,
    fetcher: &dyn Fetch,
    report: &mut dyn Report,
) -> Result<ProfileRecord> {
    let url = resolve_locator(input).ok_or(ScrapeError::ProfileNotFound)?;

    let page = fetcher.fetch(&url)?;
    if !page.is_ok() {
        return Err(ScrapeError::Status(page.status));
    }

    info!(url = %url, bytes = page.body.len(), "profile page fetched");
    Ok(parse_profile(&page.body, report))
}

pub fn parse_profile(markup: &str, report: &mut dyn Report) -> ProfileRecord {
    let doc = Html::parse_document(markup);
    specs::extract_profile(&doc, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_returned_unchanged() {
        for input in [
            "https://steamcommunity.com/id/gabelogannewell",
            "steamcommunity.com/profiles/76561197960287930/",
            "http://STEAM.example/?r=steamcommunity.com",
        ] {
            assert_eq!(resolve_locator(input).as_deref(), Some(input));
        }
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            resolve_locator("  https://steamcommunity.com/id/x \n").as_deref(),
            Some("https://steamcommunity.com/id/x"),
        );
    }

    #[test]
    fn bare_username_is_not_found() {
        assert_eq!(resolve_locator("gabelogannewell"), None);
        assert_eq!(resolve_locator(""), None);
        assert_eq!(resolve_locator("https://store.steampowered.com/app/220"), None);
    }
}
