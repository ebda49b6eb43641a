// src/core/net.rs
// One GET per ceremony year, routed through the configured forward proxy.

use reqwest::blocking::Client;
use reqwest::Proxy;
use tracing::debug;

use crate::config::consts::{CEREMONY_URL, USER_AGENT};
use crate::config::options::ScrapeOptions;
use crate::config::proxy::ProxyConfig;
use crate::core::html::page_title;
use crate::error::{ConfigError, FetchCause, FetchError};

/// Raw markup for one ceremony year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedPage {
    pub year: u16,
    pub url: String,
    pub html: String,
}

/// Anything that can produce a ceremony page. The runner only talks to this,
/// so tests can swap in canned pages.
pub trait Fetch {
    fn fetch(&mut self, year: u16) -> Result<FetchedPage, FetchError>;
}

pub fn ceremony_url(year: u16) -> String {
    CEREMONY_URL.replace("{year}", &year.to_string())
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(proxy: &ProxyConfig, scrape: &ScrapeOptions) -> Result<Self, ConfigError> {
        let proxy = Proxy::all(proxy.url())
            .map_err(ConfigError::Client)?
            .basic_auth(&proxy.username, &proxy.password);

        let client = Client::builder()
            .proxy(proxy)
            .user_agent(USER_AGENT)
            .timeout(scrape.timeout())
            .build()
            .map_err(ConfigError::Client)?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&mut self, year: u16) -> Result<FetchedPage, FetchError> {
        let url = ceremony_url(year);
        debug!(year, %url, "GET");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FetchError::new(year, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::new(year, FetchCause::Status(status.as_u16())));
        }

        let html = resp.text().map_err(|e| FetchError::new(year, e))?;
        if let Some(reason) = soft_error(&html) {
            return Err(FetchError::new(year, FetchCause::ErrorPage(reason)));
        }

        debug!(year, bytes = html.len(), "fetched");
        Ok(FetchedPage { year, url, html })
    }
}

/// Some error pages come back as 200 with an error title.
pub fn soft_error(html: &str) -> Option<String> {
    let title = page_title(html)?;
    let lc = title.to_lowercase();
    let hit = ["404", "not found", "403", "forbidden"]
        .iter()
        .any(|needle| lc.contains(needle));
    hit.then_some(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_year_indexed() {
        assert_eq!(ceremony_url(1938), "https://www.oscars.org/oscars/ceremonies/1938");
    }

    #[test]
    fn soft_error_detects_error_titles() {
        assert_eq!(
            soft_error("<title>Page Not Found | Oscars.org</title>").as_deref(),
            Some("Page Not Found | Oscars.org")
        );
        assert!(soft_error("<title>403 Forbidden</title>").is_some());
        assert!(soft_error("<title>The 10th Academy Awards | 1938</title>").is_none());
        assert!(soft_error("<p>untitled</p>").is_none());
    }
}
