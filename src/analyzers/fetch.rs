//! Reference list fetching over HTTP.
//!
//! Each URL is fetched independently with a bounded timeout. A failing
//! URL contributes nothing; it never fails the whole lookup.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

use super::known::KnownRuleSet;

/// Per-request timeout for reference lists.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches reference lists of analyzer rule IDs.
pub struct RuleListFetcher {
    client: Client,
    timeout: Duration,
}

impl RuleListFetcher {
    /// Create a fetcher with the default 10-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("editorconfig-validate/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch the body of a single reference list.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        response
            .text()
            .with_context(|| format!("Failed to read response from {}", url))
    }

    /// Fetch every URL and gather the rule IDs they mention.
    ///
    /// Blank entries are ignored. Failures are logged and skipped.
    pub fn fetch_all<S: AsRef<str>>(&self, urls: &[S]) -> KnownRuleSet {
        let mut known = KnownRuleSet::new();

        for url in urls.iter().map(|u| u.as_ref().trim()) {
            if url.is_empty() {
                continue;
            }
            match self.fetch(url) {
                Ok(body) => {
                    let added = known.extend_from_text(&body);
                    tracing::debug!("Loaded {} rule IDs from {}", added, url);
                }
                Err(e) => {
                    tracing::debug!("Skipping reference list {}: {:#}", url, e);
                }
            }
        }

        known
    }
}

/// Fetch known rule IDs from `urls` with the default timeout.
///
/// Returns an empty set when the list is empty, when every fetch fails,
/// or when no HTTP client can be constructed.
pub fn fetch_known_rules<S: AsRef<str>>(urls: &[S]) -> KnownRuleSet {
    if urls.iter().all(|u| u.as_ref().trim().is_empty()) {
        return KnownRuleSet::new();
    }

    match RuleListFetcher::new() {
        Ok(fetcher) => fetcher.fetch_all(urls),
        Err(e) => {
            tracing::warn!("Cannot fetch reference lists: {:#}", e);
            KnownRuleSet::new()
        }
    }
}
