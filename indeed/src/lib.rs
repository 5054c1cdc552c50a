//! Indeed search-page scraper.
//!
//! Fetches the first results page for a search term and extracts up to
//! ten job listings from it. One outbound request per search, no retries,
//! no caching, no pagination.

pub mod error;
pub mod extract;
pub mod fetch;

use async_trait::async_trait;
use chrono::Local;
use common::Listing;

pub use error::{ExtractError, FetchError};

/// A source of job listings for a free-text search term.
///
/// `Ok(vec![])` means the search ran but nothing was extracted; `Err`
/// means the fetch itself failed. The HTTP surface collapses both into
/// "no jobs found", but callers of this trait can tell them apart.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn search(&self, term: &str) -> anyhow::Result<Vec<Listing>>;
}

/// Scrapes listings from the live Indeed search page.
#[derive(Clone, Default)]
pub struct IndeedClient {
    http: reqwest::Client,
}

impl IndeedClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobSource for IndeedClient {
    async fn search(&self, term: &str) -> anyhow::Result<Vec<Listing>> {
        let body = fetch::fetch(&self.http, term).await?;

        // date_posted is stamped with the fetch date; the page's own
        // relative-date text ("3 days ago") is not parsed.
        let today = Local::now().format("%Y-%m-%d").to_string();
        Ok(extract::listings(&body, &today))
    }
}
