//! Outbound fetch of the Indeed search results page.

use crate::error::FetchError;

/// Origin prepended to the relative detail links found on the page.
pub const ORIGIN: &str = "https://www.indeed.com";

/// Indeed serves a captcha page to clients that identify as bots, so the
/// request impersonates a common desktop browser.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Builds the search URL for a term, with the fixed qualifier steering
/// results toward entry-level postings. The caller URL-encodes the term.
pub fn search_url(term: &str) -> String {
    format!("{ORIGIN}/jobs?q={term}+entry+level&l=")
}

/// Issues one GET against the search page and returns the raw body text.
///
/// The response status is deliberately not checked before reading the
/// body: an error or block page simply yields zero containers downstream.
/// No timeout is configured and no retry is attempted.
pub(crate) async fn fetch(http: &reqwest::Client, term: &str) -> Result<String, FetchError> {
    let url = search_url(term);
    tracing::debug!(%url, "fetching search results");

    let response = http
        .get(&url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        tracing::warn!(status = %response.status(), %url, "non-success status from search page");
    }

    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_substitutes_term_and_appends_qualifier() {
        assert_eq!(
            search_url("developer"),
            "https://www.indeed.com/jobs?q=developer+entry+level&l="
        );
    }

    #[test]
    fn search_url_passes_pre_encoded_terms_through() {
        // Encoding is the caller's job; the template must not touch it.
        assert_eq!(
            search_url("data%20analyst"),
            "https://www.indeed.com/jobs?q=data%20analyst+entry+level&l="
        );
    }
}
