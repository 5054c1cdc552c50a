use serde::{Deserialize, Serialize};

/// One extracted job posting from the Indeed results page.
///
/// Constructed once per extraction pass and immutable afterwards;
/// lives only for the duration of a single request/response cycle.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Listing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    /// Fetch date (`YYYY-MM-DD`), not the posting's own date. The source
    /// markup's relative-date text ("3 days ago") is never parsed.
    pub date_posted: String,
    /// `None` when the listing does not advertise a salary.
    pub salary_range: Option<String>,
    /// Fixed to "Entry Level" because the search query is restricted to
    /// entry-level postings.
    pub experience_level: String,
}
