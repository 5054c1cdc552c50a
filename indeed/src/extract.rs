//! Extraction of job listings from raw search-page markup.

use std::sync::LazyLock;

use common::Listing;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;
use crate::fetch::ORIGIN;

/// At most this many containers are extracted per page, in document order.
/// Later containers are ignored even when well-formed.
pub const MAX_LISTINGS: usize = 10;

/// The search is restricted to entry-level postings, so every listing
/// carries this constant.
pub const EXPERIENCE_LEVEL: &str = "Entry Level";

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Class names on the Indeed results page. These are the sole source of
/// truth for field locations and break whenever the site's markup changes.
struct Selectors {
    container: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    snippet: Selector,
    salary: Selector,
    link: Selector,
}

static SELECTORS: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    container: Selector::parse("div.job_seen_beacon").unwrap(),
    title: Selector::parse("h2.jobTitle").unwrap(),
    company: Selector::parse("span.companyName").unwrap(),
    location: Selector::parse("div.companyLocation").unwrap(),
    snippet: Selector::parse("div.job-snippet").unwrap(),
    salary: Selector::parse("div.salary-snippet").unwrap(),
    link: Selector::parse("a").unwrap(),
});

/// Collects an element's text with inner whitespace runs collapsed to a
/// single space and the ends trimmed.
fn normalized_text(el: ElementRef) -> String {
    let raw = el.text().collect::<String>();
    WHITESPACE.replace_all(raw.trim(), " ").into_owned()
}

/// Reads a required field from a container. A missing element and an
/// element with empty text are the same failure: listings never carry
/// empty required fields.
fn required_text(
    card: ElementRef,
    selector: &Selector,
    field: &'static str,
) -> Result<String, ExtractError> {
    let text = card
        .select(selector)
        .next()
        .map(normalized_text)
        .ok_or(ExtractError::MissingField(field))?;

    if text.is_empty() {
        return Err(ExtractError::MissingField(field));
    }
    Ok(text)
}

/// Extracts one listing from its container element.
fn listing(card: ElementRef, date_posted: &str) -> Result<Listing, ExtractError> {
    let title = required_text(card, &SELECTORS.title, "title")?;
    let company = required_text(card, &SELECTORS.company, "company")?;
    let location = required_text(card, &SELECTORS.location, "location")?;
    let description = required_text(card, &SELECTORS.snippet, "description")?;

    // The detail link is the container's first anchor; its href is
    // relative, so the fixed origin is prepended to make it absolute.
    let href = card
        .select(&SELECTORS.link)
        .next()
        .and_then(|a| a.value().attr("href"))
        .ok_or(ExtractError::MissingField("link"))?;
    let url = format!("{ORIGIN}{href}");

    let salary_range = card
        .select(&SELECTORS.salary)
        .next()
        .map(normalized_text)
        .filter(|s| !s.is_empty());

    Ok(Listing {
        title,
        company,
        location,
        description,
        url,
        date_posted: date_posted.to_string(),
        salary_range,
        experience_level: EXPERIENCE_LEVEL.to_string(),
    })
}

/// Parses the page and extracts up to [`MAX_LISTINGS`] listings in
/// document order.
///
/// A container that fails extraction is dropped and the rest of the page
/// is still processed; partial records are never produced.
pub fn listings(html: &str, date_posted: &str) -> Vec<Listing> {
    let document = Html::parse_document(html);

    let mut listings = Vec::new();
    for card in document.select(&SELECTORS.container).take(MAX_LISTINGS) {
        match listing(card, date_posted) {
            Ok(job) => listings.push(job),
            Err(e) => tracing::debug!("skipping container: {e}"),
        }
    }
    listings
}
