use thiserror::Error;

/// The outbound search request failed before any markup was available:
/// connection error, DNS failure, or an unreadable response body.
#[derive(Debug, Error)]
#[error("search request failed: {0}")]
pub struct FetchError(#[from] reqwest::Error);

/// A single listing container could not be extracted.
///
/// The container is dropped and extraction continues with the next one;
/// this never aborts the batch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The expected nested element was missing, or its text was empty.
    #[error("listing is missing required field `{0}`")]
    MissingField(&'static str),
}
