use std::result;

use thiserror::Error;

/// Failures talking to or decoding responses from the E-utilities
#[derive(Error, Debug)]
pub enum EutilsError {
    /// HTTP request failed (connection, timeout, client construction)
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Non-success HTTP status
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },
}

pub type Result<T> = result::Result<T, EutilsError>;

/// Fatal errors of a retrieval run
///
/// These are the only errors [`crate::PaperFinder::fetch_papers`] returns. Any of
/// them aborts the run and no partial results are handed back.
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// The ESearch phase could not complete
    #[error("Failed to search PubMed: {0}")]
    SearchFailed(#[source] EutilsError),

    /// An EFetch batch could not be retrieved or decoded
    #[error("Failed to fetch PubMed details: {0}")]
    FetchFailed(#[source] EutilsError),
}

impl RetrievalError {
    /// The underlying transport or decoding failure
    pub fn cause(&self) -> &EutilsError {
        match self {
            RetrievalError::SearchFailed(err) | RetrievalError::FetchFailed(err) => err,
        }
    }
}
