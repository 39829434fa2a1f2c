// Error kinds for a single submission run. Every variant is terminal:
// the binary prints it and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    /// A required flag was absent or empty.
    #[error("{0}")]
    MissingArgument(&'static str),

    #[error("unable to read quote from file: {}: {source}", path.display())]
    ReadQuote {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading image: {}: {source}", path.display())]
    ReadImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to create JSON payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("unable to build HTTP client: {0}")]
    BuildClient(#[source] reqwest::Error),

    /// The POST never produced a response (connect failure, bad URL, timeout).
    #[error("unable to make HTTP request to {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unable to read response body: {0}")]
    ReadResponse(#[source] reqwest::Error),

    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, QuoteError>;
