// API client module: a small blocking HTTP client that posts quotes to
// the quote site. One request per run, synchronous, no retries.

use crate::error::{QuoteError, Result};
use crate::payload::Submission;
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

/// Query string the quote site expects on every submission.
pub const QUOTE_QUERY: &str = "?version=1&object=quote";

/// How to treat a response that arrived with a status other than 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Anything but 200 OK is an error.
    #[default]
    RequireOk,
    /// Any completed response counts as success.
    AcceptAny,
}

/// Blocking client bound to one quote site.
#[derive(Clone)]
pub struct QuoteClient {
    client: Client,
    endpoint: String,
    status_policy: StatusPolicy,
}

/// Append the fixed query string to the configured base URL. The base is
/// used as given; no slash or separator is inserted.
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url, QUOTE_QUERY)
}

impl QuoteClient {
    /// Create a client for `base_url`. `timeout` bounds connect plus the
    /// whole exchange; `None` waits forever.
    pub fn new(
        base_url: &str,
        timeout: Option<Duration>,
        status_policy: StatusPolicy,
    ) -> Result<Self> {
        // reqwest's blocking client defaults to 30s; None must really mean none.
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(QuoteError::BuildClient)?;
        Ok(QuoteClient {
            client,
            endpoint: endpoint_url(base_url),
            status_policy,
        })
    }

    /// The full URL submissions are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Serialize `submission` and POST it. Returns the raw response body.
    pub fn submit(&self, submission: &Submission) -> Result<Vec<u8>> {
        let body = submission.to_json()?;
        debug!(url = %self.endpoint, bytes = body.len(), "posting quote");

        let res = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .map_err(|source| QuoteError::Request {
                url: self.endpoint.clone(),
                source,
            })?;

        // Read the body before looking at the status so an error can quote it.
        let status = res.status();
        let payload = res.bytes().map_err(QuoteError::ReadResponse)?.to_vec();
        debug!(status = status.as_u16(), bytes = payload.len(), "response received");

        if self.status_policy == StatusPolicy::RequireOk && status != StatusCode::OK {
            return Err(QuoteError::UnexpectedStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&payload).into_owned(),
            });
        }

        info!(status = status.as_u16(), "quote submitted");
        Ok(payload)
    }
}
