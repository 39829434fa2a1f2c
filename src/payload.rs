// Payload module: turns the validated options into the JSON body the
// quote site expects. Reads the quote text and the optional image from
// disk; nothing here touches the network.

use crate::error::{QuoteError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// One quote submission. Field order is the order of the JSON keys.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub added_by: String,
    pub title: String,
    pub quote: String,
    /// Standard base64 of the image bytes. Left out of the JSON entirely
    /// when no image was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Submission {
    /// Build a submission from in-memory parts. `image` holds raw bytes and
    /// is encoded here.
    pub fn new(added_by: &str, title: &str, quote: String, image: Option<&[u8]>) -> Self {
        Submission {
            added_by: added_by.to_string(),
            title: title.to_string(),
            quote,
            image: image.map(|bytes| STANDARD.encode(bytes)),
        }
    }

    /// Read the quote file (and the image file, if any) and build the
    /// submission. Errors carry the offending path.
    pub fn from_files(
        added_by: &str,
        title: &str,
        quote_path: &Path,
        image_path: Option<&Path>,
    ) -> Result<Self> {
        let quote = std::fs::read_to_string(quote_path).map_err(|source| QuoteError::ReadQuote {
            path: quote_path.to_path_buf(),
            source,
        })?;
        debug!(path = %quote_path.display(), bytes = quote.len(), "read quote");

        let image = match image_path {
            Some(path) => {
                let buf = std::fs::read(path).map_err(|source| QuoteError::ReadImage {
                    path: path.to_path_buf(),
                    source,
                })?;
                debug!(path = %path.display(), bytes = buf.len(), "read image");
                Some(buf)
            }
            None => None,
        };

        Ok(Submission::new(added_by, title, quote, image.as_deref()))
    }

    /// Serialize to the compact JSON request body.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
