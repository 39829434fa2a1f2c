// Command-line arguments. Flags are parsed with clap, but every field
// is an optional plain string at the clap level: presence and
// non-emptiness are checked in `Arguments::validate`, so a missing flag
// is reported with our own message before any file or network I/O.

use crate::api::StatusPolicy;
use crate::error::{QuoteError, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Timeout applied to the POST when `--timeout` is not given.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Submit a quote (and optionally an image) to a quote site.
#[derive(Parser, Debug)]
#[command(name = "quote-submit", version)]
pub struct Arguments {
    /// Name of person adding the quote.
    #[arg(long, value_name = "NAME")]
    pub added_by: Option<String>,

    /// Title for the quote.
    #[arg(long)]
    pub title: Option<String>,

    /// File containing the quote itself.
    #[arg(long, value_name = "PATH")]
    pub filename: Option<String>,

    /// URL to the quote site API.
    #[arg(long, env = "QUOTE_SITE_URL")]
    pub url: Option<String>,

    /// Path to the file containing an image (optional).
    #[arg(long, value_name = "PATH")]
    pub image: Option<String>,

    /// Request timeout in seconds. 0 waits forever.
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print the response and succeed even when the status is not 200.
    #[arg(long)]
    pub accept_any_status: bool,

    /// More log output on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Everything a run needs, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOptions {
    pub added_by: String,
    pub title: String,
    pub filename: PathBuf,
    pub url: String,
    pub image: Option<PathBuf>,
    pub timeout: Option<Duration>,
    pub status_policy: StatusPolicy,
}

impl Arguments {
    /// Check the required flags in order and report the first one missing.
    /// An empty value counts as missing; an empty `--image` means no image.
    pub fn validate(&self) -> Result<SubmitOptions> {
        let added_by = non_empty(self.added_by.as_deref())
            .ok_or(QuoteError::MissingArgument("you must specify who is adding the quote"))?;
        let title = non_empty(self.title.as_deref())
            .ok_or(QuoteError::MissingArgument("you must specify a title for the quote"))?;
        let filename = non_empty(self.filename.as_deref()).ok_or(QuoteError::MissingArgument(
            "you must specify the file containing the quote",
        ))?;
        let url = non_empty(self.url.as_deref())
            .ok_or(QuoteError::MissingArgument("you must specify the URL to the quote site"))?;

        let image = non_empty(self.image.as_deref()).map(PathBuf::from);

        let timeout = match self.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        let status_policy = if self.accept_any_status {
            StatusPolicy::AcceptAny
        } else {
            StatusPolicy::RequireOk
        };

        Ok(SubmitOptions {
            added_by: added_by.to_string(),
            title: title.to_string(),
            filename: PathBuf::from(filename),
            url: url.to_string(),
            image,
            timeout,
            status_policy,
        })
    }

    /// Log filter derived from -v/-q, used when RUST_LOG is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
