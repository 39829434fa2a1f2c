// UI layer: runs the submission steps in order, shows a spinner on
// stderr while the request is in flight and writes the service response
// to stdout.

use crate::api::QuoteClient;
use crate::cli::SubmitOptions;
use crate::payload::Submission;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

/// Read the inputs, submit them and print the response body to `out`.
/// Any failure stops the run; nothing is retried.
pub fn run(options: &SubmitOptions, out: &mut impl Write) -> Result<()> {
    let submission = Submission::from_files(
        &options.added_by,
        &options.title,
        &options.filename,
        options.image.as_deref(),
    )?;

    let client = QuoteClient::new(&options.url, options.timeout, options.status_policy)?;

    let spinner = spinner("Submitting quote...");
    let result = client.submit(&submission);
    spinner.finish_and_clear();
    let response = result?;

    out.write_all(&response).context("Failed to write response")?;
    writeln!(out).context("Failed to write response")?;
    out.flush().context("Failed to write response")?;
    Ok(())
}

/// A stderr spinner. Draws nothing when stderr is not a terminal.
fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
