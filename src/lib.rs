// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) parses flags and hands the validated options to `ui::run`.
//
// Module responsibilities:
// - `cli`: flag definitions and validation into `SubmitOptions`.
// - `payload`: reads the quote and image files and builds the JSON body.
// - `api`: the blocking HTTP client that posts the body to the quote site.
// - `ui`: runs the steps in order and prints the response.
// - `error`: one error kind per way a run can fail.
pub mod api;
pub mod cli;
pub mod error;
pub mod payload;
pub mod ui;
