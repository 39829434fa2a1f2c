// Entrypoint for the CLI application.
// - Parses and validates flags, sets up logging, then hands off to
//   `ui::run` for the actual submission.
// - Every failure ends the process with exit code 1.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use quote_submit::{cli::Arguments, error::QuoteError, ui};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // clap's own message already ends with a usage line
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let options = match args.validate() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Invalid argument: {}", e);
            eprintln!("{}", Arguments::command().render_help());
            return ExitCode::FAILURE;
        }
    };

    init_logging(args.log_level());

    let mut stdout = std::io::stdout().lock();
    match ui::run(&options, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // QuoteError messages already spell out their cause
            match e.downcast_ref::<QuoteError>() {
                Some(quote_err) => eprintln!("Unable to add quote: {}", quote_err),
                None => eprintln!("Unable to add quote: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr. RUST_LOG wins over -v/-q when it is set.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
