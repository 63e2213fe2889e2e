mod commands;
mod output;

use clap::Parser;
use commands::validate::{self, Outcome, ValidateOptions};
use expectations_core::DEFAULT_MAX_EXAMPLES;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit status for a data-quality failure.
const EXIT_VALIDATION_FAILED: u8 = 1;
/// Exit status for a configuration failure (unreadable input, missing column, bad suite).
const EXIT_CONFIGURATION_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "check-data")]
#[command(version, about = "Validate the processed training dataset", long_about = None)]
struct Cli {
    /// Path to the CSV file to validate
    #[arg(long, default_value = validate::DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Where to write the pass marker on success
    #[arg(long, default_value = validate::DEFAULT_REPORT_PATH)]
    report: PathBuf,

    /// Suite definition file (YAML or TOML) replacing the built-in suite
    #[arg(long)]
    suite: Option<PathBuf>,

    /// Output format for the failure description
    #[arg(short, long, value_enum, default_value_t = output::OutputFormat::Text)]
    format: output::OutputFormat,

    /// Example violations shown per expectation
    #[arg(long, default_value_t = DEFAULT_MAX_EXAMPLES)]
    max_examples: usize,

    /// CSV field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    let options = ValidateOptions {
        data: cli.data,
        report: cli.report,
        suite: cli.suite,
        format: cli.format,
        max_examples: cli.max_examples,
        delimiter: cli.delimiter,
    };

    match validate::execute(&options) {
        Ok(Outcome::Passed) => ExitCode::SUCCESS,
        Ok(Outcome::Failed) => ExitCode::from(EXIT_VALIDATION_FAILED),
        Err(err) => {
            output::print_error(&err);
            ExitCode::from(EXIT_CONFIGURATION_ERROR)
        }
    }
}
