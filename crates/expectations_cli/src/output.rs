use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use expectations_core::ValidationResult;
use expectations_validator::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn print_validation_result(result: &ValidationResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json_result(result),
        OutputFormat::Text => {
            print_text_result(result);
            Ok(())
        }
    }
}

fn print_text_result(result: &ValidationResult) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION RESULT".bold());
    println!("{}", "═".repeat(60));

    for line in report::summarize(result).lines() {
        if line.starts_with("[PASS]") || line.starts_with("Overall: PASS") {
            println!("{}", line.green());
        } else if line.starts_with("[FAIL]") || line.starts_with("Overall: FAIL") {
            println!("{}", line.red());
        } else {
            println!("{}", line.bold());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Rows validated:      {}", result.stats.rows_validated);
    println!("  Expectations:        {}", result.stats.expectations_evaluated);
    println!("  Failed expectations: {}", result.stats.expectations_failed);
    println!("  Duration:            {} ms", result.stats.duration_ms);
    println!("{}", "═".repeat(60));
}

fn print_json_result(result: &ValidationResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{}", message.green().bold());
}

pub fn print_failure(message: &str) {
    println!("{}", message.red().bold());
}

pub fn print_error(error: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), format!("{:#}", error).red());
}
