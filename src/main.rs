//! pdfmeta - Inspect PDF document metadata.
//!
//! CLI entry point: parses arguments, runs one inspection with the
//! interactive password loop, and renders the report.

use clap::Parser;
use std::process;

use pdfmeta::cli::Cli;
use pdfmeta::error::PdfMetaError;
use pdfmeta::inspect::{InspectSession, Inspector, run_inspection};
use pdfmeta::output::{OutputFormatter, create_formatter, render_json, render_report};
use pdfmeta::prompt::{DisabledPrompt, PasswordPrompt, TerminalPrompt};

#[tokio::main]
async fn main() {
    env_logger::init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the application and handle errors
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), PdfMetaError> {
    let config = cli.to_config()?;

    // JSON output owns stdout; route all status output away from it.
    let formatter = if config.json {
        OutputFormatter::quiet()
    } else {
        create_formatter(&config)
    };

    if formatter.should_print() {
        formatter.section(&format!("{} v{}", pdfmeta::NAME, pdfmeta::VERSION));
    }

    formatter.debug(&format!(
        "parse timeout: {}s",
        config.load.timeout.as_secs()
    ));
    formatter.info(&format!("Inspecting {}...", config.input.display()));

    let inspector = Inspector::new(&config.load);
    let mut session = InspectSession::new();

    let mut terminal = TerminalPrompt::new();
    let mut disabled = DisabledPrompt::new();
    let prompt: &mut dyn PasswordPrompt = if config.batch {
        &mut disabled
    } else {
        &mut terminal
    };

    let report = run_inspection(
        &inspector,
        &mut session,
        &config.input,
        config.password.clone(),
        prompt,
    )
    .await?;

    if config.json {
        println!("{}", render_json(&report)?);
    } else {
        render_report(&formatter, &report);
        formatter.blank_line();
    }

    Ok(())
}
