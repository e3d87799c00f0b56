//! Ticketlog CLI - Extract issue references from git history.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ticketlog_config::ConfigError;
use ticketlog_core::CoreError;

mod cli;
mod report;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    let config = cli.resolve_config();

    // Logs go to stderr, stdout carries the report
    let quick_start = config.as_ref().is_ok_and(cli::is_quick_start);
    let default_level = if cli.verbose || quick_start {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = config
        .context("failed to load configuration")
        .and_then(|config| cli.run(&config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Maps an error to the process exit code: 2 for bad input, 1 otherwise.
fn exit_code(err: &anyhow::Error) -> u8 {
    let usage = err.chain().any(|cause| {
        cause
            .downcast_ref::<CoreError>()
            .is_some_and(CoreError::is_usage_error)
            || cause.downcast_ref::<ConfigError>().is_some()
    });
    if usage { 2 } else { 1 }
}
