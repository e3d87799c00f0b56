//! Human-readable report written to stdout.

use std::io::{self, Write};

use ticketlog_commit::Commit;
use ticketlog_config::Config;
use ticketlog_core::ScanReport;

const SEPARATOR: &str = "----------------";
const INDENT: &str = "    ";

/// Writes the argument echo line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_arguments(out: &mut impl Write, config: &Config) -> io::Result<()> {
    let repo = config
        .fetch
        .repo
        .as_ref()
        .map_or_else(|| ".".to_string(), |path| path.display().to_string());
    writeln!(
        out,
        "Current arguments: repo={repo} since={} author={}",
        config.fetch.since, config.fetch.author
    )
}

/// Writes the raw history, parsed commits, messages and issue list.
///
/// With `verbose`, each issue line carries the short id of its commit.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_report(out: &mut impl Write, report: &ScanReport, verbose: bool) -> io::Result<()> {
    writeln!(out, "Raw history:")?;
    write!(out, "{}", report.raw)?;
    if !report.raw.is_empty() && !report.raw.ends_with('\n') {
        writeln!(out)?;
    }

    writeln!(out, "Commits ({}):", report.commits.len())?;
    for commit in &report.commits {
        write_commit(out, commit)?;
    }

    writeln!(out, "Messages:")?;
    for commit in &report.commits {
        write!(out, "{}", commit.message)?;
    }

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Issues found:")?;
    for issue in &report.issues {
        if verbose {
            writeln!(out, "{}  ({})", issue.text, issue.short_id())?;
        } else {
            writeln!(out, "{}", issue.text)?;
        }
    }

    Ok(())
}

fn write_commit(out: &mut impl Write, commit: &Commit) -> io::Result<()> {
    writeln!(out, "commit {}", commit.id)?;
    for (name, value) in &commit.headers {
        writeln!(out, "{INDENT}{name}: {value}")?;
    }
    for line in commit.message.lines() {
        writeln!(out, "{INDENT}{line}")?;
    }
    for file in &commit.files {
        writeln!(out, "{INDENT}{}\t{}", file.status, file.path)?;
    }
    writeln!(out)
}
