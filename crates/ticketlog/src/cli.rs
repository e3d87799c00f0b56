//! CLI definition.

use std::ffi::OsString;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::ValueParser;
use clap::{CommandFactory, Parser, ValueEnum};
use tracing::info;

use ticketlog_commit::Layout;
use ticketlog_config::{Config, ConfigError, find_config_or_default, load_config};
use ticketlog_core::{CoreError, CoreResult, Pipeline, fetch_options};
use ticketlog_git::{GitHistory, HistorySource};

use crate::report;

/// Layout argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    /// git's default multi-line layout, split on blank lines
    Default,
    /// Separator-delimited fields, immune to colons in messages
    Structured,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Default => Layout::Default,
            LayoutArg::Structured => Layout::Structured,
        }
    }
}

/// Extract commit metadata and issue references from git history.
#[derive(Debug, Parser)]
#[command(name = "ticketlog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Repository to read (default, or empty: current directory)
    #[arg(short, long, env = "TICKETLOG_REPO", value_parser = ValueParser::os_string())]
    pub repo: Option<OsString>,

    /// Only commits more recent than this (any `git log --since` expression)
    #[arg(short, long, env = "TICKETLOG_SINCE")]
    pub since: Option<String>,

    /// Only commits whose author matches this pattern
    #[arg(short, long, env = "TICKETLOG_AUTHOR")]
    pub author: Option<String>,

    /// History layout to request and parse
    #[arg(short, long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Read at most this many commits
    #[arg(short = 'n', long)]
    pub max_count: Option<NonZeroUsize>,

    /// Walk every ref instead of HEAD only
    #[arg(long)]
    pub all: bool,

    /// List changed files (structured layout only)
    #[arg(long)]
    pub files: bool,

    /// Report each issue reference once
    #[arg(long)]
    pub dedup: bool,

    /// Configuration file (default: ticketlog.toml in this or a parent directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Returns the repository given by flag or environment. Empty means none.
    pub fn repo_path(&self) -> Option<PathBuf> {
        self.repo
            .as_ref()
            .filter(|repo| !repo.is_empty())
            .map(PathBuf::from)
    }

    /// Loads the configuration file and applies command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is missing (when given
    /// explicitly), unreadable or invalid.
    pub fn resolve_config(&self) -> CoreResult<Config> {
        let repo = self.repo_path();
        let mut config = match self.config {
            Some(ref path) => load_config(path)?,
            None => {
                let start = match repo {
                    Some(ref repo) => repo.clone(),
                    None => std::env::current_dir().map_err(ConfigError::from)?,
                };
                find_config_or_default(start)?
            }
        };

        if repo.is_some() {
            config.fetch.repo = repo;
        }
        if let Some(ref since) = self.since {
            config.fetch.since.clone_from(since);
        }
        if let Some(ref author) = self.author {
            config.fetch.author.clone_from(author);
        }
        if let Some(max_count) = self.max_count {
            config.fetch.max_count = Some(max_count.get());
        }
        if let Some(layout) = self.layout {
            config.parser.layout = layout.into();
        }
        config.fetch.all |= self.all;
        config.fetch.files |= self.files;
        config.extractor.dedup |= self.dedup;

        config.validate()?;
        Ok(config)
    }

    /// Runs the fetch, parse and extract pipeline and prints the report.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository is invalid, or if fetching,
    /// parsing or writing the report fails.
    pub fn run(&self, config: &Config) -> Result<()> {
        let source: Box<dyn HistorySource> = match config.fetch.repo {
            Some(ref path) => Box::new(GitHistory::open(path).map_err(CoreError::from)?),
            None => Box::new(GitHistory::current_dir()),
        };
        let pipeline = Pipeline::from_config(source, config)?;
        info!(parser = pipeline.parser().name(), "pipeline ready");

        let quick_start = is_quick_start(config);
        let mut out = io::stdout().lock();
        if quick_start {
            writeln!(out, "{}", Self::command().render_usage())?;
            writeln!(out, "Verbose output enabled: no --repo given, reading the current directory.")?;
        }
        report::write_arguments(&mut out, config)?;

        let report = pipeline
            .run(&fetch_options(config))
            .context("failed to read commit history")?;

        report::write_report(&mut out, &report, self.verbose || quick_start)?;
        out.flush()?;
        Ok(())
    }
}

/// Returns true when no repository was given by flag, environment or
/// configuration file, so the current directory is read.
pub fn is_quick_start(config: &Config) -> bool {
    config.fetch.repo.is_none()
}
