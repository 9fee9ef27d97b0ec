//! Changes command — extracts added lines from a repository's commits.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::cli::{print_records, OutputFormat, PatternArgs};
use crate::git::GitRepository;
use crate::parser::parse_added_changes;

/// Changes command options.
#[derive(Parser)]
pub struct ChangesCommand {
    /// Path to the repository (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Branch to compare against the remote default branch
    /// (defaults to the currently checked-out branch).
    #[arg(long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Commit range to analyze instead of comparing against the default
    /// branch (e.g. HEAD~3..HEAD, abc123..def456).
    #[arg(long, value_name = "COMMIT_RANGE", conflicts_with = "branch")]
    pub range: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: OutputFormat,

    /// Header-pattern overrides.
    #[command(flatten)]
    pub patterns: PatternArgs,
}

impl ChangesCommand {
    /// Executes the changes command.
    pub fn execute(self) -> Result<()> {
        let repo = match &self.path {
            Some(path) => GitRepository::open_at(path)
                .with_context(|| format!("Failed to open git repository at {}", path.display()))?,
            None => GitRepository::open()
                .context("Failed to open git repository. Make sure you're in a git repository.")?,
        };

        let log = match &self.range {
            Some(range) => repo.patch_log(range)?,
            None => repo.log_against_default(self.branch.as_deref())?,
        };

        let patterns = self.patterns.to_patterns()?;
        let records = parse_added_changes(&log, &patterns)?;
        debug!("parsed {} commit records", records.len());

        print_records(&records, self.format)
    }
}
