//! CLI interface for patchlog

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::parser::{self, ChangeRecord, LogPatterns};

pub mod changes;
pub mod parse;

pub use changes::ChangesCommand;
pub use parse::ParseCommand;

/// patchlog: extracts the source lines added by each commit
#[derive(Parser)]
#[command(name = "patchlog")]
#[command(about = "Extracts the source lines added by each commit", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories
#[derive(Subcommand)]
pub enum Commands {
    /// Extract added lines from a repository's branch commits
    Changes(ChangesCommand),
    /// Parse an already-captured patch log from a file or stdin
    Parse(ParseCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Changes(changes_cmd) => changes_cmd.execute(),
            Commands::Parse(parse_cmd) => parse_cmd.execute(),
        }
    }
}

/// Output serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML document (default).
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

/// Header-pattern overrides shared by subcommands.
///
/// Each option defaults to the stock `git log -p` pattern.
#[derive(Args)]
pub struct PatternArgs {
    /// Regex matching commit header lines.
    #[arg(long, value_name = "REGEX")]
    pub commit_pattern: Option<String>,

    /// Regex matching author header lines.
    #[arg(long, value_name = "REGEX")]
    pub author_pattern: Option<String>,

    /// Regex matching date header lines.
    #[arg(long, value_name = "REGEX")]
    pub date_pattern: Option<String>,

    /// Regex matching per-file diff header lines.
    #[arg(long, value_name = "REGEX")]
    pub file_pattern: Option<String>,
}

impl PatternArgs {
    /// Compiles the four patterns, falling back to the stock ones.
    pub fn to_patterns(&self) -> Result<LogPatterns> {
        let patterns = LogPatterns::new(
            self.commit_pattern.as_deref().unwrap_or(parser::COMMIT_PATTERN),
            self.author_pattern.as_deref().unwrap_or(parser::AUTHOR_PATTERN),
            self.date_pattern.as_deref().unwrap_or(parser::DATE_PATTERN),
            self.file_pattern.as_deref().unwrap_or(parser::FILE_PATTERN),
        )?;
        Ok(patterns)
    }
}

/// Serializes records to stdout in the requested format.
pub(crate) fn print_records(records: &[ChangeRecord], format: OutputFormat) -> Result<()> {
    let text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(records)?,
        OutputFormat::Json => serde_json::to_string_pretty(records)?,
    };
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}
