//! Parse command — parses an already-captured patch log.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

use crate::cli::{print_records, OutputFormat, PatternArgs};
use crate::parser::parse_added_changes;

/// Parse command options.
#[derive(Parser)]
pub struct ParseCommand {
    /// Patch-log file to parse; reads stdin when omitted.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: OutputFormat,

    /// Header-pattern overrides.
    #[command(flatten)]
    pub patterns: PatternArgs,
}

impl ParseCommand {
    /// Executes the parse command.
    pub fn execute(self) -> Result<()> {
        let log = match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read patch log from stdin")?;
                buffer
            }
        };
        debug!("read {} bytes of patch log", log.len());

        let patterns = self.patterns.to_patterns()?;
        let records = parse_added_changes(&log, &patterns)?;
        debug!("parsed {} commit records", records.len());

        print_records(&records, self.format)
    }
}
