//! Header-matching patterns, modelled as an explicit configuration value.

use regex::Regex;

use crate::parser::ParseError;

/// Stock pattern for the commit header line of `git log` output.
///
/// All four stock patterns are anchored at line start in multiline mode, so
/// diff content lines (prefixed `+`, `-`, or a space) can never collide with
/// them.
pub const COMMIT_PATTERN: &str = r"(?m)^commit [0-9a-f]+";

/// Stock pattern for the author header line.
pub const AUTHOR_PATTERN: &str = r"(?m)^Author: .*";

/// Stock pattern for the date header line.
pub const DATE_PATTERN: &str = r"(?m)^Date: .*";

/// Stock pattern for the per-file diff header line.
pub const FILE_PATTERN: &str = r"(?m)^diff --git a/.*";

/// The four header patterns that segment a patch-formatted commit log.
///
/// The parser is agnostic about exact header wording; these patterns carry
/// the log format as configuration so a format change is a configuration
/// update, not a code change.
#[derive(Debug, Clone)]
pub struct LogPatterns {
    /// Matches the line that starts a new commit block.
    pub commit: Regex,
    /// Matches the author header line within a commit block.
    pub author: Regex,
    /// Matches the date header line within a commit block.
    pub date: Regex,
    /// Matches the line that starts a new per-file diff.
    pub file: Regex,
}

impl LogPatterns {
    /// Compiles four caller-supplied pattern strings.
    pub fn new(commit: &str, author: &str, date: &str, file: &str) -> Result<Self, ParseError> {
        Ok(Self {
            commit: compile("commit", commit)?,
            author: compile("author", author)?,
            date: compile("date", date)?,
            file: compile("file", file)?,
        })
    }
}

impl Default for LogPatterns {
    /// Patterns matching stock `git log -p` output.
    #[allow(clippy::expect_used)] // the stock patterns are compile-checked by tests
    fn default() -> Self {
        Self {
            commit: Regex::new(COMMIT_PATTERN).expect("stock commit pattern"),
            author: Regex::new(AUTHOR_PATTERN).expect("stock author pattern"),
            date: Regex::new(DATE_PATTERN).expect("stock date pattern"),
            file: Regex::new(FILE_PATTERN).expect("stock file pattern"),
        }
    }
}

fn compile(which: &'static str, pattern: &str) -> Result<Regex, ParseError> {
    Regex::new(pattern).map_err(|source| ParseError::InvalidPattern { which, source })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn stock_patterns_compile() {
        let patterns = LogPatterns::default();
        assert!(patterns.commit.is_match("commit abc123"));
        assert!(patterns.author.is_match("Author: Jane Doe"));
        assert!(patterns.date.is_match("Date:   Mon Sep 1 12:00:00 2025 +0000"));
        assert!(patterns.file.is_match("diff --git a/file.py b/file.py"));
    }

    #[test]
    fn stock_patterns_anchor_at_line_start() {
        let patterns = LogPatterns::default();
        // Added lines quoting a header must not match.
        assert!(!patterns.commit.is_match("+commit abc123"));
        assert!(!patterns.file.is_match("+diff --git a/x b/x"));
    }

    #[test]
    fn invalid_pattern_names_the_offender() {
        let err = LogPatterns::new("([", AUTHOR_PATTERN, DATE_PATTERN, FILE_PATTERN)
            .expect_err("pattern should be rejected");
        match err {
            ParseError::InvalidPattern { which, .. } => assert_eq!(which, "commit"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn custom_patterns_accepted() {
        let patterns = LogPatterns::new(
            r"(?m)^COMMIT [0-9a-f]+",
            r"(?m)^By: .*",
            r"(?m)^When: .*",
            r"(?m)^FILE .*",
        )
        .unwrap();
        assert!(patterns.commit.is_match("COMMIT deadbeef"));
        assert!(patterns.author.is_match("By: Somebody"));
    }
}
