//! Extraction of added source lines from patch-formatted commit logs.

use serde::{Deserialize, Serialize};

use crate::parser::{LogPatterns, ParseError};

/// The lines added by one commit, with its identifying headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Hash of the commit, taken from the commit header line.
    pub commit_hash: String,
    /// Author identity as recorded in the author header line.
    pub author: String,
    /// Authorship date, kept verbatim as it appears in the date header line.
    pub date: String,
    /// Added source lines across all files of the commit, in file order,
    /// then line order within each file. Each entry keeps its leading `+`.
    pub added_changes: Vec<String>,
}

/// Parses a patch-formatted commit log into one [`ChangeRecord`] per commit.
///
/// The log is split once at commit-header boundaries; the author and date
/// headers are then matched *within* each commit's section, so the four
/// patterns cannot silently drift out of alignment. Text before the first
/// commit header is ignored, as is anything in a commit's body before its
/// first file-header line (commit message, merge notices).
///
/// An added line is a line whose first character is `+` and whose second
/// character exists and is not `+`. This excludes the `+++` side of diff
/// file headers; it also drops an added line whose own content begins with
/// `+`, which matches the behavior of the tool this log format comes from.
///
/// Empty input, or input with no commit-header match, yields an empty `Vec`.
/// A commit section missing its author or date header is an error rather
/// than a silently misattributed record.
pub fn parse_added_changes(
    log: &str,
    patterns: &LogPatterns,
) -> Result<Vec<ChangeRecord>, ParseError> {
    let headers: Vec<regex::Match<'_>> = patterns.commit.find_iter(log).collect();

    let mut records = Vec::with_capacity(headers.len());
    for (i, header) in headers.iter().enumerate() {
        let end = headers.get(i + 1).map_or(log.len(), regex::Match::start);
        let section = &log[header.start()..end];

        // Second whitespace-delimited token; the first is the keyword.
        let commit_hash = header
            .as_str()
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| ParseError::MissingHash {
                header: header.as_str().trim().to_string(),
            })?
            .to_string();

        let author = header_value(&patterns.author, section, "author", &commit_hash)?;
        let date = header_value(&patterns.date, section, "date", &commit_hash)?;

        // Everything before the first file header is headers and message;
        // a commit with no file diff contributes no added lines.
        let added_changes = match patterns.file.find(section) {
            Some(first_file) => collect_added_lines(&section[first_file.start()..]),
            None => Vec::new(),
        };

        records.push(ChangeRecord {
            commit_hash,
            author,
            date,
            added_changes,
        });
    }

    Ok(records)
}

/// Finds the first `pattern` match in `section` and returns the text after
/// its first `": "` separator, trimmed.
fn header_value(
    pattern: &regex::Regex,
    section: &str,
    field: &'static str,
    commit: &str,
) -> Result<String, ParseError> {
    let line = pattern
        .find(section)
        .ok_or_else(|| ParseError::MissingHeader {
            field,
            commit: commit.to_string(),
        })?;

    let (_, value) = line
        .as_str()
        .split_once(": ")
        .ok_or_else(|| ParseError::MalformedHeader {
            field,
            commit: commit.to_string(),
        })?;

    Ok(value.trim().to_string())
}

/// Collects the added lines of a commit's file-diff region, in order.
fn collect_added_lines(diffs: &str) -> Vec<String> {
    diffs
        .lines()
        .filter(|line| is_added_line(line))
        .map(str::to_string)
        .collect()
}

/// An added line starts with exactly one `+` and has at least one further
/// character. The two-character test is what keeps `+++ b/...` file headers
/// out; it also means a lone `+` is not an added line.
fn is_added_line(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('+') && matches!(chars.next(), Some(c) if c != '+')
}
