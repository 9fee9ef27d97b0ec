//! Parser-specific error handling.

use thiserror::Error;

/// Errors raised while parsing a patch-formatted commit log.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A caller-supplied header pattern failed to compile.
    #[error("invalid {which} pattern: {source}")]
    InvalidPattern {
        /// Which of the four patterns was rejected.
        which: &'static str,
        /// The underlying regex compilation error.
        source: regex::Error,
    },

    /// A commit header line had no hash token after the leading keyword.
    #[error("commit header {header:?} has no hash token")]
    MissingHash {
        /// The matched header line, for diagnostics.
        header: String,
    },

    /// A commit section contained no match for a required header pattern.
    ///
    /// This is the visible form of the contract violation that used to be
    /// an index-out-of-range failure when commit, author, and date matches
    /// were counted independently across the whole log.
    #[error("no {field} header found in commit {commit}")]
    MissingHeader {
        /// Name of the missing header (author or date).
        field: &'static str,
        /// Hash of the commit whose section is malformed.
        commit: String,
    },

    /// A header line matched but carried no `": "` separated value.
    #[error("{field} header of commit {commit} has no \": \" separator")]
    MalformedHeader {
        /// Name of the malformed header (author or date).
        field: &'static str,
        /// Hash of the commit whose section is malformed.
        commit: String,
    },
}

// Note: anyhow already has a blanket impl for thiserror::Error types
