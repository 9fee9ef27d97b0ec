//! # patchlog
//!
//! Extracts the source lines added by each commit from `git log -p` style
//! patch text.
//!
//! The core is [`parser::parse_added_changes`]: given a patch-formatted log
//! and four configurable header patterns, it produces one
//! [`parser::ChangeRecord`] per commit with the commit's hash, author, date,
//! and every added source line across its file diffs. The [`git`] module
//! renders that log text from a local repository with libgit2.
//!
//! ## Quick Start
//!
//! ```rust
//! use patchlog::{parse_added_changes, LogPatterns};
//!
//! let log = "commit abc123\n\
//!            Author: Jane Doe\n\
//!            Date: 2024-01-01\n\
//!            \n\
//!            diff --git a/file.py b/file.py\n\
//!            +++ b/file.py\n\
//!            @@ -0,0 +1 @@\n\
//!            +print('hi')\n";
//!
//! let records = parse_added_changes(log, &LogPatterns::default())?;
//! assert_eq!(records[0].added_changes, vec!["+print('hi')".to_string()]);
//! # Ok::<(), patchlog::ParseError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod git;
pub mod parser;

pub use crate::cli::Cli;
pub use crate::parser::{parse_added_changes, ChangeRecord, LogPatterns, ParseError};

/// The current version of patchlog.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
