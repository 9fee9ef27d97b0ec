//! Commit-log parsing: turns `git log -p` style text into per-commit
//! records of added source lines.

pub mod changes;
pub mod error;
pub mod patterns;

pub use changes::{parse_added_changes, ChangeRecord};
pub use error::ParseError;
pub use patterns::{
    LogPatterns, AUTHOR_PATTERN, COMMIT_PATTERN, DATE_PATTERN, FILE_PATTERN,
};
