//! Git repository access and patch-log rendering.

pub mod repository;

pub use repository::GitRepository;

/// Number of hex characters to show in abbreviated commit hashes.
pub const SHORT_HASH_LEN: usize = 8;
