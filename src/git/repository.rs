//! Git repository operations

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use git2::{Commit, DiffFormat, Repository};
use tracing::{debug, info};

use crate::git::SHORT_HASH_LEN;

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open repository at current directory
    pub fn open() -> Result<Self> {
        let repo = Repository::open(".").context("Not in a git repository")?;

        Ok(Self { repo })
    }

    /// Open repository at specified path
    pub fn open_at<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path).context("Failed to open git repository")?;

        Ok(Self { repo })
    }

    /// Get current branch name
    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head().context("Failed to get HEAD reference")?;

        if let Some(name) = head.shorthand() {
            if name != "HEAD" {
                return Ok(name.to_string());
            }
        }

        anyhow::bail!("Repository is in detached HEAD state")
    }

    /// Get the default branch of the `origin` remote (e.g. `origin/main`),
    /// resolved from the `refs/remotes/origin/HEAD` symbolic reference.
    pub fn default_branch(&self) -> Result<String> {
        let head_ref = self
            .repo
            .find_reference("refs/remotes/origin/HEAD")
            .context("Remote origin has no HEAD reference")?;

        let target = head_ref
            .symbolic_target()
            .context("refs/remotes/origin/HEAD is not a symbolic reference")?;

        // refs/remotes/origin/main -> origin/main
        Ok(target
            .strip_prefix("refs/remotes/")
            .unwrap_or(target)
            .to_string())
    }

    /// Render the patch log for the range between the remote default branch
    /// and `branch` (or the currently checked-out branch).
    pub fn log_against_default(&self, branch: Option<&str>) -> Result<String> {
        let current = match branch {
            Some(name) => name.to_string(),
            None => self.current_branch()?,
        };
        info!("current branch {current}");

        let base = self.default_branch()?;
        debug!("comparing against default branch {base}");

        self.patch_log(&format!("{base}..{current}"))
    }

    /// Render `git log -p` equivalent text for a commit range.
    ///
    /// `range` is either `<base>..<head>`, or a single revision (including
    /// `HEAD`). Commits are emitted most-recent first, exactly as `git log`
    /// orders them. Merge commits contribute a header block without a patch
    /// body.
    pub fn patch_log(&self, range: &str) -> Result<String> {
        let mut log = String::new();
        let mut commit_count = 0usize;

        if let Some((start_spec, end_spec)) = range.split_once("..") {
            if start_spec.is_empty() || end_spec.is_empty() {
                anyhow::bail!("Invalid range format: {}", range);
            }

            let start_obj = self
                .repo
                .revparse_single(start_spec)
                .with_context(|| format!("Failed to parse start commit: {}", start_spec))?;
            let end_obj = self
                .repo
                .revparse_single(end_spec)
                .with_context(|| format!("Failed to parse end commit: {}", end_spec))?;

            let start_commit = start_obj
                .peel_to_commit()
                .context("Failed to peel start object to commit")?;
            let end_commit = end_obj
                .peel_to_commit()
                .context("Failed to peel end object to commit")?;

            // Walk from end_commit back to start_commit (exclusive)
            let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
            walker
                .push(end_commit.id())
                .context("Failed to push end commit")?;
            walker
                .hide(start_commit.id())
                .context("Failed to hide start commit")?;

            for oid in walker {
                let oid = oid.context("Failed to get commit OID from walker")?;
                let commit = self
                    .repo
                    .find_commit(oid)
                    .context("Failed to find commit")?;
                log.push_str(&self.render_commit(&commit)?);
                commit_count += 1;
            }
        } else {
            let obj = self
                .repo
                .revparse_single(range)
                .with_context(|| format!("Failed to parse commit: {}", range))?;
            let commit = obj
                .peel_to_commit()
                .context("Failed to peel object to commit")?;
            log.push_str(&self.render_commit(&commit)?);
            commit_count += 1;
        }

        debug!("rendered patch log for {commit_count} commits in {range}");
        Ok(log)
    }

    /// Render one commit the way `git log -p` prints it: header lines,
    /// indented message, then the patch.
    fn render_commit(&self, commit: &Commit) -> Result<String> {
        let mut text = format!("commit {}\n", commit.id());

        if commit.parent_count() > 1 {
            let parents: Vec<String> = commit
                .parent_ids()
                .map(|id| id.to_string()[..SHORT_HASH_LEN].to_string())
                .collect();
            text.push_str(&format!("Merge: {}\n", parents.join(" ")));
        }

        text.push_str(&format!(
            "Author: {} <{}>\n",
            commit.author().name().unwrap_or("Unknown"),
            commit.author().email().unwrap_or("unknown@example.com")
        ));

        let date = commit_date(commit)?;
        text.push_str(&format!(
            "Date:   {}\n\n",
            date.format("%a %b %-d %H:%M:%S %Y %z")
        ));

        for line in commit.message().unwrap_or("").lines() {
            text.push_str(&format!("    {}\n", line));
        }
        text.push('\n');

        // git log -p shows no patch body for merge commits.
        if commit.parent_count() <= 1 {
            text.push_str(&self.commit_diff_text(commit)?);
            text.push('\n');
        }

        Ok(text)
    }

    /// Get full diff content for the commit
    fn commit_diff_text(&self, commit: &Commit) -> Result<String> {
        let commit_tree = commit.tree().context("Failed to get commit tree")?;

        let parent_tree = if commit.parent_count() > 0 {
            Some(
                commit
                    .parent(0)
                    .context("Failed to get parent commit")?
                    .tree()
                    .context("Failed to get parent tree")?,
            )
        } else {
            None
        };

        let diff = if let Some(parent_tree) = parent_tree {
            self.repo
                .diff_tree_to_tree(Some(&parent_tree), Some(&commit_tree), None)
                .context("Failed to create diff")?
        } else {
            // Initial commit - diff against empty tree
            self.repo
                .diff_tree_to_tree(None, Some(&commit_tree), None)
                .context("Failed to create diff for initial commit")?
        };

        let mut diff_text = String::new();

        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            // Content lines carry their origin marker; file and hunk
            // headers already include their own leading text.
            if matches!(line.origin(), '+' | '-' | ' ') {
                diff_text.push(line.origin());
            }
            diff_text.push_str(std::str::from_utf8(line.content()).unwrap_or("<binary>"));
            true
        })
        .context("Failed to format diff")?;

        if !diff_text.ends_with('\n') {
            diff_text.push('\n');
        }

        Ok(diff_text)
    }
}

/// Convert a commit's author timestamp into a timezone-aware datetime.
fn commit_date(commit: &Commit) -> Result<DateTime<FixedOffset>> {
    let timestamp = commit.author().when();
    let utc = FixedOffset::east_opt(0).context("UTC offset")?;
    let date = DateTime::from_timestamp(timestamp.seconds(), 0)
        .context("Invalid commit timestamp")?
        .with_timezone(&FixedOffset::east_opt(timestamp.offset_minutes() * 60).unwrap_or(utc));
    Ok(date)
}
