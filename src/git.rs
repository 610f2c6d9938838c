use std::path::PathBuf;
use std::process::Command;

use crate::error::{PrqError, Result};

/// One commit in the range between the base reference and HEAD.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    pub hash: String,
    pub subject: String,
    pub body: String,
}

// Field/record separators for the `git log` pretty format below. Commit
// bodies contain newlines, so line-based parsing is not an option.
const FIELD_SEP: char = '\u{1f}';
const RECORD_SEP: char = '\u{1e}';

/// Check if current directory is a git repository
pub fn is_git_repo() -> bool {
    Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Get the repository root directory
pub fn repo_root() -> Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()?;

    if !output.status.success() {
        return Err(PrqError::Git(
            String::from_utf8_lossy(&output.stderr).to_string(),
        ));
    }

    Ok(PathBuf::from(
        String::from_utf8_lossy(&output.stdout).trim(),
    ))
}

/// Get the current branch name
pub fn current_branch() -> Result<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .output()?;

    if !output.status.success() {
        return Err(PrqError::Git(
            String::from_utf8_lossy(&output.stderr).to_string(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Get the tracking branch of HEAD as `<remote>/<branch>`, if one is
/// configured.
pub fn tracking_branch() -> Result<Option<String>> {
    let output = Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{u}"])
        .output()?;

    // No upstream configured exits non-zero; that is not an error here.
    if !output.status.success() {
        return Ok(None);
    }

    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(if name.is_empty() { None } else { Some(name) })
}

/// Get the fetch URL of a remote
pub fn remote_url(remote: &str) -> Result<String> {
    let output = Command::new("git")
        .args(["remote", "get-url", remote])
        .output()?;

    if !output.status.success() {
        return Err(PrqError::Git(format!(
            "Failed to read url of remote '{}': {}",
            remote,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// List the commits between `base` (exclusive) and HEAD (inclusive),
/// oldest first.
pub fn commits_between(base: &str) -> Result<Vec<Commit>> {
    let format = format!("%H{FIELD_SEP}%s{FIELD_SEP}%b{RECORD_SEP}");
    let output = Command::new("git")
        .args([
            "log",
            "--reverse",
            &format!("--format={format}"),
            &format!("{base}..HEAD"),
        ])
        .output()?;

    if !output.status.success() {
        return Err(PrqError::Git(format!(
            "Failed to list commits {}..HEAD: {}",
            base,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(parse_commit_log(&String::from_utf8_lossy(&output.stdout)))
}

fn parse_commit_log(log: &str) -> Vec<Commit> {
    log.split(RECORD_SEP)
        .filter_map(|record| {
            let mut fields = record.splitn(3, FIELD_SEP);
            let hash = fields.next()?.trim().to_string();
            if hash.is_empty() {
                return None;
            }
            let subject = fields.next()?.trim().to_string();
            let body = fields.next().unwrap_or("").trim().to_string();
            Some(Commit {
                hash,
                subject,
                body,
            })
        })
        .collect()
}

/// Force-push a branch to its remote with upstream tracking.
///
/// The branch history may have been rewritten locally since the last
/// push, so a plain push is not enough here.
pub fn push_branch(remote: &str, branch: &str) -> Result<()> {
    let output = Command::new("git")
        .args(["push", "--force", "--set-upstream", remote, branch])
        .output()?;

    if !output.status.success() {
        return Err(PrqError::Git(format!(
            "Failed to push branch '{}' to '{}': {}",
            branch,
            remote,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(())
}
