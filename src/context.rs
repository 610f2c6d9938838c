//! Request-scoped repository context.
//!
//! Everything prq needs to know about the repository is read once per
//! invocation and carried in a [`RepoContext`] value, so handlers never
//! reach for hidden global state.

use std::path::PathBuf;

use regex::Regex;

use crate::error::{PrqError, Result};
use crate::git;

/// Identity of the hosted repository, parsed from the remote URL.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRepo {
    pub host: String,
    pub owner: String,
    pub name: String,
}

impl RemoteRepo {
    /// Parse a git remote URL in scp-like (`git@host:owner/repo.git`),
    /// ssh, or http(s) form.
    pub fn parse(url: &str) -> Option<Self> {
        let scp_re = Regex::new(r"^(?:[^@/]+@)?([^:/]+):(.+)/([^/]+?)(?:\.git)?/?$").unwrap();
        let url_re =
            Regex::new(r"^(?:https?|ssh)://(?:[^@/]+@)?([^/:]+)(?::\d+)?/(.+)/([^/]+?)(?:\.git)?/?$")
                .unwrap();

        let trimmed = url.trim();
        let caps = if trimmed.contains("://") {
            url_re.captures(trimmed)?
        } else {
            scp_re.captures(trimmed)?
        };

        Some(Self {
            host: caps.get(1)?.as_str().to_string(),
            owner: caps.get(2)?.as_str().to_string(),
            name: caps.get(3)?.as_str().to_string(),
        })
    }

    /// Browse URL for a commit.
    pub fn commit_url(&self, hash: &str) -> String {
        format!("https://{}/{}/{}/commit/{}", self.host, self.owner, self.name, hash)
    }

    /// Browse URL for a pull request.
    pub fn pull_url(&self, number: u64) -> String {
        format!("https://{}/{}/{}/pull/{}", self.host, self.owner, self.name, number)
    }
}

/// Tracking remote and branch of the current branch.
#[derive(Debug, Clone, PartialEq)]
pub struct Tracking {
    pub remote: String,
    pub branch: String,
}

/// Base reference a pull request is computed and opened against.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseRef {
    /// Revision the commit range is computed from, e.g. `origin/develop`.
    pub rev: String,
    /// Branch name the pull request targets, e.g. `develop`.
    pub branch: String,
}

/// Repository state for one command invocation.
#[derive(Debug, Clone)]
pub struct RepoContext {
    pub root: PathBuf,
    pub branch: String,
    pub tracking: Option<Tracking>,
    pub remote_name: String,
    pub remote: RemoteRepo,
}

pub const PROTECTED_BRANCHES: &[&str] = &["master", "main"];

const DEFAULT_BASE: &str = "master";

impl RepoContext {
    /// Read the repository state via git. Fails outside a git repository
    /// or when the remote URL cannot be understood.
    pub fn resolve() -> Result<Self> {
        if !git::is_git_repo() {
            return Err(PrqError::Git("Not inside a git repository".to_string()));
        }

        let root = git::repo_root()?;
        let branch = git::current_branch()?;
        let tracking = git::tracking_branch()?.and_then(|name| {
            name.split_once('/').map(|(remote, branch)| Tracking {
                remote: remote.to_string(),
                branch: branch.to_string(),
            })
        });

        let remote_name = tracking
            .as_ref()
            .map(|t| t.remote.clone())
            .unwrap_or_else(|| "origin".to_string());

        let url = git::remote_url(&remote_name)?;
        let remote = RemoteRepo::parse(&url).ok_or(PrqError::RemoteUrl(url))?;

        Ok(Self {
            root,
            branch,
            tracking,
            remote_name,
            remote,
        })
    }

    /// Whether the current branch is a protected base branch.
    pub fn on_protected_branch(&self) -> bool {
        PROTECTED_BRANCHES.contains(&self.branch.as_str())
    }

    /// Resolve the base reference: the tracking branch, unless there is
    /// none or `use_master` asks for the default base explicitly.
    pub fn base_ref(&self, use_master: bool) -> BaseRef {
        match &self.tracking {
            Some(t) if !use_master => BaseRef {
                rev: format!("{}/{}", t.remote, t.branch),
                branch: t.branch.clone(),
            },
            _ => BaseRef {
                rev: DEFAULT_BASE.to_string(),
                branch: DEFAULT_BASE.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> RemoteRepo {
        RemoteRepo {
            host: "github.com".into(),
            owner: "acme".into(),
            name: "widgets".into(),
        }
    }

    #[test]
    fn test_parse_scp_like_url() {
        let parsed = RemoteRepo::parse("git@github.com:acme/widgets.git").expect("should parse");
        assert_eq!(parsed, repo());
    }

    #[test]
    fn test_parse_https_url() {
        let parsed = RemoteRepo::parse("https://github.com/acme/widgets").expect("should parse");
        assert_eq!(parsed, repo());
    }

    #[test]
    fn test_parse_https_url_with_git_suffix() {
        let parsed =
            RemoteRepo::parse("https://github.com/acme/widgets.git").expect("should parse");
        assert_eq!(parsed, repo());
    }

    #[test]
    fn test_parse_ssh_url() {
        let parsed =
            RemoteRepo::parse("ssh://git@ghe.example.com/acme/widgets.git").expect("should parse");
        assert_eq!(parsed.host, "ghe.example.com");
        assert_eq!(parsed.owner, "acme");
        assert_eq!(parsed.name, "widgets");
    }

    #[test]
    fn test_parse_invalid_url() {
        assert!(RemoteRepo::parse("not a url").is_none());
        assert!(RemoteRepo::parse("").is_none());
    }

    #[test]
    fn test_browse_urls() {
        let repo = repo();
        assert_eq!(
            repo.commit_url("abc123"),
            "https://github.com/acme/widgets/commit/abc123"
        );
        assert_eq!(repo.pull_url(7), "https://github.com/acme/widgets/pull/7");
    }

    fn context(tracking: Option<Tracking>) -> RepoContext {
        RepoContext {
            root: PathBuf::from("/tmp/widgets"),
            branch: "feature/login".into(),
            tracking,
            remote_name: "origin".into(),
            remote: repo(),
        }
    }

    #[test]
    fn test_base_ref_uses_tracking_branch() {
        let ctx = context(Some(Tracking {
            remote: "origin".into(),
            branch: "develop".into(),
        }));
        let base = ctx.base_ref(false);
        assert_eq!(base.rev, "origin/develop");
        assert_eq!(base.branch, "develop");
    }

    #[test]
    fn test_base_ref_without_tracking_falls_back_to_master() {
        let base = context(None).base_ref(false);
        assert_eq!(base.rev, "master");
        assert_eq!(base.branch, "master");
    }

    #[test]
    fn test_base_ref_use_master_overrides_tracking() {
        let ctx = context(Some(Tracking {
            remote: "origin".into(),
            branch: "develop".into(),
        }));
        let base = ctx.base_ref(true);
        assert_eq!(base.rev, "master");
    }

    #[test]
    fn test_protected_branch_detection() {
        let mut ctx = context(None);
        assert!(!ctx.on_protected_branch());
        ctx.branch = "master".into();
        assert!(ctx.on_protected_branch());
        ctx.branch = "main".into();
        assert!(ctx.on_protected_branch());
    }
}
