//! Create command handler.
//!
//! Opens a pull request for the current branch, or updates the one
//! already recorded for it.

use std::fs;

use crate::api::PrClient;
use crate::compose;
use crate::config::{self, ApiConfig};
use crate::context::RepoContext;
use crate::error::{PrqError, Result};
use crate::git;
use crate::output::{print_pr_created, print_pr_updated, print_pushing_branch};
use crate::store::PrStore;

const TEMPLATE_PATH: &str = ".github/PULL_REQUEST_TEMPLATE.md";

/// Open or update the pull request for the current branch.
///
/// The base is the tracking branch; `use_master` (or a branch without
/// one) targets the default base instead. Pushing happens after the
/// description is composed, so canceling the editor leaves the remote
/// untouched.
pub fn create_command(use_master: bool) -> Result<()> {
    let ctx = RepoContext::resolve()?;

    if ctx.on_protected_branch() {
        return Err(PrqError::ProtectedBranch(ctx.branch));
    }

    let base = ctx.base_ref(use_master);
    let commits = git::commits_between(&base.rev)?;
    if commits.is_empty() {
        return Err(PrqError::NoCommits { base: base.rev });
    }

    let editor = config::editor()?;
    let api = PrClient::new(&ApiConfig::from_env()?)?;
    let store = PrStore::open()?;

    match store.get(&ctx.branch)? {
        Some(number) => {
            let existing = api.get(&ctx.remote, number)?;
            let draft = compose::compose(
                &ctx.remote,
                &commits,
                Some(existing.title),
                None,
                existing.body.as_deref(),
                &editor,
            )?;

            print_pushing_branch(&ctx.branch, &ctx.remote_name);
            git::push_branch(&ctx.remote_name, &ctx.branch)?;

            let pr = api.update(&ctx.remote, number, draft.title.as_deref(), &draft.body)?;
            print_pr_updated(pr.number, &pr.html_url);
        }
        None => {
            let template = read_template(&ctx);
            let default_title = commits[0].subject.clone();
            let draft = compose::compose(
                &ctx.remote,
                &commits,
                Some(default_title.clone()),
                template,
                None,
                &editor,
            )?;

            print_pushing_branch(&ctx.branch, &ctx.remote_name);
            git::push_branch(&ctx.remote_name, &ctx.branch)?;

            let title = draft.title.unwrap_or(default_title);
            let pr = api.create(&ctx.remote, &base.branch, &ctx.branch, &title, &draft.body)?;
            store.record(&ctx.branch, pr.number)?;
            print_pr_created(pr.number, &pr.html_url);
        }
    }

    Ok(())
}

/// Read the repository's PR template, used as the default summary for
/// new pull requests.
fn read_template(ctx: &RepoContext) -> Option<String> {
    let path = ctx.root.join(TEMPLATE_PATH);
    if path.is_file() {
        fs::read_to_string(&path).ok()
    } else {
        None
    }
}
