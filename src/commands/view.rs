//! View command handler.

use crate::browser;
use crate::context::RepoContext;
use crate::error::{PrqError, Result};
use crate::output::print_opening;
use crate::store::PrStore;

/// Open the pull request recorded for the current branch in the
/// browser.
pub fn view_command() -> Result<()> {
    let ctx = RepoContext::resolve()?;
    let store = PrStore::open()?;

    let number = store
        .get(&ctx.branch)?
        .ok_or_else(|| PrqError::NoRecordedPr(ctx.branch.clone()))?;

    let url = ctx.remote.pull_url(number);
    print_opening(&url);
    browser::open_url(&url)
}
