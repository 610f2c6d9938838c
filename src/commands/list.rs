//! List command handler.

use crate::api::PrClient;
use crate::browser;
use crate::config::ApiConfig;
use crate::context::RepoContext;
use crate::error::{PrqError, Result};
use crate::output::{print_opening, print_pr_line};

/// Without an index, print the repository's open pull requests; with
/// one, open that pull request in the browser.
pub fn list_command(index: Option<usize>) -> Result<()> {
    let ctx = RepoContext::resolve()?;
    let api = PrClient::new(&ApiConfig::from_env()?)?;
    let prs = api.list(&ctx.remote)?;

    match index {
        None => {
            for (i, pr) in prs.iter().enumerate() {
                print_pr_line(i, &pr.title);
            }
            Ok(())
        }
        Some(i) => {
            let pr = prs.get(i).ok_or(PrqError::IndexOutOfRange {
                index: i,
                len: prs.len(),
            })?;
            print_opening(&pr.html_url);
            browser::open_url(&pr.html_url)
        }
    }
}
