//! PR description composition.
//!
//! A pull request description is edited as a single document with three
//! sentinel lines: the title section, the hand-written summary, and an
//! autogenerated commit log that is regenerated on every update. The
//! sentinels are HTML comments, so they stay invisible when the hosting
//! service renders the body.
//!
//! The title section only exists inside the editor; it is stripped back
//! out after editing, so the stored PR body always starts at the summary
//! sentinel.

use crate::context::RemoteRepo;
use crate::editor;
use crate::error::Result;
use crate::git::Commit;

pub const TITLE_SENTINEL: &str = "<!-- title -->";
pub const SUMMARY_SENTINEL: &str = "<!-- summary -->";
pub const AUTOGEN_SENTINEL: &str = "<!-- autogenerated: everything below is replaced on update -->";

const COMMIT_LOG_HEADING: &str = "### Commit Summary";

/// Title and body of a pull request as the user left them in the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub title: Option<String>,
    pub body: String,
}

/// Build the editable document, run it through the user's editor, and
/// parse the result back into a title and body.
///
/// When no explicit `summary` is given, a summary section found in
/// `existing_body` is carried over.
pub fn compose(
    repo: &RemoteRepo,
    commits: &[Commit],
    title: Option<String>,
    summary: Option<String>,
    existing_body: Option<&str>,
    editor_program: &str,
) -> Result<Draft> {
    let summary = summary.or_else(|| existing_body.and_then(extract_summary));
    let document = render_draft(repo, commits, title.as_deref(), summary.as_deref());
    let edited = editor::edit_string(&document, editor_program)?;
    Ok(parse_edited(&edited, title))
}

/// Pull the hand-written summary out of an existing PR body: the text
/// between the summary and autogen sentinels. Empty sections count as
/// absent.
pub fn extract_summary(body: &str) -> Option<String> {
    let lines: Vec<&str> = body.lines().collect();
    let start = sentinel_line(&lines, SUMMARY_SENTINEL, 0)?;
    let end = sentinel_line(&lines, AUTOGEN_SENTINEL, start + 1)?;

    let inner = lines[start + 1..end].join("\n").trim().to_string();
    if inner.is_empty() {
        None
    } else {
        Some(inner)
    }
}

/// Render the full editable document.
pub fn render_draft(
    repo: &RemoteRepo,
    commits: &[Commit],
    title: Option<&str>,
    summary: Option<&str>,
) -> String {
    format!(
        "{TITLE_SENTINEL}\n{}\n{SUMMARY_SENTINEL}\n{}\n{AUTOGEN_SENTINEL}\n{COMMIT_LOG_HEADING}\n{}",
        title.unwrap_or(""),
        summary.unwrap_or(""),
        render_commit_log(repo, commits)
    )
}

/// Render the commit log: one block per commit, oldest first, each
/// closed by a `---` rule.
pub fn render_commit_log(repo: &RemoteRepo, commits: &[Commit]) -> String {
    commits
        .iter()
        .map(|commit| {
            format!(
                "#### [{}]({})\n{}\n---",
                commit.subject,
                repo.commit_url(&commit.hash),
                commit.body
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse the edited document: the text between the title and summary
/// sentinels becomes the title, and the title span is dropped so the
/// body starts at the summary sentinel.
///
/// If the user mangled the sentinels the edit is taken at face value:
/// the prior title is kept and the body is the editor output as-is.
pub fn parse_edited(edited: &str, prior_title: Option<String>) -> Draft {
    let lines: Vec<&str> = edited.lines().collect();

    let title_span = sentinel_line(&lines, TITLE_SENTINEL, 0)
        .and_then(|start| Some((start, sentinel_line(&lines, SUMMARY_SENTINEL, start + 1)?)));

    match title_span {
        Some((start, end)) => {
            let title = lines[start + 1..end].join("\n").trim().to_string();
            let body = lines[end..].join("\n");
            Draft {
                title: if title.is_empty() { None } else { Some(title) },
                body,
            }
        }
        None => Draft {
            title: prior_title,
            body: edited.to_string(),
        },
    }
}

fn sentinel_line(lines: &[&str], sentinel: &str, from: usize) -> Option<usize> {
    lines[from..]
        .iter()
        .position(|line| line.trim() == sentinel)
        .map(|pos| from + pos)
}
