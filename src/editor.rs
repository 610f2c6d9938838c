//! Scoped editor round trip.
//!
//! The draft document is written to a temporary file and the user's
//! editor is invoked on it. The temp file is owned by a
//! [`tempfile::NamedTempFile`], so it is removed on every exit path.

use std::fs;
use std::process::Command;

use crate::error::{PrqError, Result};
use crate::prompt;

/// What to do after the editor exits with a failure status.
enum RetryDecision {
    Retry,
    Cancel,
}

/// Let the user edit `initial` in their editor and return the file's
/// final contents.
///
/// A failing editor can be retried any number of times; declining the
/// retry fails with [`PrqError::Canceled`].
pub fn edit_string(initial: &str, editor: &str) -> Result<String> {
    let file = tempfile::NamedTempFile::new()?;
    fs::write(file.path(), initial)?;

    // The editor setting may carry arguments ("code --wait").
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| PrqError::Config("editor command is empty".to_string()))?;
    let args: Vec<&str> = parts.collect();

    loop {
        let status = Command::new(program)
            .args(&args)
            .arg(file.path())
            .status()
            .map_err(|e| PrqError::Command(format!("Failed to launch editor '{program}': {e}")))?;

        if status.success() {
            break;
        }

        match ask_retry() {
            RetryDecision::Retry => continue,
            RetryDecision::Cancel => return Err(PrqError::Canceled),
        }
    }

    Ok(fs::read_to_string(file.path())?)
}

fn ask_retry() -> RetryDecision {
    if prompt::confirm("The editor exited with an error. Retry?", true) {
        RetryDecision::Retry
    } else {
        RetryDecision::Cancel
    }
}
