//! Opening URLs with the platform's default handler.

use std::process::Command;

use crate::error::{PrqError, Result};

/// Open a URL in the user's default browser.
pub fn open_url(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("open");
        c.arg(url);
        c
    };
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", "", url]);
        c
    };
    #[cfg(all(unix, not(target_os = "macos")))]
    let mut command = {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };

    let status = command
        .status()
        .map_err(|e| PrqError::Command(format!("Failed to open '{url}': {e}")))?;

    if !status.success() {
        return Err(PrqError::Command(format!(
            "URL handler exited with {status} while opening '{url}'"
        )));
    }

    Ok(())
}
