//! Environment-variable configuration.
//!
//! prq is configured entirely through the environment: an access token and
//! API endpoint for the hosting service, the user's editor, and an optional
//! override for the record-store location.

use std::env;

use crate::error::{PrqError, Result};

/// Token variable for the PR API. Required for any command that talks to
/// the hosting service.
pub const TOKEN_VAR: &str = "PRQ_TOKEN";

/// Endpoint variable for the PR API. Optional.
pub const API_URL_VAR: &str = "PRQ_API_URL";

/// Record-store path override. Optional.
pub const DB_PATH_VAR: &str = "PRQ_DB_PATH";

const DEFAULT_API_URL: &str = "https://api.github.com";

/// Connection settings for the PR API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
}

impl ApiConfig {
    /// Read token and endpoint from the environment.
    pub fn from_env() -> Result<Self> {
        let token = env::var(TOKEN_VAR)
            .map_err(|_| PrqError::Config(format!("{} is not set", TOKEN_VAR)))?;
        Ok(Self {
            base_url: resolve_api_url(env::var(API_URL_VAR).ok()),
            token,
        })
    }
}

fn resolve_api_url(var: Option<String>) -> String {
    match var {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}

/// Resolve the user's editor, `$VISUAL` over `$EDITOR`.
pub fn editor() -> Result<String> {
    resolve_editor(env::var("VISUAL").ok(), env::var("EDITOR").ok())
        .ok_or_else(|| PrqError::Config("set $VISUAL or $EDITOR to edit the description".into()))
}

fn resolve_editor(visual: Option<String>, editor: Option<String>) -> Option<String> {
    visual
        .filter(|v| !v.trim().is_empty())
        .or(editor)
        .filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_defaults_when_unset() {
        assert_eq!(resolve_api_url(None), "https://api.github.com");
    }

    #[test]
    fn test_api_url_defaults_when_blank() {
        assert_eq!(resolve_api_url(Some("  ".into())), "https://api.github.com");
    }

    #[test]
    fn test_api_url_strips_trailing_slash() {
        assert_eq!(
            resolve_api_url(Some("https://ghe.example.com/api/v3/".into())),
            "https://ghe.example.com/api/v3"
        );
    }

    #[test]
    fn test_editor_prefers_visual() {
        let resolved = resolve_editor(Some("vim".into()), Some("nano".into()));
        assert_eq!(resolved.as_deref(), Some("vim"));
    }

    #[test]
    fn test_editor_falls_back_when_visual_blank() {
        let resolved = resolve_editor(Some("".into()), Some("nano".into()));
        assert_eq!(resolved.as_deref(), Some("nano"));
    }

    #[test]
    fn test_editor_absent() {
        assert_eq!(resolve_editor(None, None), None);
    }
}
