//! HTTP client for the pull request API.
//!
//! Sends blocking requests against a GitHub-style REST endpoint and
//! decodes the subset of the PR resource this tool cares about.

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::config::ApiConfig;
use crate::context::RemoteRepo;
use crate::error::{PrqError, Result};

const USER_AGENT: &str = concat!("prq/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";

/// A pull request as returned by the hosting service.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub html_url: String,
}

/// Client for the pull request API.
pub struct PrClient {
    http: Client,
    base_url: String,
    token: String,
}

impl PrClient {
    /// Build a client from API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            http: Client::builder().user_agent(USER_AGENT).build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Fetch a single pull request by number.
    pub fn get(&self, repo: &RemoteRepo, number: u64) -> Result<PullRequest> {
        let url = format!("{}/{}", self.pulls_url(repo), number);
        let response = self.authed(self.http.get(&url)).send()?;
        decode(response)
    }

    /// List the open pull requests of a repository.
    pub fn list(&self, repo: &RemoteRepo) -> Result<Vec<PullRequest>> {
        let response = self.authed(self.http.get(self.pulls_url(repo))).send()?;
        decode(response)
    }

    /// Open a new pull request from `head` into `base`.
    pub fn create(
        &self,
        repo: &RemoteRepo,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest> {
        let payload = json!({
            "title": title,
            "body": body,
            "head": head,
            "base": base,
        });

        let response = self
            .authed(self.http.post(self.pulls_url(repo)))
            .json(&payload)
            .send()?;
        decode(response)
    }

    /// Update the title and/or body of an existing pull request.
    pub fn update(
        &self,
        repo: &RemoteRepo,
        number: u64,
        title: Option<&str>,
        body: &str,
    ) -> Result<PullRequest> {
        let mut payload = json!({ "body": body });
        if let Some(title) = title {
            payload["title"] = json!(title);
        }

        let url = format!("{}/{}", self.pulls_url(repo), number);
        let response = self.authed(self.http.patch(&url)).json(&payload).send()?;
        decode(response)
    }

    fn pulls_url(&self, repo: &RemoteRepo) -> String {
        format!("{}/repos/{}/{}/pulls", self.base_url, repo.owner, repo.name)
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", ACCEPT)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().unwrap_or_default();
        return Err(PrqError::ApiStatus { status, body });
    }
    Ok(response.json()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PrClient {
        PrClient::new(&ApiConfig {
            base_url: "https://api.github.com".into(),
            token: "t0ken".into(),
        })
        .unwrap()
    }

    fn repo() -> RemoteRepo {
        RemoteRepo {
            host: "github.com".into(),
            owner: "acme".into(),
            name: "widgets".into(),
        }
    }

    #[test]
    fn test_pulls_url() {
        assert_eq!(
            client().pulls_url(&repo()),
            "https://api.github.com/repos/acme/widgets/pulls"
        );
    }

    #[test]
    fn test_pull_request_deserializes() {
        let json = r#"{
            "number": 12,
            "title": "Add widgets",
            "body": null,
            "html_url": "https://github.com/acme/widgets/pull/12",
            "state": "open"
        }"#;
        let pr: PullRequest = serde_json::from_str(json).unwrap();
        assert_eq!(pr.number, 12);
        assert_eq!(pr.title, "Add widgets");
        assert_eq!(pr.body, None);
        assert_eq!(pr.html_url, "https://github.com/acme/widgets/pull/12");
    }
}
