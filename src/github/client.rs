// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! GitHub REST client for pull request metadata.

use crate::error::{GithubError, Result};
use serde::Deserialize;
use ureq::Agent;

use super::context::PullRequestRef;

/// The pull request fields prlint reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    pub title: String,
    #[serde(default)]
    pub commits: u64,
}

/// Access to pull request metadata.
pub trait PullRequestApi {
    /// Fetch a pull request, authenticating with the given token.
    fn get_pull_request(&self, token: &str, pull_request: &PullRequestRef) -> Result<PullRequest>;
}

/// Blocking client for the GitHub REST API.
pub struct GithubClient {
    agent: Agent,
    api_url: String,
}

impl GithubClient {
    /// Create a client for the given API base URL.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            agent: Agent::new(),
            api_url: api_url.into(),
        }
    }

    /// URL of a pull request resource.
    pub fn pull_request_url(&self, pull_request: &PullRequestRef) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}",
            self.api_url.trim_end_matches('/'),
            pull_request.owner,
            pull_request.repo,
            pull_request.number
        )
    }
}

impl PullRequestApi for GithubClient {
    fn get_pull_request(&self, token: &str, pull_request: &PullRequestRef) -> Result<PullRequest> {
        let url = self.pull_request_url(pull_request);
        tracing::debug!("Fetching pull request from {}", url);

        let response = self
            .agent
            .get(&url)
            .set("Accept", "application/vnd.github+json")
            .set("Authorization", &format!("Bearer {}", token))
            .set("X-GitHub-Api-Version", "2022-11-28")
            .set("User-Agent", &format!("prlint/{}", crate::version::VERSION))
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(status, response) => GithubError::Status {
                    url: url.clone(),
                    status,
                    message: response.status_text().to_string(),
                },
                ureq::Error::Transport(transport) => GithubError::RequestFailed {
                    url: url.clone(),
                    message: transport.to_string(),
                },
            })?;

        let pull_request: PullRequest =
            response
                .into_json()
                .map_err(|e| GithubError::InvalidResponse {
                    message: e.to_string(),
                })?;

        tracing::debug!("Pull request has {} commits", pull_request.commits);
        Ok(pull_request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pr() -> PullRequestRef {
        PullRequestRef {
            number: 1234,
            owner: "bob_cratchett".to_string(),
            repo: "stuff".to_string(),
        }
    }

    #[test]
    fn test_pull_request_url() {
        let client = GithubClient::new("https://api.github.com/");
        assert_eq!(
            client.pull_request_url(&pr()),
            "https://api.github.com/repos/bob_cratchett/stuff/pulls/1234"
        );
    }

    #[test]
    fn test_pull_request_deserialize() {
        let pr: PullRequest = serde_json::from_str(
            r#"{"number": 1, "commits": 3, "title": "feat: add thing", "state": "open"}"#,
        )
        .unwrap();
        assert_eq!(pr.title, "feat: add thing");
        assert_eq!(pr.commits, 3);
    }
}
