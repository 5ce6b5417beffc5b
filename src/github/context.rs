// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Triggering event context.

use crate::error::{GithubError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Event names that carry pull request data.
const PULL_REQUEST_EVENTS: &[&str] = &["pull_request", "pull_request_target"];

/// The pull request a run was triggered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub number: u64,
    /// Owner of the base repository.
    pub owner: String,
    /// Name of the base repository.
    pub repo: String,
}

/// The triggering event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventContext {
    pub event_name: String,
    pub pull_request: Option<PullRequestRef>,
}

impl EventContext {
    /// The pull request, provided this is a pull request event.
    pub fn require_pull_request(&self) -> Result<&PullRequestRef> {
        if !PULL_REQUEST_EVENTS.contains(&self.event_name.as_str()) {
            return Err(GithubError::NotPullRequest {
                event_name: self.event_name.clone(),
            }
            .into());
        }
        self.pull_request
            .as_ref()
            .ok_or_else(|| GithubError::MissingPullRequest.into())
    }

    /// Parse an event payload.
    pub fn from_payload(event_name: &str, payload: &str) -> std::result::Result<Self, serde_json::Error> {
        let payload: EventPayload = serde_json::from_str(payload)?;
        Ok(Self {
            event_name: event_name.to_string(),
            pull_request: payload.pull_request.map(|pr| PullRequestRef {
                number: pr.number,
                owner: pr.base.user.login,
                repo: pr.base.repo.name,
            }),
        })
    }
}

/// Source of the event context, consulted only when the title must be fetched.
pub trait EventSource {
    /// Load the event context.
    fn event(&self) -> Result<EventContext>;
}

impl EventSource for EventContext {
    fn event(&self) -> Result<EventContext> {
        Ok(self.clone())
    }
}

/// Event context described by the Actions runner.
#[derive(Debug, Clone, Default)]
pub struct ActionsEvent {
    pub event_name: Option<String>,
    pub event_path: Option<PathBuf>,
}

impl ActionsEvent {
    fn read_payload(&self, event_name: &str, path: &Path) -> Result<EventContext> {
        let content = std::fs::read_to_string(path).map_err(|e| GithubError::EventPayload {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        EventContext::from_payload(event_name, &content).map_err(|e| {
            GithubError::EventPayload {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

impl EventSource for ActionsEvent {
    fn event(&self) -> Result<EventContext> {
        let event_name = self.event_name.clone().unwrap_or_default();
        match &self.event_path {
            Some(path) => self.read_payload(&event_name, path),
            None => Ok(EventContext {
                event_name,
                pull_request: None,
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    #[serde(default)]
    pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: u64,
    base: BasePayload,
}

#[derive(Debug, Deserialize)]
struct BasePayload {
    user: UserPayload,
    repo: RepoPayload,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    login: String,
}

#[derive(Debug, Deserialize)]
struct RepoPayload {
    name: String,
}
