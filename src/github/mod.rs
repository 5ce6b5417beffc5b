// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! GitHub event context and API access.

mod client;
mod context;

pub use client::{GithubClient, PullRequest, PullRequestApi};
pub use context::{ActionsEvent, EventContext, EventSource, PullRequestRef};
