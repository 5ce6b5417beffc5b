// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Resolution of the title to validate.

use crate::error::{ConfigError, Result};
use crate::github::{EventSource, PullRequestApi};
use crate::report::Reporter;

/// Where the title came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    /// Passed in directly.
    Explicit,
    /// Fetched from the GitHub API.
    Fetched,
}

/// A title and its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTitle {
    pub title: String,
    pub source: TitleSource,
}

/// Resolve the title, preferring an explicit one over the API.
///
/// The event is only consulted, and the API only called, when no explicit
/// title is given.
pub fn resolve_title(
    explicit_title: Option<&str>,
    token: Option<&str>,
    event: &dyn EventSource,
    api: &dyn PullRequestApi,
    reporter: &mut dyn Reporter,
) -> Result<ResolvedTitle> {
    if let Some(title) = explicit_title.filter(|t| !t.is_empty()) {
        reporter.info(&format!("🕵️ Found PR title in action args: \"{}\"", title));
        return Ok(ResolvedTitle {
            title: title.to_string(),
            source: TitleSource::Explicit,
        });
    }

    let context = event.event()?;
    let pull_request = context.require_pull_request()?;
    let token = token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ConfigError::MissingRequired {
            key: "GITHUB_TOKEN".to_string(),
        })?;

    let fetched = api.get_pull_request(token, pull_request)?;
    reporter.info(&format!("🕵️ Found PR title from Github API: \"{}\"", fetched.title));

    Ok(ResolvedTitle {
        title: fetched.title,
        source: TitleSource::Fetched,
    })
}
