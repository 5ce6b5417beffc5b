// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit header structure and parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Conventional commit header: `type(scope)!: subject`.
    static ref HEADER_REGEX: Regex =
        Regex::new(r"^(?P<type>\w*)(?:\((?P<scope>.*)\))?(?P<breaking>!)?: (?P<subject>.*)$").unwrap();
}

/// A pull request title split into its conventional commit parts.
///
/// Parsing never fails. A header that does not follow the grammar leaves
/// `commit_type`, `scope` and `subject` unset so that rules can report on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommitTitle {
    /// The raw header as given.
    pub header: String,
    /// Commit type (feat, fix, etc.).
    pub commit_type: Option<String>,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject line after the colon.
    pub subject: Option<String>,
    /// Whether the `!` breaking marker is present.
    pub is_breaking: bool,
}

impl ParsedCommitTitle {
    /// Parse a title. Only the first line is considered.
    pub fn parse(title: &str) -> Self {
        let header = title.lines().next().unwrap_or("").to_string();

        let Some(captures) = HEADER_REGEX.captures(&header) else {
            tracing::debug!("Title does not match the conventional header grammar");
            return Self {
                header,
                commit_type: None,
                scope: None,
                subject: None,
                is_breaking: false,
            };
        };

        let part = |name: &str| {
            captures
                .name(name)
                .map(|m| m.as_str().to_string())
                .filter(|s| !s.is_empty())
        };

        let commit_type = part("type");
        let scope = part("scope");
        let subject = part("subject");
        let is_breaking = captures.name("breaking").is_some();

        Self {
            header,
            commit_type,
            scope,
            subject,
            is_breaking,
        }
    }

    /// The commit type, or an empty string when absent.
    pub fn type_str(&self) -> &str {
        self.commit_type.as_deref().unwrap_or("")
    }
}
