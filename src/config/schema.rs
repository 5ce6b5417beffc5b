// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.

use regex::Regex;
use std::fmt;
use std::path::PathBuf;

/// Default GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Configuration for a single prlint run.
///
/// Built once by the CLI layer and passed by reference into the pipeline.
/// Nothing below the CLI reads the process environment.
#[derive(Clone)]
pub struct Configuration {
    /// Token used to authenticate against the GitHub API.
    pub token: Option<String>,

    /// Root of the checked-out working tree.
    pub workspace: PathBuf,

    /// Title supplied directly, bypassing the API.
    pub explicit_title: Option<String>,

    /// Custom rules file, as configured (workspace-relative or absolute).
    pub rules_path: Option<PathBuf>,

    /// Commit types for which a scope is mandatory.
    pub enforced_scope_types: Option<Vec<String>>,

    /// Pattern the scope must contain a match for.
    pub scope_pattern: Option<ScopePattern>,

    /// GitHub REST API base URL.
    pub api_url: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            token: None,
            workspace: PathBuf::from("."),
            explicit_title: None,
            rules_path: None,
            enforced_scope_types: None,
            scope_pattern: None,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("workspace", &self.workspace)
            .field("explicit_title", &self.explicit_title)
            .field("rules_path", &self.rules_path)
            .field("enforced_scope_types", &self.enforced_scope_types)
            .field("scope_pattern", &self.scope_pattern.as_ref().map(ScopePattern::source))
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Predicate deciding whether a scope satisfies the configured pattern.
///
/// `Display` renders the pattern the way it appears in failure messages.
pub trait ScopeMatcher: fmt::Display {
    /// Whether the scope contains a match.
    fn matches(&self, scope: &str) -> bool;
}

/// A compiled scope regular expression.
///
/// Matching is unanchored: the scope passes when any part of it matches.
#[derive(Debug, Clone)]
pub struct ScopePattern {
    regex: Regex,
}

impl ScopePattern {
    /// Compile a pattern from its source.
    pub fn new(source: &str) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(source)?,
        })
    }

    /// The pattern source as supplied.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }
}

impl ScopeMatcher for ScopePattern {
    fn matches(&self, scope: &str) -> bool {
        self.regex.is_match(scope)
    }
}

impl fmt::Display for ScopePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/g", self.source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.explicit_title.is_none());
        assert!(config.scope_pattern.is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Configuration {
            token: Some("ghs_secret".to_string()),
            ..Configuration::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("ghs_secret"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_scope_pattern_display() {
        let pattern = ScopePattern::new(r"\b(FOO|BAR|BAZ)\b-[0-9]+").unwrap();
        assert_eq!(pattern.to_string(), r"/\b(FOO|BAR|BAZ)\b-[0-9]+/g");
    }

    #[test]
    fn test_scope_pattern_matches_anywhere() {
        let pattern = ScopePattern::new(r"\b(FOO|BAR|BAZ)\b-[0-9]+").unwrap();
        assert!(pattern.matches("FOO-123"));
        assert!(pattern.matches("api,BAR-9"));
        assert!(!pattern.matches("QUX-1234"));
        assert!(!pattern.matches("FOOBAR-1"));
    }
}
