// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for prlint.
//!
//! Only fatal conditions are errors here. Rule violations and scope policy
//! failures are ordinary lint results and never travel through `Result`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for prlint operations.
#[derive(Error, Debug)]
pub enum PrLintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // GitHub context and API errors
    #[error("GitHub error: {0}")]
    Github(#[from] GithubError),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}")]
    MissingRequired { key: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to convert scope regex '{pattern}' to a valid regular expression: {message}")]
    InvalidScopePattern { pattern: String, message: String },

    #[error("Custom rules file not found: {path}")]
    RulesNotFound { path: PathBuf },

    #[error("Failed to parse custom rules file {path}: {message}")]
    RulesParse { path: PathBuf, message: String },

    #[error("Found invalid rule name: {rule}")]
    UnknownRule { rule: String },

    #[error("Invalid configuration for rule '{rule}': {message}")]
    InvalidRule { rule: String, message: String },
}

/// Errors raised while resolving the pull request from GitHub.
#[derive(Error, Debug)]
pub enum GithubError {
    #[error("Expected a pull_request event, got '{event_name}'")]
    NotPullRequest { event_name: String },

    #[error("Event payload does not contain pull request data")]
    MissingPullRequest,

    #[error("Failed to read event payload {path}: {message}")]
    EventPayload { path: PathBuf, message: String },

    #[error("Request to {url} failed: {message}")]
    RequestFailed { url: String, message: String },

    #[error("GitHub API responded with {status} for {url}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    #[error("Invalid response from GitHub API: {message}")]
    InvalidResponse { message: String },
}

/// Result type alias for prlint operations.
pub type Result<T> = std::result::Result<T, PrLintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_not_found_display() {
        let err = ConfigError::RulesNotFound {
            path: PathBuf::from("/path/to/rules.toml"),
        };
        assert!(err.to_string().contains("/path/to/rules.toml"));
    }

    #[test]
    fn test_github_status_display() {
        let err = GithubError::Status {
            url: "https://api.github.com/repos/a/b/pulls/1".to_string(),
            status: 404,
            message: "Not Found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not Found"));
    }

    #[test]
    fn test_error_from_config_error() {
        let config_err = ConfigError::MissingRequired {
            key: "GITHUB_TOKEN".to_string(),
        };
        let err: PrLintError = config_err.into();
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }
}
