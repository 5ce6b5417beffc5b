// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! prlint - Conventional commit linter for pull request titles
//!
//! Validates a single pull request title against the Conventional Commits
//! grammar and an optional scope policy, then reports the result to GitHub
//! Actions.
//!
//! # Features
//!
//! - **Commitlint-style rules**: conventional defaults, overridable from a
//!   TOML or JSON rules file
//! - **Scope policy**: require scopes for chosen types and match them
//!   against a regular expression
//! - **Title resolution**: take the title from an input or fetch it from
//!   the GitHub API
//!
//! # Example
//!
//! ```no_run
//! use prlint::config::Configuration;
//! use prlint::github::{EventContext, GithubClient};
//! use prlint::report::ConsoleReporter;
//!
//! let config = Configuration {
//!     explicit_title: Some("feat(api): add pagination".to_string()),
//!     ..Configuration::default()
//! };
//! let client = GithubClient::new(&config.api_url);
//! let outcome = prlint::lint::run(
//!     &config,
//!     &EventContext::default(),
//!     &client,
//!     &mut ConsoleReporter,
//! )
//! .unwrap();
//! assert!(outcome.passed);
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod github;
pub mod lint;
pub mod report;
pub mod rules;
pub mod scope;

// Re-exports for convenience
pub use config::Configuration;
pub use error::{PrLintError, Result};
pub use report::LintOutcome;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of prlint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
