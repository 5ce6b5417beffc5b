// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.
//!
//! Every input falls back to the environment variable GitHub Actions sets
//! for it, so the binary runs unchanged as an action step.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_API_URL;

/// prlint - Conventional commit linter for pull request titles
#[derive(Parser, Debug, Clone)]
#[command(name = "prlint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Lint a pull request title against the conventional commit spec", long_about = None)]
pub struct Cli {
    /// Token used to fetch the pull request from the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Root of the checked-out repository
    #[arg(long, env = "GITHUB_WORKSPACE", default_value = ".")]
    pub workspace: PathBuf,

    /// Title to lint instead of fetching it from the pull request
    #[arg(long, env = "INPUT_PRTITLE")]
    pub title: Option<String>,

    /// Custom rules file, relative to the workspace
    #[arg(long, env = "INPUT_COMMITLINTRULESPATH")]
    pub rules: Option<PathBuf>,

    /// '|'-separated commit types that must carry a scope
    #[arg(long, env = "INPUT_ENFORCEDSCOPETYPES")]
    pub enforced_scope_types: Option<String>,

    /// Regular expression the scope must contain a match for
    #[arg(long, env = "INPUT_SCOPEREGEX")]
    pub scope_regex: Option<String>,

    /// Name of the triggering event
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,

    /// Path to the triggering event's JSON payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// How results are written
    #[arg(long, value_enum, default_value_t = ReporterKind::Auto)]
    pub reporter: ReporterKind,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// Output style for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReporterKind {
    /// GitHub workflow commands when running in Actions, console otherwise
    Auto,
    /// GitHub Actions workflow commands
    Github,
    /// Plain terminal output
    Console,
}

impl ReporterKind {
    /// Resolve `Auto` given whether we run inside GitHub Actions.
    pub fn resolve(self, in_actions: bool) -> ReporterKind {
        match self {
            ReporterKind::Auto if in_actions => ReporterKind::Github,
            ReporterKind::Auto => ReporterKind::Console,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "prlint",
            "--token",
            "TOKEN",
            "--workspace",
            "/work",
            "--title",
            "feat: add thing",
            "--rules",
            "commitlint.rules.toml",
            "--enforced-scope-types",
            "feat|fix",
            "--scope-regex",
            "[A-Z]+-[0-9]+",
            "--reporter",
            "console",
        ])
        .unwrap();

        assert_eq!(cli.token.as_deref(), Some("TOKEN"));
        assert_eq!(cli.workspace, PathBuf::from("/work"));
        assert_eq!(cli.title.as_deref(), Some("feat: add thing"));
        assert_eq!(cli.enforced_scope_types.as_deref(), Some("feat|fix"));
        assert_eq!(cli.reporter, ReporterKind::Console);
    }

    #[test]
    fn test_reporter_resolve() {
        assert_eq!(ReporterKind::Auto.resolve(true), ReporterKind::Github);
        assert_eq!(ReporterKind::Auto.resolve(false), ReporterKind::Console);
        assert_eq!(ReporterKind::Console.resolve(true), ReporterKind::Console);
    }
}
