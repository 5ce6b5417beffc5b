// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command execution.

use crate::config::{non_empty, parse_enforced_scope_types, parse_scope_pattern, Configuration};
use crate::error::Result;
use crate::github::{ActionsEvent, GithubClient};
use crate::lint;
use crate::report::{ConsoleReporter, GithubActionsReporter, LintOutcome, Reporter};

use super::args::{Cli, ReporterKind};

/// Run the CLI and return the process exit code.
pub fn run(cli: Cli) -> i32 {
    let in_actions = std::env::var("GITHUB_ACTIONS")
        .map(|v| v == "true")
        .unwrap_or(false);

    match cli.reporter.resolve(in_actions) {
        ReporterKind::Github => execute(&cli, &mut GithubActionsReporter::stdout()),
        _ => execute(&cli, &mut ConsoleReporter),
    }
}

fn execute(cli: &Cli, reporter: &mut dyn Reporter) -> i32 {
    match run_lint(cli, reporter) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            reporter.set_failed(&format!("Failed to run action with error: {}", e));
            1
        }
    }
}

fn run_lint(cli: &Cli, reporter: &mut dyn Reporter) -> Result<LintOutcome> {
    let config = build_configuration(cli)?;
    tracing::debug!("Running with configuration: {:?}", config);

    let event = ActionsEvent {
        event_name: non_empty(cli.event_name.clone()),
        event_path: cli.event_path.clone().filter(|p| !p.as_os_str().is_empty()),
    };
    let client = GithubClient::new(&config.api_url);

    lint::run(&config, &event, &client, reporter)
}

/// Build the run configuration from parsed arguments.
///
/// Empty values are treated as unset, matching how the Actions runner
/// passes inputs that were not provided.
pub fn build_configuration(cli: &Cli) -> Result<Configuration> {
    let enforced_scope_types = parse_enforced_scope_types(cli.enforced_scope_types.as_deref())?;
    let scope_pattern = parse_scope_pattern(cli.scope_regex.as_deref())?;

    Ok(Configuration {
        token: non_empty(cli.token.clone()),
        workspace: cli.workspace.clone(),
        explicit_title: non_empty(cli.title.clone()),
        rules_path: cli.rules.clone().filter(|p| !p.as_os_str().is_empty()),
        enforced_scope_types,
        scope_pattern,
        api_url: cli.api_url.clone(),
    })
}
