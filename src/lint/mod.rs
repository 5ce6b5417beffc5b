// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The title validation pipeline.
//!
//! Rules are loaded first so that a broken rules file fails before any
//! network access. The title is then resolved, linted, checked against the
//! scope policy and reported.

mod title;

pub use title::{resolve_title, ResolvedTitle, TitleSource};

use crate::commit::ParsedCommitTitle;
use crate::config::{Configuration, ScopeMatcher};
use crate::error::Result;
use crate::github::{EventSource, PullRequestApi};
use crate::report::{conclude, trace_violations, LintOutcome, Reporter};
use crate::rules::{lint, load_rule_set};
use crate::scope::check_scope;

/// Validate one pull request title.
///
/// Returns an error only for fatal conditions (configuration or fetch).
/// Rule and scope failures are reported and reflected in the outcome.
pub fn run(
    config: &Configuration,
    event: &dyn EventSource,
    api: &dyn PullRequestApi,
    reporter: &mut dyn Reporter,
) -> Result<LintOutcome> {
    let rules = load_rule_set(config)?;

    let resolved = resolve_title(
        config.explicit_title.as_deref(),
        config.token.as_deref(),
        event,
        api,
        reporter,
    )?;

    match &config.rules_path {
        Some(path) => reporter.info(&format!(
            "📋 Found custom commitlint rules file at \"{}\". Checking PR title with commitlint",
            path.display()
        )),
        None => reporter.info("📋 Checking PR title with commitlint"),
    }

    tracing::debug!("Linting {:?} title with {} rules", resolved.source, rules.len());
    let violations = lint(&resolved.title, &rules);
    trace_violations(&violations, reporter);

    let parsed = ParsedCommitTitle::parse(&resolved.title);

    let scope = check_scope(
        &parsed,
        config.enforced_scope_types.as_deref(),
        config.scope_pattern.as_ref().map(|p| p as &dyn ScopeMatcher),
    );
    if let Some(trace) = scope.trace() {
        reporter.info(&trace);
    }

    Ok(conclude(&violations, &scope, reporter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScopePattern;
    use crate::github::{EventContext, PullRequest, PullRequestRef};
    use crate::report::{MemoryReporter, NONCONFORMING_MESSAGE, SUCCESS_MESSAGE, SUCCESS_WITH_WARNINGS_MESSAGE};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const RULES: &str = r#"
[rules]
subject-case = [2, "never", ["upper-case"]]
subject-max-length = [1, "always", 20]
"#;

    struct StubApi(String);

    impl PullRequestApi for StubApi {
        fn get_pull_request(&self, _token: &str, _pull_request: &PullRequestRef) -> Result<PullRequest> {
            Ok(PullRequest {
                title: self.0.clone(),
                commits: 1,
            })
        }
    }

    struct Fixture {
        _dir: TempDir,
        config: Configuration,
    }

    fn fixture(custom_rules: bool) -> Fixture {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("commitlint.rules.toml"), RULES).unwrap();
        let config = Configuration {
            token: Some("TOKEN".to_string()),
            workspace: dir.path().to_path_buf(),
            rules_path: custom_rules.then(|| PathBuf::from("commitlint.rules.toml")),
            ..Configuration::default()
        };
        Fixture { _dir: dir, config }
    }

    fn scope_pattern() -> Option<ScopePattern> {
        Some(ScopePattern::new(r"\b(FOO|BAR|BAZ)\b-[0-9]+").unwrap())
    }

    fn event() -> EventContext {
        EventContext {
            event_name: "pull_request".to_string(),
            pull_request: Some(PullRequestRef {
                number: 1234,
                owner: "bob_cratchett".to_string(),
                repo: "stuff".to_string(),
            }),
        }
    }

    fn run_with(config: &Configuration, title: &str) -> (LintOutcome, MemoryReporter) {
        let mut reporter = MemoryReporter::new();
        let outcome = run(config, &event(), &StubApi(title.to_string()), &mut reporter).unwrap();
        (outcome, reporter)
    }

    #[test]
    fn test_valid_titles_with_custom_rules() {
        let fx = fixture(true);
        for title in [
            "fix: Subject is valid",
            "feat(BAR-1234): Subject is valid",
            "feat!: Subject is valid",
        ] {
            let (outcome, reporter) = run_with(&fx.config, title);
            assert!(outcome.passed, "{}", title);
            assert!(reporter.infos().contains(
                &"📋 Found custom commitlint rules file at \"commitlint.rules.toml\". Checking PR title with commitlint"
            ));
            assert_eq!(reporter.infos().last(), Some(&SUCCESS_MESSAGE));
            assert!(reporter.errors().is_empty());
            assert!(reporter.warnings().is_empty());
            assert!(reporter.failures().is_empty());
        }
    }

    #[test]
    fn test_valid_title_without_custom_rules() {
        let fx = fixture(false);
        let (outcome, reporter) = run_with(&fx.config, "fix: commit title is valid");
        assert!(outcome.passed);
        assert!(!outcome.has_warnings);
        assert!(reporter.infos().contains(&"📋 Checking PR title with commitlint"));
        assert_eq!(reporter.infos().last(), Some(&SUCCESS_MESSAGE));
        assert_eq!(
            reporter.infos().iter().filter(|m| **m == SUCCESS_MESSAGE).count(),
            1
        );
    }

    #[test]
    fn test_subject_starting_with_digit_passes_defaults() {
        let fx = fixture(false);
        let (outcome, reporter) = run_with(&fx.config, "fix: 404 page crashes on load");
        assert!(outcome.passed);
        assert!(reporter.errors().is_empty());
        assert_eq!(reporter.infos().last(), Some(&SUCCESS_MESSAGE));
    }

    #[test]
    fn test_missing_type_fails() {
        let fx = fixture(true);
        let (outcome, reporter) = run_with(&fx.config, "this is not a conventional commit");
        assert!(!outcome.passed);
        assert!(reporter.errors().contains(&"⛔️ Commitlint: type may not be empty"));
        assert_eq!(reporter.failures(), vec![NONCONFORMING_MESSAGE]);
    }

    #[test]
    fn test_custom_error_rule_fails() {
        let fx = fixture(true);
        let (outcome, reporter) = run_with(&fx.config, "feat(BAR-1234): TITLES SHOULD BE LOWERCASE");
        assert!(!outcome.passed);
        assert!(reporter
            .errors()
            .contains(&"⛔️ Commitlint: subject must not be upper-case"));
        assert_eq!(reporter.failures(), vec![NONCONFORMING_MESSAGE]);
    }

    #[test]
    fn test_custom_warning_rule_passes() {
        let fx = fixture(true);
        let (outcome, reporter) = run_with(
            &fx.config,
            "feat(BAR-1234): subject should not be longer than 20 characters long",
        );
        assert!(outcome.passed);
        assert!(outcome.has_warnings);
        assert_eq!(
            reporter.warnings(),
            vec!["⚠️ Commitlint: subject must not be longer than 20 characters"]
        );
        assert_eq!(reporter.infos().last(), Some(&SUCCESS_WITH_WARNINGS_MESSAGE));
        assert!(reporter.failures().is_empty());
    }

    #[test]
    fn test_scope_pattern_mismatch_fails() {
        let mut fx = fixture(true);
        fx.config.scope_pattern = scope_pattern();
        let (outcome, reporter) = run_with(
            &fx.config,
            "feat(QUX-1234): subject should not be longer than 20 characters long",
        );
        assert!(!outcome.passed);
        assert_eq!(
            reporter.failures(),
            vec![r"🛑 PR title must contain a scope which matches the regular expression: /\b(FOO|BAR|BAZ)\b-[0-9]+/g"]
        );
        // The warning is still traced before the failure.
        assert_eq!(reporter.warnings().len(), 1);
    }

    #[test]
    fn test_scope_pattern_match_passes() {
        let mut fx = fixture(true);
        fx.config.scope_pattern = scope_pattern();
        let (outcome, reporter) = run_with(
            &fx.config,
            "feat(FOO-123): subject should not be longer than 20 characters long",
        );
        assert!(outcome.passed);
        assert!(reporter
            .infos()
            .contains(&r#"👀 Found scope "FOO-123". Linting with "/\b(FOO|BAR|BAZ)\b-[0-9]+/g""#));
        assert!(reporter.failures().is_empty());
    }

    #[test]
    fn test_scope_pattern_match_for_required_type() {
        let mut fx = fixture(true);
        fx.config.scope_pattern = scope_pattern();
        fx.config.enforced_scope_types = Some(vec!["feat".to_string(), "fix".to_string()]);
        let (outcome, reporter) = run_with(
            &fx.config,
            "feat(FOO-123): subject should not be longer than 20 characters long",
        );
        assert!(outcome.passed);
        assert!(reporter
            .infos()
            .contains(&r#"👀 Found scope "FOO-123". Linting with "/\b(FOO|BAR|BAZ)\b-[0-9]+/g""#));
        assert_eq!(reporter.infos().last(), Some(&SUCCESS_WITH_WARNINGS_MESSAGE));
    }

    #[test]
    fn test_type_omitted_from_scope_checks() {
        let mut fx = fixture(true);
        fx.config.scope_pattern = scope_pattern();
        fx.config.enforced_scope_types = Some(vec!["feat".to_string(), "fix".to_string()]);
        let (outcome, reporter) = run_with(&fx.config, "chore: valid subject");
        assert!(outcome.passed);
        assert!(reporter
            .infos()
            .contains(&"⏩ Skipping scope check for type \"chore\""));
        assert_eq!(reporter.infos().last(), Some(&SUCCESS_MESSAGE));
    }

    #[test]
    fn test_missing_scope_for_required_type() {
        let mut fx = fixture(true);
        fx.config.scope_pattern = scope_pattern();
        fx.config.enforced_scope_types = Some(vec![
            "feat".to_string(),
            "fix".to_string(),
            "chore".to_string(),
        ]);
        let (outcome, reporter) = run_with(&fx.config, "chore: subject is valid");
        assert!(!outcome.passed);
        assert_eq!(
            reporter.failures(),
            vec!["🛑 PR title of type 'chore' must contain a scope"]
        );
    }

    #[test]
    fn test_broken_rules_file_aborts_before_fetch() {
        let mut fx = fixture(true);
        fx.config.rules_path = Some(PathBuf::from("missing.toml"));
        let mut reporter = MemoryReporter::new();
        let result = run(&fx.config, &event(), &StubApi("fix: x".to_string()), &mut reporter);
        assert!(result.is_err());
        assert!(reporter.reports.is_empty());
    }
}
