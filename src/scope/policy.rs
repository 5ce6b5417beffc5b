// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Scope policy checks.

use crate::commit::ParsedCommitTitle;
use crate::config::ScopeMatcher;

/// Result of checking a title's scope against the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeOutcome {
    /// The type is not in the enforced list.
    Skipped { commit_type: String },
    /// No scope, and none required.
    NotRequired,
    /// A scope is present and no pattern is configured.
    Present { scope: String },
    /// The scope contains a match for the pattern.
    Matched { scope: String, pattern: String },
    /// The type requires a scope but none was given.
    MissingScope { commit_type: String },
    /// The scope does not match the pattern.
    PatternMismatch { scope: String, pattern: String },
}

impl ScopeOutcome {
    /// Whether the policy is satisfied.
    pub fn is_pass(&self) -> bool {
        !matches!(
            self,
            ScopeOutcome::MissingScope { .. } | ScopeOutcome::PatternMismatch { .. }
        )
    }

    /// Informational message for passing outcomes worth reporting.
    pub fn trace(&self) -> Option<String> {
        match self {
            ScopeOutcome::Skipped { commit_type } => {
                Some(format!("⏩ Skipping scope check for type \"{}\"", commit_type))
            }
            ScopeOutcome::Matched { scope, pattern } => Some(format!(
                "👀 Found scope \"{}\". Linting with \"{}\"",
                scope, pattern
            )),
            _ => None,
        }
    }

    /// Failure message for failing outcomes.
    pub fn failure_message(&self) -> Option<String> {
        match self {
            ScopeOutcome::MissingScope { commit_type } => Some(format!(
                "🛑 PR title of type '{}' must contain a scope",
                commit_type
            )),
            ScopeOutcome::PatternMismatch { pattern, .. } => Some(format!(
                "🛑 PR title must contain a scope which matches the regular expression: {}",
                pattern
            )),
            _ => None,
        }
    }
}

/// Check a parsed title against the scope policy.
///
/// With an enforced type list, types outside it are skipped and types in it
/// must carry a scope. Without a list, any scope that is present is checked.
/// The pattern only runs once a scope is known to exist.
pub fn check_scope(
    title: &ParsedCommitTitle,
    enforced_scope_types: Option<&[String]>,
    scope_pattern: Option<&dyn ScopeMatcher>,
) -> ScopeOutcome {
    let commit_type = title.type_str();

    if let Some(types) = enforced_scope_types {
        if !types.iter().any(|t| t == commit_type) {
            return ScopeOutcome::Skipped {
                commit_type: commit_type.to_string(),
            };
        }
        if title.scope.is_none() {
            return ScopeOutcome::MissingScope {
                commit_type: commit_type.to_string(),
            };
        }
    }

    let Some(scope) = title.scope.as_deref() else {
        return ScopeOutcome::NotRequired;
    };

    match scope_pattern {
        Some(pattern) if pattern.matches(scope) => ScopeOutcome::Matched {
            scope: scope.to_string(),
            pattern: pattern.to_string(),
        },
        Some(pattern) => ScopeOutcome::PatternMismatch {
            scope: scope.to_string(),
            pattern: pattern.to_string(),
        },
        None => ScopeOutcome::Present {
            scope: scope.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScopePattern;

    fn pattern() -> ScopePattern {
        ScopePattern::new(r"\b(FOO|BAR|BAZ)\b-[0-9]+").unwrap()
    }

    fn types(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_skips_types_outside_enforced_list() {
        let title = ParsedCommitTitle::parse("chore: valid subject");
        let enforced = types(&["feat", "fix"]);
        let outcome = check_scope(&title, Some(&enforced), Some(&pattern()));
        assert!(outcome.is_pass());
        assert_eq!(
            outcome.trace().unwrap(),
            "⏩ Skipping scope check for type \"chore\""
        );
    }

    #[test]
    fn test_missing_scope_for_enforced_type() {
        let title = ParsedCommitTitle::parse("chore: subject is valid");
        let enforced = types(&["feat", "fix", "chore"]);
        let outcome = check_scope(&title, Some(&enforced), Some(&pattern()));
        assert!(!outcome.is_pass());
        assert_eq!(
            outcome.failure_message().unwrap(),
            "🛑 PR title of type 'chore' must contain a scope"
        );
    }

    #[test]
    fn test_pattern_mismatch() {
        let title = ParsedCommitTitle::parse("feat(QUX-1234): subject");
        let outcome = check_scope(&title, None, Some(&pattern()));
        assert!(!outcome.is_pass());
        assert_eq!(
            outcome.failure_message().unwrap(),
            r"🛑 PR title must contain a scope which matches the regular expression: /\b(FOO|BAR|BAZ)\b-[0-9]+/g"
        );
    }

    #[test]
    fn test_pattern_match() {
        let title = ParsedCommitTitle::parse("feat(FOO-123): subject");
        let outcome = check_scope(&title, None, Some(&pattern()));
        assert!(outcome.is_pass());
        assert_eq!(
            outcome.trace().unwrap(),
            r#"👀 Found scope "FOO-123". Linting with "/\b(FOO|BAR|BAZ)\b-[0-9]+/g""#
        );
    }

    #[test]
    fn test_pattern_match_for_enforced_type() {
        let title = ParsedCommitTitle::parse("feat(FOO-123): subject");
        let enforced = types(&["feat", "fix"]);
        let outcome = check_scope(&title, Some(&enforced), Some(&pattern()));
        assert!(matches!(outcome, ScopeOutcome::Matched { .. }));
    }

    #[test]
    fn test_no_scope_without_enforced_list_passes() {
        let title = ParsedCommitTitle::parse("fix: no scope here");
        let outcome = check_scope(&title, None, Some(&pattern()));
        assert_eq!(outcome, ScopeOutcome::NotRequired);
        assert!(outcome.trace().is_none());
    }

    #[test]
    fn test_required_scope_without_pattern() {
        let title = ParsedCommitTitle::parse("fix(anything): subject");
        let enforced = types(&["fix"]);
        let outcome = check_scope(&title, Some(&enforced), None);
        assert_eq!(
            outcome,
            ScopeOutcome::Present {
                scope: "anything".to_string()
            }
        );
        assert!(outcome.is_pass());
    }

    #[test]
    fn test_unparsed_title_is_skipped_when_list_configured() {
        let title = ParsedCommitTitle::parse("not conventional");
        let enforced = types(&["feat"]);
        let outcome = check_scope(&title, Some(&enforced), None);
        assert_eq!(
            outcome,
            ScopeOutcome::Skipped {
                commit_type: String::new()
            }
        );
    }
}
