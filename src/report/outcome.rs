// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Final pass/fail decision.

use crate::rules::{RuleViolation, Severity};
use crate::scope::ScopeOutcome;

use super::reporter::Reporter;

/// Final trace for a clean title.
pub const SUCCESS_MESSAGE: &str = "✅ PR title validated successfully";

/// Final trace for a title with warnings only.
pub const SUCCESS_WITH_WARNINGS_MESSAGE: &str = "✅ PR title validated with warnings";

/// Failure signalled when any rule fails with error severity.
pub const NONCONFORMING_MESSAGE: &str =
    "🛑 Pull request title does not conform to the conventional commit spec";

/// The decision for one title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintOutcome {
    pub passed: bool,
    pub has_warnings: bool,
}

impl LintOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }
}

/// Trace each violation on its severity channel.
pub fn trace_violations(violations: &[RuleViolation], reporter: &mut dyn Reporter) {
    for violation in violations {
        match violation.severity {
            Severity::Error => reporter.error(&format!("⛔️ Commitlint: {}", violation.message)),
            Severity::Warning => {
                reporter.warning(&format!("⚠️ Commitlint: {}", violation.message))
            }
        }
    }
}

/// Combine lint and scope results and emit the final signal.
///
/// A scope failure wins the failure message over rule errors.
pub fn conclude(
    violations: &[RuleViolation],
    scope: &ScopeOutcome,
    reporter: &mut dyn Reporter,
) -> LintOutcome {
    let has_errors = violations.iter().any(RuleViolation::is_error);
    let has_warnings = violations.iter().any(|v| !v.is_error());

    if let Some(message) = scope.failure_message() {
        reporter.set_failed(&message);
        return LintOutcome {
            passed: false,
            has_warnings,
        };
    }

    if has_errors {
        reporter.set_failed(NONCONFORMING_MESSAGE);
        return LintOutcome {
            passed: false,
            has_warnings,
        };
    }

    if has_warnings {
        reporter.info(SUCCESS_WITH_WARNINGS_MESSAGE);
    } else {
        reporter.info(SUCCESS_MESSAGE);
    }

    LintOutcome {
        passed: true,
        has_warnings,
    }
}
