// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule violation types.

use std::fmt;

/// How a failing rule affects the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Reported but does not fail the build.
    Warning,
    /// Fails the build.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolation {
    /// Name of the rule that failed, e.g. `type-empty`.
    pub rule_name: String,
    /// Severity configured for the rule.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

impl RuleViolation {
    /// Create a new violation.
    pub fn new(rule_name: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_name: rule_name.into(),
            severity,
            message: message.into(),
        }
    }

    /// Whether this violation fails the build.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
