// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule declarations as written in rules files.
//!
//! A declaration follows the commitlint convention of
//! `[level, condition, value]`, where the level is `0` (disabled),
//! `1` (warning) or `2` (error) and the condition is `always` or `never`.
//! Rules files may also use a table with `level`, `when` and `value` keys,
//! or a bare level.

use serde::Deserialize;

use super::validator::Severity;

/// Configured level of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum RuleLevel {
    Disabled,
    Warning,
    Error,
}

impl RuleLevel {
    /// The severity violations are reported with, if the rule is active.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            RuleLevel::Disabled => None,
            RuleLevel::Warning => Some(Severity::Warning),
            RuleLevel::Error => Some(Severity::Error),
        }
    }
}

impl TryFrom<u8> for RuleLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, String> {
        match value {
            0 => Ok(RuleLevel::Disabled),
            1 => Ok(RuleLevel::Warning),
            2 => Ok(RuleLevel::Error),
            other => Err(format!("level must be 0, 1 or 2, got {}", other)),
        }
    }
}

/// Whether the rule asserts or negates its condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCondition {
    #[default]
    Always,
    Never,
}

impl RuleCondition {
    /// Whether the condition is negated.
    pub fn is_never(&self) -> bool {
        matches!(self, RuleCondition::Never)
    }
}

/// The value argument of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Number(usize),
    Text(String),
    List(Vec<String>),
}

/// A normalised rule configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    pub level: RuleLevel,
    pub condition: RuleCondition,
    pub value: Option<RuleValue>,
}

impl RuleConfig {
    /// Create a configuration.
    pub fn new(level: RuleLevel, condition: RuleCondition, value: Option<RuleValue>) -> Self {
        Self {
            level,
            condition,
            value,
        }
    }
}

/// Any of the accepted spellings of a rule declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RuleDeclaration {
    Full(RuleLevel, RuleCondition, RuleValue),
    Conditioned(RuleLevel, RuleCondition),
    Level(RuleLevel),
    Table {
        level: RuleLevel,
        #[serde(default)]
        when: RuleCondition,
        #[serde(default)]
        value: Option<RuleValue>,
    },
}

impl From<RuleDeclaration> for RuleConfig {
    fn from(declaration: RuleDeclaration) -> Self {
        match declaration {
            RuleDeclaration::Full(level, condition, value) => {
                RuleConfig::new(level, condition, Some(value))
            }
            RuleDeclaration::Conditioned(level, condition) => {
                RuleConfig::new(level, condition, None)
            }
            RuleDeclaration::Level(level) => RuleConfig::new(level, RuleCondition::Always, None),
            RuleDeclaration::Table { level, when, value } => RuleConfig::new(level, when, value),
        }
    }
}
