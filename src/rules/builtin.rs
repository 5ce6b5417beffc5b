// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in commitlint-compatible rules.

use crate::commit::ParsedCommitTitle;
use crate::error::{ConfigError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use super::declaration::{RuleCondition, RuleConfig, RuleLevel, RuleValue};
use super::validator::RuleViolation;

lazy_static! {
    static ref QUOTED_REGEX: Regex = Regex::new(r#"`.*?`|".*?"|'.*?'"#).unwrap();
}

/// Trait implemented by every rule in a rule set.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Evaluate the rule, returning a violation when it fails.
    fn evaluate(&self, title: &ParsedCommitTitle) -> Option<RuleViolation>;

    /// Get the rule name.
    fn name(&self) -> &str;
}

/// The header part a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Header,
    Type,
    Scope,
    Subject,
}

impl Field {
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "header" => Some(Field::Header),
            "type" => Some(Field::Type),
            "scope" => Some(Field::Scope),
            "subject" => Some(Field::Subject),
            _ => None,
        }
    }

    /// The field's value, empty when absent.
    fn value<'a>(&self, title: &'a ParsedCommitTitle) -> &'a str {
        match self {
            Field::Header => &title.header,
            Field::Type => title.commit_type.as_deref().unwrap_or(""),
            Field::Scope => title.scope.as_deref().unwrap_or(""),
            Field::Subject => title.subject.as_deref().unwrap_or(""),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Header => "header",
            Field::Type => "type",
            Field::Scope => "scope",
            Field::Subject => "subject",
        };
        write!(f, "{}", name)
    }
}

/// Letter case styles understood by the `*-case` rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
    Camel,
    Kebab,
    Pascal,
    Sentence,
    Snake,
    Start,
}

impl Case {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "lower-case" | "lowercase" => Some(Case::Lower),
            "upper-case" | "uppercase" => Some(Case::Upper),
            "camel-case" => Some(Case::Camel),
            "kebab-case" => Some(Case::Kebab),
            "pascal-case" => Some(Case::Pascal),
            "sentence-case" | "sentencecase" => Some(Case::Sentence),
            "snake-case" => Some(Case::Snake),
            "start-case" => Some(Case::Start),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Case::Lower => "lower-case",
            Case::Upper => "upper-case",
            Case::Camel => "camel-case",
            Case::Kebab => "kebab-case",
            Case::Pascal => "pascal-case",
            Case::Sentence => "sentence-case",
            Case::Snake => "snake-case",
            Case::Start => "start-case",
        }
    }

    /// Whether the input is written in this case.
    ///
    /// Input without a leading letter is in no case at all.
    pub fn matches(&self, input: &str) -> bool {
        let Some(first) = input.chars().next() else {
            return false;
        };
        if !first.is_alphabetic() {
            return false;
        }

        let alnum = |c: char| c.is_alphanumeric();
        match self {
            Case::Lower => input.to_lowercase() == input,
            Case::Upper => input.to_uppercase() == input,
            Case::Sentence => first.is_uppercase(),
            Case::Camel => first.is_lowercase() && input.chars().all(alnum),
            Case::Pascal => first.is_uppercase() && input.chars().all(alnum),
            Case::Kebab => is_delimited_lower(input, '-'),
            Case::Snake => is_delimited_lower(input, '_'),
            Case::Start => input.split(' ').all(is_start_case_word),
        }
    }
}

/// Whether a word survives start casing unchanged.
///
/// The word must be capitalised alphanumerics with no inner word boundary.
fn is_start_case_word(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let Some(first) = chars.first() else {
        return false;
    };
    if !chars.iter().all(|c| c.is_alphanumeric()) || first.is_lowercase() {
        return false;
    }

    let boundary = chars.windows(2).any(|pair| {
        (pair[0].is_lowercase() && pair[1].is_uppercase())
            || (pair[0].is_alphabetic() != pair[1].is_alphabetic())
    });
    let acronym_boundary = chars
        .windows(3)
        .any(|t| t[0].is_uppercase() && t[1].is_uppercase() && t[2].is_lowercase());

    !boundary && !acronym_boundary
}

/// Remove quoted and backticked spans before a case comparison.
fn strip_quoted(input: &str) -> String {
    QUOTED_REGEX.replace_all(input, "").trim().to_string()
}

fn is_delimited_lower(input: &str, delimiter: char) -> bool {
    input
        .split(delimiter)
        .all(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_digit() || c.is_lowercase()))
}

fn join_cases(cases: &[Case]) -> String {
    cases.iter().map(Case::as_str).collect::<Vec<_>>().join(", ")
}

/// The evaluation a named rule performs.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Check {
    Empty(Field),
    Case(Field, Vec<Case>),
    Enum(Field, Vec<String>),
    MaxLength(Field, usize),
    MinLength(Field, usize),
    FullStop(Field, String),
    Trim,
    ExclamationMark,
}

/// A named rule bound to its configuration.
#[derive(Debug, Clone)]
pub struct ConfiguredRule {
    name: String,
    config: RuleConfig,
    check: Check,
}

impl ConfiguredRule {
    /// Build a rule from its name and declaration.
    ///
    /// Fails for unknown rule names and for values of the wrong shape.
    pub fn new(name: &str, config: RuleConfig) -> Result<Self> {
        let check = build_check(name, config.value.as_ref())?;
        Ok(Self {
            name: name.to_string(),
            config,
            check,
        })
    }

    /// The rule's configuration.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    fn violation(&self, message: String) -> Option<RuleViolation> {
        let severity = self.config.level.severity()?;
        Some(RuleViolation::new(&self.name, severity, message))
    }
}

impl Rule for ConfiguredRule {
    fn evaluate(&self, title: &ParsedCommitTitle) -> Option<RuleViolation> {
        if self.config.level == RuleLevel::Disabled {
            return None;
        }

        let never = self.config.condition.is_never();
        let not = if never { "not " } else { "" };

        match &self.check {
            Check::Empty(field) => {
                let empty = field.value(title).is_empty();
                if never && empty {
                    self.violation(format!("{} may not be empty", field))
                } else if !never && !empty {
                    self.violation(format!("{} must be empty", field))
                } else {
                    None
                }
            }
            Check::Case(field, cases) => {
                // Values that do not open with an ASCII letter carry no case.
                let value = field.value(title);
                if !value.starts_with(|c: char| c.is_ascii_alphabetic()) {
                    return None;
                }
                let stripped = strip_quoted(value);
                if stripped.is_empty() {
                    return None;
                }
                let any_match = cases.iter().any(|c| c.matches(&stripped));
                if any_match == never {
                    self.violation(format!("{} must {}be {}", field, not, join_cases(cases)))
                } else {
                    None
                }
            }
            Check::Enum(field, allowed) => {
                let value = field.value(title);
                if value.is_empty() {
                    return None;
                }
                let listed = allowed.iter().any(|a| a == value);
                if listed == never {
                    self.violation(format!(
                        "{} must {}be one of [{}]",
                        field,
                        not,
                        allowed.join(", ")
                    ))
                } else {
                    None
                }
            }
            Check::MaxLength(field, max) => {
                let len = field.value(title).chars().count();
                if len > *max {
                    let mut message =
                        format!("{} must not be longer than {} characters", field, max);
                    if *field == Field::Header {
                        message.push_str(&format!(", current length is {}", len));
                    }
                    self.violation(message)
                } else {
                    None
                }
            }
            Check::MinLength(field, min) => {
                let value = field.value(title);
                let len = value.chars().count();
                if !value.is_empty() && len < *min {
                    let mut message =
                        format!("{} must not be shorter than {} characters", field, min);
                    if *field == Field::Header {
                        message.push_str(&format!(", current length is {}", len));
                    }
                    self.violation(message)
                } else {
                    None
                }
            }
            Check::FullStop(field, stop) => {
                let value = field.value(title);
                if value.is_empty() {
                    return None;
                }
                let ends = value.ends_with(stop.as_str());
                if never && ends {
                    self.violation(format!("{} may not end with full stop", field))
                } else if !never && !ends {
                    self.violation(format!("{} must end with full stop", field))
                } else {
                    None
                }
            }
            Check::Trim => {
                let header = &title.header;
                let starts = header.starts_with(char::is_whitespace);
                let ends = header.ends_with(char::is_whitespace);
                match (starts, ends) {
                    (true, true) => {
                        self.violation("header must not be surrounded by whitespace".to_string())
                    }
                    (true, false) => {
                        self.violation("header must not start with whitespace".to_string())
                    }
                    (false, true) => {
                        self.violation("header must not end with whitespace".to_string())
                    }
                    (false, false) => None,
                }
            }
            Check::ExclamationMark => {
                if title.is_breaking == never {
                    self.violation(format!(
                        "subject must {}have an exclamation mark in the subject to identify a breaking change",
                        not
                    ))
                } else {
                    None
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn build_check(name: &str, value: Option<&RuleValue>) -> Result<Check> {
    let unknown = || ConfigError::UnknownRule {
        rule: name.to_string(),
    };
    let invalid = |message: &str| ConfigError::InvalidRule {
        rule: name.to_string(),
        message: message.to_string(),
    };

    match name {
        "header-trim" => return Ok(Check::Trim),
        "subject-exclamation-mark" => return Ok(Check::ExclamationMark),
        _ => {}
    }

    let (prefix, kind) = name.split_once('-').ok_or_else(unknown)?;
    let field = Field::from_prefix(prefix).ok_or_else(unknown)?;

    let check = match (kind, field) {
        ("empty", Field::Type | Field::Scope | Field::Subject) => Check::Empty(field),
        ("case", _) => {
            let names: Vec<&str> = match value {
                Some(RuleValue::Text(s)) => vec![s.as_str()],
                Some(RuleValue::List(items)) => items.iter().map(String::as_str).collect(),
                _ => return Err(invalid("expected a case name or a list of case names").into()),
            };
            let cases = names
                .iter()
                .map(|n| Case::parse(n).ok_or_else(|| invalid(&format!("unknown case '{}'", n))))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            if cases.is_empty() {
                return Err(invalid("expected at least one case name").into());
            }
            Check::Case(field, cases)
        }
        ("enum", Field::Type | Field::Scope | Field::Subject) => match value {
            Some(RuleValue::List(items)) => Check::Enum(field, items.clone()),
            _ => return Err(invalid("expected a list of values").into()),
        },
        ("max-length", _) => match value {
            Some(RuleValue::Number(n)) => Check::MaxLength(field, *n),
            _ => return Err(invalid("expected a number").into()),
        },
        ("min-length", _) => match value {
            Some(RuleValue::Number(n)) => Check::MinLength(field, *n),
            _ => return Err(invalid("expected a number").into()),
        },
        ("full-stop", Field::Header | Field::Subject) => match value {
            Some(RuleValue::Text(s)) => Check::FullStop(field, s.clone()),
            None => Check::FullStop(field, ".".to_string()),
            _ => return Err(invalid("expected a string").into()),
        },
        _ => return Err(unknown().into()),
    };

    Ok(check)
}

/// Types accepted by the default `type-enum` rule.
pub const DEFAULT_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// The default conventional rule declarations, in evaluation order.
pub fn default_declarations() -> Vec<(&'static str, RuleConfig)> {
    use RuleCondition::{Always, Never};
    use RuleLevel::Error;

    let list = |items: &[&str]| Some(RuleValue::List(items.iter().map(|s| s.to_string()).collect()));

    vec![
        (
            "header-max-length",
            RuleConfig::new(Error, Always, Some(RuleValue::Number(100))),
        ),
        ("header-trim", RuleConfig::new(Error, Always, None)),
        (
            "subject-case",
            RuleConfig::new(
                Error,
                Never,
                list(&["sentence-case", "start-case", "pascal-case", "upper-case"]),
            ),
        ),
        ("subject-empty", RuleConfig::new(Error, Never, None)),
        (
            "subject-full-stop",
            RuleConfig::new(Error, Never, Some(RuleValue::Text(".".to_string()))),
        ),
        (
            "type-case",
            RuleConfig::new(Error, Always, Some(RuleValue::Text("lower-case".to_string()))),
        ),
        ("type-empty", RuleConfig::new(Error, Never, None)),
        ("type-enum", RuleConfig::new(Error, Always, list(DEFAULT_TYPES))),
    ]
}
