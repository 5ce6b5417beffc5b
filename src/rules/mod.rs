// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for title validation.
//!
//! Rules are declared commitlint-style by name with a level, a condition
//! and an optional value. The conventional defaults can be overridden or
//! extended from a custom rules file.

mod builtin;
mod declaration;
mod engine;
mod loader;
mod validator;

pub use builtin::{default_declarations, Case, ConfiguredRule, Field, Rule, DEFAULT_TYPES};
pub use declaration::{RuleCondition, RuleConfig, RuleDeclaration, RuleLevel, RuleValue};
pub use engine::{lint, RuleSet};
pub use loader::{load_rule_set, load_rules_file};
pub use validator::{RuleViolation, Severity};
