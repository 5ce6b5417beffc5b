// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule set and linting.

use crate::commit::ParsedCommitTitle;
use crate::error::Result;

use super::builtin::{default_declarations, ConfiguredRule, Rule};
use super::declaration::RuleConfig;
use super::validator::RuleViolation;

/// The active rules, in evaluation order.
#[derive(Debug)]
pub struct RuleSet {
    configured: Vec<ConfiguredRule>,
    extra: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// A rule set with no rules.
    pub fn empty() -> Self {
        Self {
            configured: Vec::new(),
            extra: Vec::new(),
        }
    }

    /// The default conventional commit rule set.
    pub fn conventional() -> Result<Self> {
        let mut set = Self::empty();
        for (name, config) in default_declarations() {
            set.declare(name, config)?;
        }
        Ok(set)
    }

    /// Declare a named rule.
    ///
    /// An existing rule with the same name is replaced in place, keeping
    /// its evaluation position. New rules are appended.
    pub fn declare(&mut self, name: &str, config: RuleConfig) -> Result<()> {
        let rule = ConfiguredRule::new(name, config)?;
        match self.configured.iter_mut().find(|r| r.name() == name) {
            Some(existing) => *existing = rule,
            None => self.configured.push(rule),
        }
        Ok(())
    }

    /// Add a rule implemented in code. These run after declared rules.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.extra.push(rule);
    }

    /// Look up a declared rule by name.
    pub fn get(&self, name: &str) -> Option<&ConfiguredRule> {
        self.configured.iter().find(|r| r.name() == name)
    }

    /// Iterate over every rule in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> + '_ {
        let configured = self.configured.iter().map(|r| r as &dyn Rule);
        let extra = self.extra.iter().map(|r| &**r as &dyn Rule);
        configured.chain(extra)
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.configured.len() + self.extra.len()
    }

    /// Whether the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evaluate every rule against a parsed title.
    pub fn evaluate(&self, title: &ParsedCommitTitle) -> Vec<RuleViolation> {
        self.rules().filter_map(|rule| rule.evaluate(title)).collect()
    }
}

/// Lint a title against a rule set.
pub fn lint(title: &str, rules: &RuleSet) -> Vec<RuleViolation> {
    let parsed = ParsedCommitTitle::parse(title);
    tracing::debug!("Parsed title: {:?}", parsed);
    rules.evaluate(&parsed)
}
