// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Loading of custom rules files.

use crate::config::{resolve_in_workspace, Configuration};
use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::declaration::{RuleConfig, RuleDeclaration};
use super::engine::RuleSet;

/// On-disk layout of a custom rules file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RulesFile {
    #[serde(default)]
    rules: BTreeMap<String, RuleDeclaration>,
}

/// Build the rule set for a run.
///
/// Without a custom rules path the conventional defaults are returned.
/// Otherwise the file's declarations are layered over the defaults.
pub fn load_rule_set(config: &Configuration) -> Result<RuleSet> {
    let mut rules = RuleSet::conventional()?;

    if let Some(rules_path) = &config.rules_path {
        let path = resolve_in_workspace(&config.workspace, rules_path);
        let declarations = load_rules_file(&path)?;
        tracing::debug!(
            "Loaded {} rule declarations from {:?}",
            declarations.len(),
            path
        );
        for (name, declaration) in declarations {
            match rules.get(&name) {
                Some(existing) => tracing::debug!(
                    "Overriding rule {} ({:?} -> {:?})",
                    name,
                    existing.config().level,
                    declaration.level
                ),
                None => tracing::debug!("Adding rule {}", name),
            }
            rules.declare(&name, declaration)?;
        }
    }

    Ok(rules)
}

/// Read rule declarations from a TOML or JSON file.
///
/// The format is chosen by extension: `.json` is JSON, anything else TOML.
pub fn load_rules_file(path: &Path) -> Result<Vec<(String, RuleConfig)>> {
    if !path.is_file() {
        return Err(ConfigError::RulesNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RulesParse {
        path: path.to_path_buf(),
        message: format!("Failed to read rules file: {}", e),
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let file: RulesFile = if is_json {
        serde_json::from_str(&content).map_err(|e| ConfigError::RulesParse {
            path: path.to_path_buf(),
            message: format!("Failed to parse JSON: {}", e),
        })?
    } else {
        toml::from_str(&content).map_err(|e| ConfigError::RulesParse {
            path: path.to_path_buf(),
            message: format!("Failed to parse TOML: {}", e),
        })?
    };

    Ok(file
        .rules
        .into_iter()
        .map(|(name, declaration)| (name, declaration.into()))
        .collect())
}
