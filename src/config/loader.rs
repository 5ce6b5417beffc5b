// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conversion of raw input strings into configuration values.

use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::ScopePattern;

/// Drop unset and blank values.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse the `|`-delimited list of types that require a scope.
///
/// Blank segments are ignored. An input that contains no types at all is
/// rejected rather than silently disabling the policy.
pub fn parse_enforced_scope_types(raw: Option<&str>) -> Result<Option<Vec<String>>> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Ok(None);
    };

    let types: Vec<String> = raw
        .split('|')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if types.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "enforcedScopeTypes".to_string(),
            message: format!("Failed parsing enforcedScopeTypes from '{}'", raw),
        }
        .into());
    }

    Ok(Some(types))
}

/// Compile the scope regular expression.
pub fn parse_scope_pattern(raw: Option<&str>) -> Result<Option<ScopePattern>> {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return Ok(None);
    };

    ScopePattern::new(raw).map(Some).map_err(|e| {
        ConfigError::InvalidScopePattern {
            pattern: raw.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Resolve a configured path against the workspace root.
pub fn resolve_in_workspace(workspace: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace.join(path)
    }
}
