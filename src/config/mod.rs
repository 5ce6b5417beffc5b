// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for prlint.
//!
//! This module defines the immutable run configuration and the helpers that
//! turn raw action inputs into typed values.

mod loader;
mod schema;

pub use loader::{non_empty, parse_enforced_scope_types, parse_scope_pattern, resolve_in_workspace};
pub use schema::*;
