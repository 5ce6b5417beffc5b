// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for prlint.
//!
//! This module handles argument parsing and turns arguments into the run
//! configuration.

pub mod args;
mod dispatch;

pub use args::{Cli, ReporterKind};
pub use dispatch::{build_configuration, run};
