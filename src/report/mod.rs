// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Result reporting to the calling environment.

mod outcome;
mod reporter;

pub use outcome::{
    conclude, trace_violations, LintOutcome, NONCONFORMING_MESSAGE, SUCCESS_MESSAGE,
    SUCCESS_WITH_WARNINGS_MESSAGE,
};
pub use reporter::{
    escape_command_data, ConsoleReporter, GithubActionsReporter, MemoryReporter, Report, Reporter,
};
