// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Output channels of the calling CI environment.

use console::style;
use std::io::Write;

/// The four channels a run reports through.
pub trait Reporter {
    /// Informational message.
    fn info(&mut self, message: &str);

    /// Warning annotation.
    fn warning(&mut self, message: &str);

    /// Error annotation.
    fn error(&mut self, message: &str);

    /// Mark the run as failed.
    fn set_failed(&mut self, message: &str);
}

/// Escape a message for a GitHub Actions workflow command.
pub fn escape_command_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Reporter emitting GitHub Actions workflow commands on stdout.
pub struct GithubActionsReporter<W: Write> {
    out: W,
}

impl GithubActionsReporter<std::io::Stdout> {
    /// Reporter writing to stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> GithubActionsReporter<W> {
    /// Reporter writing to the given sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter and return its sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            tracing::debug!("Failed to write report line: {}", e);
        }
    }
}

impl<W: Write> Reporter for GithubActionsReporter<W> {
    fn info(&mut self, message: &str) {
        self.emit(message);
    }

    fn warning(&mut self, message: &str) {
        self.emit(&format!("::warning::{}", escape_command_data(message)));
    }

    fn error(&mut self, message: &str) {
        self.emit(&format!("::error::{}", escape_command_data(message)));
    }

    fn set_failed(&mut self, message: &str) {
        self.error(message);
    }
}

/// Reporter for local terminals.
///
/// Info goes to stdout, everything else to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&mut self, message: &str) {
        println!("{}", message);
    }

    fn warning(&mut self, message: &str) {
        eprintln!("{}", style(message).for_stderr().yellow());
    }

    fn error(&mut self, message: &str) {
        eprintln!("{}", style(message).for_stderr().red());
    }

    fn set_failed(&mut self, message: &str) {
        eprintln!("{}", style(message).for_stderr().red().bold());
    }
}

/// A message captured by [`MemoryReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Info(String),
    Warning(String),
    Error(String),
    Failed(String),
}

/// Reporter that records every message in order.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub reports: Vec<Report>,
}

impl MemoryReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Info messages, in order.
    pub fn infos(&self) -> Vec<&str> {
        self.reports
            .iter()
            .filter_map(|r| match r {
                Report::Info(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Warning messages, in order.
    pub fn warnings(&self) -> Vec<&str> {
        self.reports
            .iter()
            .filter_map(|r| match r {
                Report::Warning(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Error messages, in order.
    pub fn errors(&self) -> Vec<&str> {
        self.reports
            .iter()
            .filter_map(|r| match r {
                Report::Error(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Failure messages, in order.
    pub fn failures(&self) -> Vec<&str> {
        self.reports
            .iter()
            .filter_map(|r| match r {
                Report::Failed(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn info(&mut self, message: &str) {
        self.reports.push(Report::Info(message.to_string()));
    }

    fn warning(&mut self, message: &str) {
        self.reports.push(Report::Warning(message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.reports.push(Report::Error(message.to_string()));
    }

    fn set_failed(&mut self, message: &str) {
        self.reports.push(Report::Failed(message.to_string()));
    }
}
