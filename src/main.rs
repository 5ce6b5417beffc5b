// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! prlint - Conventional commit linter for pull request titles.

use clap::Parser;
use prlint::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    std::process::exit(run(cli));
}

/// Set up logging/tracing on stderr.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("prlint=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!(
            "Debug logging enabled for prlint {}",
            prlint::version::version_string()
        );
    }
}
