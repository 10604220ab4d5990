// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! validate-commit - Contribution standards check for a single commit.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use validate_commit::cli::{run, Cli};
use validate_commit::VcError;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.debug);

    if let Err(e) = ctrlc::set_handler(|| {
        std::process::exit(VcError::Interrupted.exit_code());
    }) {
        tracing::debug!("Failed to install interrupt handler: {}", e);
    }

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("\n{}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Set up logging/tracing.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("validate_commit=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
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
        tracing::debug!("Debug logging enabled");
    }
}
