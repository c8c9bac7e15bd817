//! codex-theme binary entry point
//!
//! Developed with 💀 by The CodeX Team (c)2025

use clap::Parser;
use codex_theme::{Cli, run};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries generated output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
