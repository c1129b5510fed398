//! Text based Minesweeper for the terminal.

mod cli;
mod command;
mod messages;
mod session;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::Args;
use crate::session::{Session, SessionSettings};

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(log_level) = args.verbose.log_level() {
        init_logging(log_level);
    }

    let settings = SessionSettings::from_args(&args)?;
    log::debug!("seed: {}", settings.seed);

    Session::new(io::stdin().lock(), io::stdout().lock(), settings).run()
}

/// Sends `log` records to stderr through `tracing-subscriber`; `RUST_LOG` can refine the level.
fn init_logging(log_level: log::Level) {
    let max_level = match log_level {
        log::Level::Error => LevelFilter::ERROR,
        log::Level::Warn => LevelFilter::WARN,
        log::Level::Info => LevelFilter::INFO,
        log::Level::Debug => LevelFilter::DEBUG,
        log::Level::Trace => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(max_level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();
}
