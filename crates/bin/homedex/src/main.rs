//! # homedex
//!
//! Composition root that wires the adapters together and runs the
//! interactive session.
//!
//! ## Responsibilities
//! - Parse command-line arguments and the optional config file
//! - Initialize logging (stderr, so replies on stdout stay clean)
//! - Choose the data file: argument, `HOMEDEX_FILE`, prompt, config default
//! - Load the collection and hand stdin over to the session loop
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod cli;
mod config;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use homedex_adapter_console::Console;
use homedex_adapter_file::{FsScriptSource, JsonFileSource};
use homedex_app::session::Session;
use homedex_app::store::DeviceStore;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load(&cli.config)
        .with_context(|| format!("cannot load {}", cli.config.display()))?;
    init_tracing(&config.logging.filter);
    tracing::debug!(config = %cli.config.display(), "configuration loaded");

    let interactive = io::stdin().is_terminal();
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    let data_file = data_file(cli, &config, &mut console, interactive)?;
    tracing::info!(path = %data_file.display(), "using data file");

    let mut session = Session::new(
        DeviceStore::new(),
        JsonFileSource::new(data_file),
        console,
        FsScriptSource::default(),
        io::stdout(),
    );
    session.load();
    session.run_interactive().context("cannot read commands")?;
    Ok(())
}

fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the data file path.
///
/// The prompt only appears on a terminal; piped input goes straight to the
/// command loop.
fn data_file<R: BufRead, W: Write>(
    cli: &Cli,
    config: &Config,
    console: &mut Console<R, W>,
    interactive: bool,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.data_file() {
        return Ok(path);
    }
    if interactive {
        let question = format!("data file [{}]: ", config.storage.file.display());
        let answer = console
            .ask(&question)
            .context("cannot read the data file path")?;
        if let Some(answer) = answer.filter(|answer| !answer.is_empty()) {
            return Ok(PathBuf::from(answer));
        }
    }
    Ok(config.storage.file.clone())
}
