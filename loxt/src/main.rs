//! Lox CLI - command-line driver for the Lox scanner.
//!
//! With a script argument the file is scanned and its tokens printed; with
//! none an interactive prompt scans standard input line by line.

mod commands;
mod config;
mod error;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::{OutputFormat, OutputOptions};
use commands::{run_prompt, run_script, PromptArgs, RunArgs};
use config::Config;
use error::{LoxError, Result};

/// Exit status for failures that carry no status of their own.
const EXIT_SOFTWARE: u8 = 70;

/// Lox - scan Lox source into tokens
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source into tokens", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, env = "LOX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "LOX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "LOX_NO_COLOR")]
    no_color: bool,

    /// Token output format (default: from config)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Do not quote source lines under diagnostics
    #[arg(long)]
    no_snippets: bool,

    /// Script to scan; starts the prompt when omitted
    scripts: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let lox_err = err.downcast_ref::<LoxError>();
            // Lexical errors have already been reported one by one.
            if !matches!(lox_err, Some(LoxError::Scan(_))) {
                eprintln!("{:#}", err);
            }
            ExitCode::from(lox_err.map_or(EXIT_SOFTWARE, LoxError::exit_code))
        },
    }
}

/// Load configuration, initialize logging and dispatch to a mode.
fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    let options = OutputOptions {
        format: cli.format.unwrap_or(config.format),
        snippets: config.snippets && !cli.no_snippets,
    };

    match cli.scripts.as_slice() {
        [] => {
            let summary = run_prompt(PromptArgs {
                input: io::stdin().lock(),
                out: io::stdout().lock(),
                err: io::stderr().lock(),
                prompt: config.prompt,
                options,
            })?;
            tracing::debug!(lines = summary.lines, "session finished");
            Ok(())
        },
        [script] => run_file(script, options),
        _ => Err(LoxError::Usage.into()),
    }
}

/// Read a script and scan it.
fn run_file(path: &Path, options: OutputOptions) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path)
        .map_err(LoxError::from)
        .with_context(|| format!("could not read file at {}", path.display()))?;

    run_script(RunArgs {
        name: path.display().to_string(),
        source,
        options,
        out: io::stdout().lock(),
        err: io::stderr().lock(),
    })?;
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so token output stays clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LoxError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
