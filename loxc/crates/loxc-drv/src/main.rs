//! Lox CLI - scans Lox source and prints its tokens.
//!
//! With a script argument the whole file is scanned once; without one an
//! interactive prompt scans each line as it is entered.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use loxc_drv::{Config, Lox, LoxError, OutputFormat, Result, EX_USAGE};

/// Lox - scan Lox source code into tokens
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source code into tokens", long_about = None)]
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
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Script to scan; starts an interactive prompt when omitted
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(LoxError::Usage(usage)) => {
            eprintln!("{}", usage.trim_end());
            ExitCode::from(EX_USAGE)
        },
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

/// Parses the command line, sets up logging and configuration, and runs
/// the script or the prompt.
fn run() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(ExitCode::SUCCESS);
        },
        Err(e) => return Err(LoxError::Usage(e.render().to_string())),
    };

    let (mut config, fallback) = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    if let Some(e) = fallback {
        warn!("{}; using default configuration", e);
    }

    if let Some(format) = cli.format {
        config.output.format = format;
    }
    debug!(format = %config.output.format, "configuration loaded");

    let mut lox = Lox::from_config(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();

    match cli.script {
        Some(path) => {
            lox.run_file(&path, &mut out, &mut err)?;
            out.flush()?;
            if lox.had_error() {
                return Ok(ExitCode::from(EX_USAGE));
            }
        },
        None => {
            let stdin = io::stdin();
            lox.run_prompt(&mut stdin.lock(), &mut out, &mut err)?;
            writeln!(out)?;
        },
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token output on stdout stays machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
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
        .map_err(|e| LoxError::Logging(e.to_string()))?;

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// An explicit path must load. A discovered file that fails to load is
/// handed back alongside the defaults so it can be logged once logging is up.
fn load_config(config_path: Option<&Path>) -> Result<(Config, Option<LoxError>)> {
    match config_path {
        Some(path) => Ok((Config::load_from_path(path)?, None)),
        None => match Config::load() {
            Ok(config) => Ok((config, None)),
            Err(e) => Ok((Config::default(), Some(e))),
        },
    }
}
