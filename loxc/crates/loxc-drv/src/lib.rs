//! loxc-drv - Driver for the Lox scanner
//!
//! Runs the scanner over a script file or over lines typed at an
//! interactive prompt, prints the resulting tokens and reports lexical
//! errors on stderr in `[line N] Error: message` form.
//!
//! # Example
//!
//! ```
//! use loxc_drv::{Lox, OutputFormat};
//!
//! let mut lox = Lox::new(OutputFormat::Text, "> ");
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//!
//! lox.run("1 + @", &mut out, &mut err).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Number 1 1e0\nPlus + nil\nEOF  nil\n"
//! );
//! assert_eq!(
//!     String::from_utf8(err).unwrap(),
//!     "[line 1] Error: Unexpected character: @.\n"
//! );
//! assert!(lox.had_error());
//! ```

pub mod config;
pub mod error;

use std::io::{BufRead, ErrorKind, Write};
use std::path::Path;

use loxc_util::Handler;
use tracing::{debug, info, warn};

pub use config::{Config, OutputFormat};
pub use error::{LoxError, Result};

/// Exit status for a malformed command line or a script with lexical errors.
pub const EX_USAGE: u8 = 64;

/// A scanning session.
///
/// Holds the diagnostic handler shared by every run and the sticky
/// "had error" flag that decides the exit status of a file run.
#[derive(Debug)]
pub struct Lox {
    handler: Handler,
    had_error: bool,
    format: OutputFormat,
    prompt: String,
}

impl Lox {
    /// Creates a session printing tokens in `format`.
    pub fn new(format: OutputFormat, prompt: impl Into<String>) -> Self {
        Self {
            handler: Handler::new(),
            had_error: false,
            format,
            prompt: prompt.into(),
        }
    }

    /// Creates a session from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.output.format, config.repl.prompt.clone())
    }

    /// Returns true if any run since the last reset reported an error.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Clears the error flag.
    pub fn reset_error(&mut self) {
        self.had_error = false;
    }

    /// Scans `source`, writes its tokens to `out` and its diagnostics to `err`.
    pub fn run(&mut self, source: &str, out: &mut dyn Write, err: &mut dyn Write) -> Result<()> {
        let tokens = loxc_lex::scan(source, &mut self.handler);
        let diagnostics = self.handler.take_diagnostics();
        debug!(
            tokens = tokens.len(),
            errors = diagnostics.len(),
            "scanned {} bytes",
            source.len()
        );

        match self.format {
            OutputFormat::Text => {
                for token in &tokens {
                    writeln!(out, "{}", token)?;
                }
            },
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &tokens)?;
                writeln!(out)?;
            },
        }

        for diagnostic in &diagnostics {
            writeln!(err, "{}", diagnostic)?;
        }
        if !diagnostics.is_empty() {
            self.had_error = true;
        }

        Ok(())
    }

    /// Reads and scans the script at `path`.
    pub fn run_file(&mut self, path: &Path, out: &mut dyn Write, err: &mut dyn Write) -> Result<()> {
        info!("scanning {}", path.display());
        let source = std::fs::read_to_string(path)?;
        self.run(&source, out, err)
    }

    /// Reads lines from `input` until end of input, scanning each one.
    ///
    /// The error flag is reset after every line, so one bad line does not
    /// taint the next. Lines that are not valid UTF-8 are skipped.
    pub fn run_prompt(
        &mut self,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            line.clear();
            match input.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {},
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    warn!("skipping input line that is not valid UTF-8");
                    continue;
                },
                Err(e) => return Err(e.into()),
            }

            self.run(&line, out, err)?;
            self.reset_error();
        }

        debug!("end of input");
        Ok(())
    }
}

impl Default for Lox {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
