//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides the [`Reporter`] hook that front-end phases report
//! through, and the [`Handler`] that collects what they report.
//!
//! # Examples
//!
//! ## Reporting into a closure
//!
//! ```
//! use loxc_util::diagnostic::Reporter;
//!
//! let mut seen = Vec::new();
//! let mut on_error = |line: usize, message: &str| seen.push((line, message.to_string()));
//! on_error.report(1, "Unterminated string.");
//!
//! assert_eq!(seen, vec![(1, "Unterminated string.".to_string())]);
//! ```
//!
//! ## Collecting into a handler
//!
//! ```
//! use loxc_util::diagnostic::{Diagnostic, Handler};
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(Diagnostic::error("unexpected token", 4));
//!
//! if handler.has_errors() {
//!     eprintln!("Scan failed with {} errors", handler.error_count());
//! }
//! ```

use std::cell::RefCell;
use std::fmt;

/// A lexical error and the line it was found on
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::Diagnostic;
///
/// let diag = Diagnostic::error("Unexpected character: #.", 2);
/// assert_eq!(diag.line, 2);
/// assert_eq!(diag.to_string(), "[line 2] Error: Unexpected character: #.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source line (1-based)
    pub line: usize,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

/// The error hook a front-end phase reports through.
///
/// A reporter receives the 1-based line and the finished message text. It
/// returns nothing and cannot stop the caller; aggregating a "had error" flag
/// is the reporter's business.
///
/// Any `FnMut(usize, &str)` closure is a reporter, and so is [`Handler`].
pub trait Reporter {
    /// Report a problem found on `line`.
    fn report(&mut self, line: usize, message: &str);
}

impl<F> Reporter for F
where
    F: FnMut(usize, &str),
{
    fn report(&mut self, line: usize, message: &str) {
        self(line, message)
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics through a shared reference and
/// provides methods for querying and draining them.
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{Handler, Reporter};
///
/// let mut handler = Handler::new();
/// handler.report(1, "Unexpected character: $.");
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all diagnostics, in the order they were reported
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drain all diagnostics, leaving the handler empty
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::{Diagnostic, Handler};
    ///
    /// let handler = Handler::new();
    /// handler.emit_diagnostic(Diagnostic::error("boom", 1));
    ///
    /// let drained = handler.take_diagnostics();
    /// assert_eq!(drained.len(), 1);
    /// assert!(!handler.has_errors());
    /// ```
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for Handler {
    fn report(&mut self, line: usize, message: &str) {
        self.emit_diagnostic(Diagnostic::error(message, line));
    }
}
