//! loxc-util - Shared foundation types for the loxc front end
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Every phase of the front end reports problems the same way: it hands a
//! line number and a message to a [`Reporter`]. This crate owns that hook and
//! the default sink behind it, the diagnostic [`Handler`].
//!
//! DIAGNOSTIC FLOW:
//! ----------------
//! ```text
//!   scanner ──(line, message)──▶ Reporter ──▶ Handler ──▶ driver (stderr)
//!                                   │
//!                                   └──▶ any FnMut(usize, &str) closure
//! ```
//!
//! The scanner never decides what an error means for the program as a
//! whole. It reports and keeps going; the caller asks the handler afterwards
//! whether anything went wrong ([`Handler::has_errors`]) and chooses whether
//! to continue to later stages.
//!
//! # Example
//!
//! ```
//! use loxc_util::{Handler, Reporter};
//!
//! let mut handler = Handler::new();
//! handler.report(3, "Unexpected character: @.");
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "[line 3] Error: Unexpected character: @."
//! );
//! ```

#![warn(missing_docs)]

pub mod diagnostic;

pub use diagnostic::{Diagnostic, Handler, Reporter};
