//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused components:
//! - `core` - Main Scanner struct, scan loop and dispatch
//! - `operator` - One-or-two character operators
//! - `comment` - Slash and line comments
//! - `string` - String literals
//! - `number` - Number literals
//! - `identifier` - Identifiers and keywords

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Scanner;
pub(crate) use identifier::is_ident_start;
