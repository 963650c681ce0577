//! Error types and error reporting for the lexer.
//!
//! This module defines:
//!
//! - Diagnostics attached to error tokens, with source position information
//! - Helpful tips for each kind of malformed lexeme
//! - The error type of the command line front end

pub mod errors;
