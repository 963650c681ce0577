//! Lexical analysis module.
//!
//! This module contains the scanner that converts source lines into a
//! sequence of tokens. It handles:
//!
//! - Blanks, punctuation and one- or two-character operators
//! - Keywords and identifiers
//! - Numeric literals in decimal, real, binary, octal and hexadecimal form
//! - String literals and unterminated string detection
//! - One-line comments and multi-line comments spanning several lines
//! - Token position tracking (1-based line and column)

pub mod cursor;
pub mod lexer;
pub mod numbers;
pub mod tokens;
