//! Human-readable rendering of scanned tokens.

pub mod printer;
