use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

use crate::Position;

/// A diagnostic explaining why a token was classified as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::LoneBang => "LoneBang",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedComment { .. } => "UnterminatedComment",
            ErrorImpl::InvalidNumber { .. } => "InvalidNumber",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } if *character == '\t' => {
                ErrorTip::Suggestion(String::from(
                    "Tabs are not whitespace here, use spaces or --tabs-as-blanks",
                ))
            }
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::LoneBang => {
                ErrorTip::Suggestion(String::from("`!` is only valid as part of `!=`"))
            }
            ErrorImpl::UnterminatedString { .. } => ErrorTip::Suggestion(String::from(
                "String literals must be closed with `'` on the same line",
            )),
            ErrorImpl::UnterminatedComment { .. } => ErrorTip::Suggestion(String::from(
                "Comment opened with `/*` is never closed with `*/`",
            )),
            ErrorImpl::InvalidNumber { token, base } => ErrorTip::Suggestion(format!(
                "Invalid {} number: `{}`",
                base, token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("`!` without a following `=`")]
    LoneBang,
    #[error("unterminated string literal: {token:?}")]
    UnterminatedString { token: String },
    #[error("unterminated multi-line comment ({lines} lines consumed)")]
    UnterminatedComment { lines: usize },
    #[error("invalid {base} number: {token:?}")]
    InvalidNumber { token: String, base: &'static str },
}

/// Failures of the command line front end. These never reach the scanner.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}
