use std::{
    collections::HashMap,
    io::{self, BufRead},
};

use tracing::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_SIMPLE_TOKEN, MK_TOKEN,
};

use super::{
    cursor::Cursor,
    numbers::{base_name, classify_number, has_base_marker},
    tokens::{reserved_lookup, Token, TokenKind},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct LexerOptions {
    /// Treat `'\t'` like `' '` instead of reporting it as an error.
    pub tabs_as_blanks: bool,
}

/// Batch scanner over a sequence of source lines.
///
/// A `Lexer` holds only immutable tables, so one instance can scan any
/// number of inputs and always produces the same tokens for the same lines.
#[derive(Debug, Clone)]
pub struct Lexer {
    keywords: HashMap<&'static str, TokenKind>,
    options: LexerOptions,
}

#[derive(Default)]
struct ScanState {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    line: usize,
}

impl ScanState {
    fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.line, column = token.column, "token");
        self.tokens.push(token);
    }

    fn push_error(&mut self, token: Token, error: ErrorImpl) {
        self.errors.push(Error::new(
            error,
            Position {
                line: token.line,
                column: token.column,
            },
        ));
        self.push(token);
    }
}

enum CommentEnd<S> {
    SameLine,
    /// Closed on a later line; scanning resumes in it at the byte offset.
    NextLine(S, usize),
    Unterminated,
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer::with_options(LexerOptions::default())
    }

    pub fn with_options(options: LexerOptions) -> Lexer {
        Lexer {
            keywords: reserved_lookup(),
            options,
        }
    }

    pub fn keyword(&self, spelling: &str) -> Option<TokenKind> {
        self.keywords.get(spelling).copied()
    }

    pub fn scan<I, S>(&self, lines: I) -> Vec<Token>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.scan_with_errors(lines).0
    }

    /// Scans every line and returns the tokens together with one diagnostic
    /// per `TokenKind::Error` token, in source order.
    pub fn scan_with_errors<I, S>(&self, lines: I) -> (Vec<Token>, Vec<Error>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = ScanState::default();
        let mut lines = lines.into_iter();

        while let Some(line) = lines.next() {
            state.line += 1;

            let mut current = line;
            let mut start = 0;
            loop {
                let resumed = self.scan_line(&mut state, current.as_ref(), start, &mut lines);
                match resumed {
                    Some((next, offset)) => {
                        current = next;
                        start = offset;
                    }
                    None => break,
                }
            }
        }

        debug!(
            lines = state.line,
            tokens = state.tokens.len(),
            errors = state.errors.len(),
            "scan finished"
        );
        (state.tokens, state.errors)
    }

    /// Scans `line` from byte offset `start`. Returns the line to continue in
    /// when a multi-line comment pulled further lines from `lines`.
    fn scan_line<I, S>(
        &self,
        state: &mut ScanState,
        line: &str,
        start: usize,
        lines: &mut I,
    ) -> Option<(S, usize)>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cursor = Cursor::resume(line, start);

        while let Some(c) = cursor.first() {
            match c {
                ' ' => MK_SIMPLE_TOKEN!(state, cursor, TokenKind::Blank, ""),
                '\t' if self.options.tabs_as_blanks => {
                    MK_SIMPLE_TOKEN!(state, cursor, TokenKind::Blank, "")
                }
                ',' => MK_SIMPLE_TOKEN!(state, cursor, TokenKind::Comma, ","),
                ';' => MK_SIMPLE_TOKEN!(state, cursor, TokenKind::Semicolon, ";"),
                '(' => MK_SIMPLE_TOKEN!(state, cursor, TokenKind::OpenParen, "("),
                ')' => MK_SIMPLE_TOKEN!(state, cursor, TokenKind::CloseParen, ")"),
                '{' => MK_SIMPLE_TOKEN!(state, cursor, TokenKind::OpenBrace, "{"),
                '}' => MK_SIMPLE_TOKEN!(state, cursor, TokenKind::CloseBrace, "}"),
                '+' => MK_SIMPLE_TOKEN!(state, cursor, TokenKind::Add, "+"),
                '-' => MK_SIMPLE_TOKEN!(state, cursor, TokenKind::Sub, "-"),
                '*' => MK_SIMPLE_TOKEN!(state, cursor, TokenKind::Mul, "*"),
                '=' => scan_comparison(state, &mut cursor, TokenKind::Assignment, TokenKind::Equal),
                '<' => scan_comparison(state, &mut cursor, TokenKind::Less, TokenKind::LessOrEqual),
                '>' => scan_comparison(state, &mut cursor, TokenKind::Greater, TokenKind::GreaterOrEqual),
                '!' => scan_bang(state, &mut cursor),
                '/' => match cursor.second() {
                    Some('/') => scan_one_line_comment(state, &mut cursor),
                    Some('*') => match scan_multiline_comment(state, &mut cursor, lines) {
                        CommentEnd::SameLine => {}
                        CommentEnd::NextLine(next, offset) => return Some((next, offset)),
                        CommentEnd::Unterminated => return None,
                    },
                    _ => MK_SIMPLE_TOKEN!(state, cursor, TokenKind::Div, "/"),
                },
                '\'' => scan_string(state, &mut cursor),
                _ if is_identifier_start(c) => self.scan_identifier(state, &mut cursor),
                _ if c.is_ascii_digit() => scan_number(state, &mut cursor),
                _ => {
                    state.push_error(
                        MK_TOKEN!(TokenKind::Error, c.to_string(), state.line, cursor.column()),
                        ErrorImpl::UnrecognisedCharacter { character: c },
                    );
                    cursor.bump();
                }
            }
        }

        None
    }

    fn scan_identifier(&self, state: &mut ScanState, cursor: &mut Cursor) {
        let column = cursor.column();
        let start = cursor.pos();
        cursor.eat_while(is_identifier_symbol);

        let lexeme = cursor.slice_from(start);
        let kind = self.keyword(lexeme).unwrap_or(TokenKind::Identifier);
        state.push(MK_TOKEN!(kind, String::from(lexeme), state.line, column));
    }
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_identifier_symbol(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// `=`, `<` and `>`, optionally followed by `=` on the same line.
fn scan_comparison(state: &mut ScanState, cursor: &mut Cursor, single: TokenKind, combined: TokenKind) {
    let column = cursor.column();
    let start = cursor.pos();
    cursor.bump();

    let kind = if cursor.first() == Some('=') {
        cursor.bump();
        combined
    } else {
        single
    };

    state.push(MK_TOKEN!(kind, String::from(cursor.slice_from(start)), state.line, column));
}

fn scan_bang(state: &mut ScanState, cursor: &mut Cursor) {
    let column = cursor.column();

    if cursor.second() == Some('=') {
        cursor.advance_n(2);
        state.push(MK_TOKEN!(TokenKind::NotEqual, String::from("!="), state.line, column));
    } else {
        cursor.bump();
        state.push_error(
            MK_TOKEN!(TokenKind::Error, String::from("!"), state.line, column),
            ErrorImpl::LoneBang,
        );
    }
}

fn scan_one_line_comment(state: &mut ScanState, cursor: &mut Cursor) {
    let column = cursor.column();
    let start = cursor.pos();
    cursor.eat_rest();

    state.push(MK_TOKEN!(
        TokenKind::OneLineComment,
        String::from(cursor.slice_from(start)),
        state.line,
        column
    ));
}

fn scan_multiline_comment<I, S>(state: &mut ScanState, cursor: &mut Cursor, lines: &mut I) -> CommentEnd<S>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let line = state.line;
    let column = cursor.column();
    let start = cursor.pos();
    cursor.advance_n(2);

    if let Some(end) = cursor.rest().find("*/") {
        cursor.advance_bytes(end + 2);
        state.push(MK_TOKEN!(
            TokenKind::MultilineComment,
            String::from(cursor.slice_from(start)),
            line,
            column
        ));
        return CommentEnd::SameLine;
    }

    cursor.eat_rest();
    let mut lexeme = String::from(cursor.slice_from(start));
    let mut consumed = 1;

    for next in lines.by_ref() {
        state.line += 1;
        consumed += 1;
        lexeme.push('\n');

        let text = next.as_ref();
        if let Some(end) = text.find("*/") {
            lexeme.push_str(&text[..end + 2]);
            state.push(MK_TOKEN!(TokenKind::MultilineComment, lexeme, line, column));
            return CommentEnd::NextLine(next, end + 2);
        }
        lexeme.push_str(text);
    }

    warn!(line, column, "unterminated multi-line comment");
    state.push_error(
        MK_TOKEN!(TokenKind::Error, lexeme, line, column),
        ErrorImpl::UnterminatedComment { lines: consumed },
    );
    CommentEnd::Unterminated
}

fn scan_string(state: &mut ScanState, cursor: &mut Cursor) {
    let column = cursor.column();
    cursor.bump();

    let start = cursor.pos();
    cursor.eat_while(|c| c != '\'');
    let content = String::from(cursor.slice_from(start));

    if cursor.bump().is_some() {
        state.push(MK_TOKEN!(TokenKind::StringLiteral, content, state.line, column));
    } else {
        warn!(line = state.line, column, "unterminated string literal");
        state.push_error(
            MK_TOKEN!(TokenKind::Error, content.clone(), state.line, column),
            ErrorImpl::UnterminatedString { token: content },
        );
    }
}

fn scan_number(state: &mut ScanState, cursor: &mut Cursor) {
    let column = cursor.column();
    let start = cursor.pos();

    match cursor.first() {
        Some(first) if has_base_marker(first, cursor.second()) => {
            cursor.advance_n(2);
            cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '.');
        }
        _ => cursor.eat_while(|c| c.is_ascii_digit() || c == '.'),
    }

    let lexeme = cursor.slice_from(start);
    match classify_number(lexeme) {
        Some(kind) => state.push(MK_TOKEN!(kind, String::from(lexeme), state.line, column)),
        None => state.push_error(
            MK_TOKEN!(TokenKind::Error, String::from(lexeme), state.line, column),
            ErrorImpl::InvalidNumber {
                token: String::from(lexeme),
                base: base_name(lexeme),
            },
        ),
    }
}

/// Scans a list of lines with the default options.
pub fn scan<I, S>(lines: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Lexer::new().scan(lines)
}

/// Scans a whole source text, splitting it on `\n` / `\r\n`.
pub fn tokenize(source: &str) -> Vec<Token> {
    scan(source.lines())
}

/// Reads every line from `reader`, then scans them.
pub fn scan_reader<R: BufRead>(reader: R) -> io::Result<Vec<Token>> {
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    Ok(scan(&lines))
}
