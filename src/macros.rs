//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SIMPLE_TOKEN!` - Emits a single-character token and advances past it

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's text
/// * `$line` - 1-based source line
/// * `$column` - 1-based column of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), 1, 5);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr, $column:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            line: $line,
            column: $column,
        }
    };
}

/// Pushes a token whose lexeme is the single character under the cursor,
/// then advances the cursor past it.
///
/// # Example
///
/// ```ignore
/// ',' => MK_SIMPLE_TOKEN!(state, cursor, TokenKind::Comma, ","),
/// ```
#[macro_export]
macro_rules! MK_SIMPLE_TOKEN {
    ($state:expr, $cursor:expr, $kind:expr, $value:literal) => {{
        $state.push(MK_TOKEN!(
            $kind,
            String::from($value),
            $state.line,
            $cursor.column()
        ));
        $cursor.bump();
    }};
}
