use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::TokenKind;

#[derive(Clone)]
pub struct NumberPattern {
    regex: Regex,
    kind: TokenKind,
}

lazy_static! {
    // Matched in order, against the whole lexeme.
    static ref NUMBER_PATTERNS: Vec<NumberPattern> = vec![
        NumberPattern { regex: Regex::new("^[0-9]$").unwrap(), kind: TokenKind::Integer },
        NumberPattern { regex: Regex::new("^0b[01]+$").unwrap(), kind: TokenKind::Binary },
        NumberPattern { regex: Regex::new("^0x[0-9A-F]+$").unwrap(), kind: TokenKind::Hexadecimal },
        NumberPattern { regex: Regex::new("^0[0-7]*\\.[0-9]*$").unwrap(), kind: TokenKind::Real },
        NumberPattern { regex: Regex::new("^0[0-7]+$").unwrap(), kind: TokenKind::Octal },
        NumberPattern { regex: Regex::new("^[1-9][0-9]*\\.[0-9]*$").unwrap(), kind: TokenKind::Real },
        NumberPattern { regex: Regex::new("^[1-9][0-9]*$").unwrap(), kind: TokenKind::Integer },
    ];
}

/// Classifies an already consumed numeric lexeme. `None` means the lexeme
/// has digits that are invalid for the base it was written in.
pub fn classify_number(lexeme: &str) -> Option<TokenKind> {
    NUMBER_PATTERNS
        .iter()
        .find(|pattern| pattern.regex.is_match(lexeme))
        .map(|pattern| pattern.kind)
}

/// Name of the base a numeric lexeme was read as, for diagnostics.
pub fn base_name(lexeme: &str) -> &'static str {
    let mut chars = lexeme.chars();
    match (chars.next(), chars.next()) {
        (Some('0'), Some('b')) => "binary",
        (Some('0'), Some('x')) => "hexadecimal",
        _ if lexeme.contains('.') => "real",
        (Some('0'), Some(_)) => "octal",
        _ => "decimal",
    }
}

/// True when the lexeme starting at `first`, `second` carries a base marker.
pub fn has_base_marker(first: char, second: Option<char>) -> bool {
    first == '0' && matches!(second, Some('b') | Some('x'))
}

#[cfg(test)]
mod tests {
    use super::{base_name, classify_number};
    use crate::lexer::tokens::TokenKind;

    #[test]
    fn test_single_digit_is_integer() {
        assert_eq!(classify_number("0"), Some(TokenKind::Integer));
        assert_eq!(classify_number("7"), Some(TokenKind::Integer));
    }

    #[test]
    fn test_prefixed_bases() {
        assert_eq!(classify_number("0b1011"), Some(TokenKind::Binary));
        assert_eq!(classify_number("0b102"), None);
        assert_eq!(classify_number("0b"), None);
        assert_eq!(classify_number("0x1F"), Some(TokenKind::Hexadecimal));
        assert_eq!(classify_number("0x1f"), None);
        assert_eq!(classify_number("0x1G"), None);
    }

    #[test]
    fn test_octal_uses_digits_zero_to_seven() {
        assert_eq!(classify_number("017"), Some(TokenKind::Octal));
        assert_eq!(classify_number("00"), Some(TokenKind::Octal));
        assert_eq!(classify_number("018"), None);
        assert_eq!(classify_number("07.25"), Some(TokenKind::Real));
        assert_eq!(classify_number("09.5"), None);
    }

    #[test]
    fn test_decimal_and_real() {
        assert_eq!(classify_number("42"), Some(TokenKind::Integer));
        assert_eq!(classify_number("3.14"), Some(TokenKind::Real));
        assert_eq!(classify_number("0.5"), Some(TokenKind::Real));
        assert_eq!(classify_number("0."), Some(TokenKind::Real));
        assert_eq!(classify_number("12."), Some(TokenKind::Real));
        assert_eq!(classify_number("1.2.3"), None);
    }

    #[test]
    fn test_base_names() {
        assert_eq!(base_name("0b12"), "binary");
        assert_eq!(base_name("0xZZ"), "hexadecimal");
        assert_eq!(base_name("089"), "octal");
        assert_eq!(base_name("1.2.3"), "real");
        assert_eq!(base_name("12"), "decimal");
    }
}
