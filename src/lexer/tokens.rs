use std::{collections::HashMap, fmt::Display};

/// Builds the reserved word table consulted for every identifier-shaped lexeme.
pub fn reserved_lookup() -> HashMap<&'static str, TokenKind> {
    let mut map = HashMap::new();
    map.insert("int", TokenKind::Int);
    map.insert("double", TokenKind::Double);
    map.insert("bool", TokenKind::Bool);
    map.insert("string", TokenKind::String);
    map.insert("if", TokenKind::If);
    map.insert("else", TokenKind::Else);
    map.insert("while", TokenKind::While);
    map.insert("for", TokenKind::For);
    map.insert("read", TokenKind::Read);
    map.insert("print", TokenKind::Print);
    map
}

/// Builds the kind to label table used when rendering tokens.
pub fn display_labels() -> HashMap<TokenKind, &'static str> {
    TokenKind::ALL
        .iter()
        .map(|kind| (*kind, kind.label()))
        .collect()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Blank,
    Comment,
    Comma,
    Semicolon,

    Assignment, // =
    Identifier,
    StringLiteral,

    // Type keywords
    Int,
    Double,
    Bool,
    String,

    Integer,
    Real,
    Binary,
    Octal,
    Hexadecimal,

    Add,
    Sub,
    Mul,
    Div,

    // Control keywords
    If,
    Else,
    While,
    For,
    Read,
    Print,

    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,

    Equal,    // ==
    NotEqual, // !=

    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,

    Error,

    OneLineComment,
    MultilineComment,
}

impl TokenKind {
    pub const ALL: [TokenKind; 39] = [
        TokenKind::Blank,
        TokenKind::Comment,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Assignment,
        TokenKind::Identifier,
        TokenKind::StringLiteral,
        TokenKind::Int,
        TokenKind::Double,
        TokenKind::Bool,
        TokenKind::String,
        TokenKind::Integer,
        TokenKind::Real,
        TokenKind::Binary,
        TokenKind::Octal,
        TokenKind::Hexadecimal,
        TokenKind::Add,
        TokenKind::Sub,
        TokenKind::Mul,
        TokenKind::Div,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::For,
        TokenKind::Read,
        TokenKind::Print,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenBrace,
        TokenKind::CloseBrace,
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::LessOrEqual,
        TokenKind::GreaterOrEqual,
        TokenKind::Error,
        TokenKind::OneLineComment,
        TokenKind::MultilineComment,
    ];

    /// Human-readable name of the kind.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Blank => "blank",
            TokenKind::Comment => "comment",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Assignment => "assignment",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "stringLiteral",
            TokenKind::Int => "int",
            TokenKind::Double => "double",
            TokenKind::Bool => "bool",
            TokenKind::String => "string",
            TokenKind::Integer => "integerNumber",
            TokenKind::Real => "realNumber",
            TokenKind::Binary => "binaryNumber",
            TokenKind::Octal => "octalNumber",
            TokenKind::Hexadecimal => "hexadecimalNumber",
            TokenKind::Add => "addition",
            TokenKind::Sub => "subtraction",
            TokenKind::Mul => "multiplication",
            TokenKind::Div => "division",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::Read => "read",
            TokenKind::Print => "print",
            TokenKind::OpenParen => "openingParenthesis",
            TokenKind::CloseParen => "closingParenthesis",
            TokenKind::OpenBrace => "openingBrace",
            TokenKind::CloseBrace => "closingBrace",
            TokenKind::Equal => "equal",
            TokenKind::NotEqual => "notEqual",
            TokenKind::Less => "less",
            TokenKind::Greater => "greater",
            TokenKind::LessOrEqual => "lessOrEqual",
            TokenKind::GreaterOrEqual => "greaterOrEqual",
            TokenKind::Error => "err",
            TokenKind::OneLineComment => "oneLineComment",
            TokenKind::MultilineComment => "multilineComment",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\nlexeme: {},\nat: {}:{}}}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Whitespace and comments: tokens a parser would skip.
    pub fn is_trivia(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::Blank,
            TokenKind::Comment,
            TokenKind::OneLineComment,
            TokenKind::MultilineComment,
        ])
    }
}
