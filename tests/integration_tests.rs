//! End-to-end tests: reading source files, scanning them and printing tokens.

use std::{io::Write, path::Path};

use lexan::{
    errors::errors::CliError,
    format_error,
    lexer::{
        lexer::{scan_reader, Lexer},
        tokens::{Token, TokenKind},
    },
    printer::printer::{OutputFormat, Printer},
    read_source,
};

fn find<'a>(tokens: &'a [Token], kind: TokenKind) -> Vec<&'a Token> {
    tokens.iter().filter(|token| token.kind == kind).collect()
}

#[test]
fn test_scan_sample_program() {
    let lines = read_source(Path::new("tests/fixtures/sample.lang")).unwrap();
    let (tokens, errors) = Lexer::new().scan_with_errors(&lines);

    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert!(find(&tokens, TokenKind::Error).is_empty());

    let comments = find(&tokens, TokenKind::MultilineComment);
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].lexeme, "/* read input\n   until done */");
    assert_eq!((comments[0].line, comments[0].column), (3, 1));

    let read = find(&tokens, TokenKind::Read);
    assert_eq!((read[0].line, read[0].column), (5, 1));

    let strings = find(&tokens, TokenKind::StringLiteral);
    assert_eq!(strings[0].lexeme, "tick");
    assert_eq!((strings[0].line, strings[0].column), (7, 11));

    let octal = find(&tokens, TokenKind::Octal);
    assert_eq!((octal[0].line, octal[0].column), (10, 14));

    let hex = find(&tokens, TokenKind::Hexadecimal);
    assert_eq!(hex[0].lexeme, "0x1F");
    assert_eq!((hex[0].line, hex[0].column), (10, 27));

    assert_eq!(find(&tokens, TokenKind::Real)[0].lexeme, "0.75");
    assert_eq!(find(&tokens, TokenKind::GreaterOrEqual).len(), 1);
    assert_eq!(find(&tokens, TokenKind::NotEqual).len(), 1);
    assert_eq!(find(&tokens, TokenKind::OneLineComment)[0].lexeme, "// countdown");
}

#[test]
fn test_tokens_are_in_source_order() {
    let lines = read_source(Path::new("tests/fixtures/sample.lang")).unwrap();
    let tokens = Lexer::new().scan(&lines);

    for pair in tokens.windows(2) {
        assert!(
            (pair[0].line, pair[0].column) < (pair[1].line, pair[1].column),
            "{} comes before {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_read_source_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "string s = 'hi';\r\nbool b = s == 'hi';\n").unwrap();

    let lines = read_source(file.path()).unwrap();
    assert_eq!(lines.len(), 2);

    let tokens = Lexer::new().scan(&lines);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(find(&tokens, TokenKind::Bool).len(), 1);
    assert_eq!(find(&tokens, TokenKind::Equal)[0].line, 2);
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.lang");

    match read_source(&missing) {
        Err(CliError::Open { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected open error, got {:?}", other.map(|lines| lines.len())),
    }
}

#[test]
fn test_scan_reader_matches_line_scan() {
    let source = "int x = 1;\n/* a\nb */ x = x + 0b11;\n";
    let from_reader = scan_reader(source.as_bytes()).unwrap();
    let from_lines = Lexer::new().scan(source.lines());

    assert_eq!(from_reader, from_lines);
}

#[test]
fn test_print_and_diagnose_errors() {
    let lines = vec!["x = 'open".to_string()];
    let (tokens, errors) = Lexer::new().scan_with_errors(&lines);

    let mut out = Vec::new();
    Printer::new(OutputFormat::Text)
        .print_tokens(&tokens, &mut out)
        .unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Lexeme: open,\n\tType: err,\n\tLine: 1,\n\tColumn: 5\n"));

    assert_eq!(errors.len(), 1);
    let report = format_error(&errors[0], &lines, Path::new("input.lang"));
    assert!(report.starts_with("Error: UnterminatedString"));
    assert!(report.contains("-> input.lang:1:5"));
    assert!(report.contains("  | ----^"));
}
