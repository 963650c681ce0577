#![allow(clippy::module_inception)]

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::errors::errors::{CliError, Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod printer;

/// 1-based line and column of a character in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Reads `path` into lines with the line terminators stripped.
pub fn read_source(path: &Path) -> Result<Vec<String>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<String>, _>>()
        .map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })
}

pub fn get_line_at_position<'a>(lines: &'a [String], position: &Position) -> Option<&'a str> {
    lines
        .get(position.line.checked_sub(1)?)
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::{format_error, get_line_at_position, Position};
    use crate::errors::errors::{Error, ErrorImpl};

    #[test]
    fn test_get_line_at_position() {
        let lines = vec!["Hello, world!".to_string(), "Testing { }".to_string()];

        let line = get_line_at_position(&lines, &Position { line: 2, column: 9 });
        assert_eq!(line, Some("Testing { }"));

        assert_eq!(get_line_at_position(&lines, &Position { line: 0, column: 1 }), None);
        assert_eq!(get_line_at_position(&lines, &Position { line: 3, column: 1 }), None);
    }

    #[test]
    fn test_format_error_points_at_column() {
        let lines = vec!["int x = 0x1G;".to_string()];
        let error = Error::new(
            ErrorImpl::InvalidNumber {
                token: "0x1G".to_string(),
                base: "hexadecimal",
            },
            Position { line: 1, column: 9 },
        );

        let rendered = format_error(&error, &lines, std::path::Path::new("main.lang"));
        let rendered: Vec<&str> = rendered.lines().collect();

        assert_eq!(rendered[0], "Error: InvalidNumber (Invalid hexadecimal number: `0x1G`)");
        assert_eq!(rendered[1], "-> main.lang:1:9");
        assert_eq!(rendered[3], "1 | int x = 0x1G;");
        assert_eq!(rendered[4], "  | --------^");
    }

    #[test]
    fn test_format_error_trims_leading_spaces() {
        let lines = vec!["    x = !y".to_string()];
        let error = Error::new(ErrorImpl::LoneBang, Position { line: 1, column: 9 });

        let rendered = format_error(&error, &lines, std::path::Path::new("a.lang"));
        let rendered: Vec<&str> = rendered.lines().collect();

        assert_eq!(rendered[3], "1 | x = !y");
        assert_eq!(rendered[4], "  | ----^");
    }
}

/// Renders a diagnostic with the offending source line and a caret.
pub fn format_error(error: &Error, lines: &[String], file: &Path) -> String {
    /*
        Error: message
        -> main.lang:20:9
          |
        20 | int a = #;
           | --------^
    */

    let position = error.get_position();
    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!(
        "-> {}:{}:{}\n",
        file.as_os_str().to_string_lossy(),
        position.line,
        position.column
    ));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let line_text = get_line_at_position(lines, position).unwrap_or("");
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();
    (&string[start..], start)
}
