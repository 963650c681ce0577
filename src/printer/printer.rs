use std::{collections::HashMap, io::Write};

use crate::lexer::tokens::{display_labels, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One field per line, a block per token.
    #[default]
    Text,
    /// One token per line: `line:column`, label, lexeme.
    Compact,
}

pub struct Printer {
    labels: HashMap<TokenKind, &'static str>,
    format: OutputFormat,
    skip_trivia: bool,
}

impl Printer {
    pub fn new(format: OutputFormat) -> Printer {
        Printer {
            labels: display_labels(),
            format,
            skip_trivia: false,
        }
    }

    /// Leave blanks and comments out of the output.
    pub fn skip_trivia(mut self, skip: bool) -> Printer {
        self.skip_trivia = skip;
        self
    }

    pub fn label(&self, kind: TokenKind) -> &'static str {
        self.labels.get(&kind).copied().unwrap_or_else(|| kind.label())
    }

    pub fn render(&self, token: &Token) -> String {
        let label = self.label(token.kind);

        match self.format {
            OutputFormat::Text => format!(
                "Lexeme: {},\n\tType: {},\n\tLine: {},\n\tColumn: {}\n",
                token.lexeme, label, token.line, token.column
            ),
            OutputFormat::Compact => format!(
                "{}:{}\t{}\t{}\n",
                token.line,
                token.column,
                label,
                token.lexeme.escape_debug()
            ),
        }
    }

    pub fn print_tokens<W: Write>(&self, tokens: &[Token], out: &mut W) -> std::io::Result<()> {
        for token in tokens {
            if self.skip_trivia && token.is_trivia() {
                continue;
            }
            out.write_all(self.render(token).as_bytes())?;
        }
        out.flush()
    }
}
