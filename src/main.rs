use std::{
    io::{self, Write},
    path::PathBuf,
    process::exit,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use lexan::{
    errors::errors::CliError,
    format_error,
    lexer::lexer::{Lexer, LexerOptions},
    printer::printer::{OutputFormat, Printer},
    read_source,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Tokenizes a source file and prints every token with its position.
#[derive(Parser)]
#[command(name = "lexan")]
#[command(about = "Lexical analyzer for a small imperative language")]
#[command(version)]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// How each token is printed
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print a diagnostic with a source excerpt for every error token
    #[arg(short, long)]
    diagnostics: bool,

    /// Treat tab characters as blanks instead of errors
    #[arg(long)]
    tabs_as_blanks: bool,

    /// Leave blanks and comments out of the printed tokens
    #[arg(long)]
    skip_trivia: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Compact,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Compact => OutputFormat::Compact,
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{}", err);
        exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let lines = read_source(&cli.file)?;

    let start = Instant::now();
    let lexer = Lexer::with_options(LexerOptions {
        tabs_as_blanks: cli.tabs_as_blanks,
    });
    let (tokens, errors) = lexer.scan_with_errors(&lines);
    info!(
        file = %cli.file.display(),
        tokens = tokens.len(),
        errors = errors.len(),
        "tokenized in {:?}",
        start.elapsed()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Printer::new(cli.format.into())
        .skip_trivia(cli.skip_trivia)
        .print_tokens(&tokens, &mut out)?;

    if cli.diagnostics {
        let stderr = io::stderr();
        let mut err = stderr.lock();
        for error in &errors {
            writeln!(err, "{}", format_error(error, &lines, &cli.file))?;
        }
    }

    Ok(())
}
