mod config;
mod logging;
mod report;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use ell_compiler::lexer::{LexError, Token, Tokenizer};

/// Ell language tokenizer.
///
/// Scans a .l source file and prints its token stream.
#[derive(Parser)]
#[command(
    name = "ellc",
    version,
    about,
    long_about = "Ell language tokenizer.\n\nScans an Ell source file and prints one token per line.\n\nExamples:\n  ellc main.l                  Print tokens\n  ellc main.l --format json    Print tokens as JSON\n  ellc main.l -k if -k while   Treat extra words as keywords\n  ellc main.l --check          Check for lexer errors only"
)]
struct Cli {
    /// Input .l source file (default: `[project] entry` from Ell.toml).
    input: Option<PathBuf>,

    /// Ell.toml to read keyword configuration from (default: search upwards
    /// from the input file).
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Additional keyword (repeatable).
    #[arg(short = 'k', long = "keyword", value_name = "WORD")]
    keywords: Vec<String>,

    /// Output format for the token stream.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Check for lexer errors without printing tokens.
    #[arg(long)]
    check: bool,

    /// Suppress the summary line printed by --check.
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // === Configuration ===
    let settings =
        match config::resolve(cli.input.as_deref(), cli.manifest.as_deref(), &cli.keywords) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        };

    // Read source file
    let source = match fs::read_to_string(&settings.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: could not read '{}': {}", settings.input.display(), e);
            process::exit(1);
        }
    };

    let file_name = settings
        .input
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    // === Lexer ===
    let mut tokenizer = Tokenizer::new(&source, &file_name, settings.keywords);
    tracing::info!(
        target: "ell::cli",
        keywords = ?tokenizer.keywords().iter().collect::<Vec<_>>(),
        "scanning {}",
        file_name
    );
    let mut collected: Vec<Token> = Vec::new();
    let mut count = 0usize;

    loop {
        match tokenizer.at_end() {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => fail(&e, &source, &file_name),
        }
        let token = match tokenizer.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => break,
            Err(e) => fail(&e, &source, &file_name),
        };
        count += 1;

        if cli.check {
            continue;
        }
        match cli.format {
            Format::Text => print_token(&token),
            Format::Json => collected.push(token),
        }
    }

    tracing::info!(target: "ell::cli", tokens = count, "scan complete");

    if cli.check {
        if !cli.quiet {
            println!("No lexer errors ({} tokens).", count);
        }
        return;
    }

    if cli.format == Format::Json {
        match serde_json::to_string_pretty(&collected) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize tokens: {}", e);
                process::exit(1);
            }
        }
    }
}

fn print_token(token: &Token) {
    println!(
        "{:>4}:{:<3} {:<10} {:?}",
        token.span.start.line, token.span.start.column, token.kind, token.text,
    );
}

fn fail(err: &LexError, source: &str, file_name: &str) -> ! {
    let diag = err.to_diagnostic(file_name);
    if let Err(e) = report::write_diagnostic(&diag, source, file_name, true, io::stderr()) {
        tracing::warn!(target: "ell::cli", "could not render diagnostic: {}", e);
        eprintln!("{}", diag);
    }
    process::exit(1);
}
