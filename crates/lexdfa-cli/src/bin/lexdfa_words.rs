// lexdfa-words: Word-by-word accept/reject check.
//
// Splits the input on whitespace, strips each word down to its letters and
// runs it through the automaton. Prints the text with the accepted words
// highlighted, the number of accepted words, the overall status and a
// statistics table of the accepted words with their 1-based positions.
//
// Usage:
//   lexdfa-words [FILE]
//
// Without FILE (or with `-`) the text is read from stdin. Highlighting
// uses ANSI colors on a terminal and [brackets] otherwise.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use lexdfa_cli::CliError;
use lexdfa_cli::input::read_input;
use lexdfa_cli::render::{Highlight, write_word_report};
use lexdfa_scan::{ScanError, Scanner};

#[derive(Debug, Parser)]
#[command(name = "lexdfa-words", version, about = "Check each word against the automaton")]
struct Args {
    /// Input file; stdin when absent or `-`.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn run(args: &Args) -> Result<(), CliError> {
    let text = read_input(args.file.as_deref())?;
    let scanner = Scanner::new()?;

    let stdout = io::stdout();
    let highlight = Highlight::for_terminal(stdout.is_terminal());
    let mut out = io::BufWriter::new(stdout.lock());

    match scanner.check_words(&text) {
        Ok(report) => write_word_report(&mut out, &report, highlight)?,
        Err(ScanError::EmptyInput) => {
            writeln!(out, "Error: {}", ScanError::EmptyInput)?;
            writeln!(out, "Total accepted words: 0")?;
            writeln!(out, "Status: ")?;
        }
        Err(e) => return Err(e.into()),
    }
    out.flush()?;
    Ok(())
}

fn main() {
    lexdfa_cli::init_tracing();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        lexdfa_cli::fatal(&e.to_string());
    }
}
