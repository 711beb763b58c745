// lexdfa-scan: Sentence-by-sentence vocabulary scan.
//
// Splits the input into sentences, runs every word through the automaton
// and prints, per sentence, the words, the matched vocabulary words with
// their counts and character positions, then the totals over the whole
// text.
//
// Usage:
//   lexdfa-scan [FILE]
//   lexdfa-scan --menu [--dir DIR]
//
// Without FILE (or with `-`) the text is read from stdin. With --menu the
// *.txt files of DIR are listed and one is picked by number.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use lexdfa_cli::input::{choose_file, list_candidates, read_file, read_input};
use lexdfa_cli::render::{write_scan_report, write_totals};
use lexdfa_cli::{CliError, SAMPLES_DIR_ENV};
use lexdfa_core::report::ScanReport;
use lexdfa_scan::{ScanError, Scanner};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "lexdfa-scan", version, about = "Scan text for the fixed vocabulary")]
struct Args {
    /// Input file; stdin when absent or `-`.
    #[arg(value_name = "FILE", conflicts_with = "menu")]
    file: Option<PathBuf>,

    /// Pick the input from a numbered list of text files.
    #[arg(long)]
    menu: bool,

    /// Directory listed by --menu.
    #[arg(long, value_name = "DIR", env = SAMPLES_DIR_ENV, default_value = ".")]
    dir: PathBuf,
}

fn load_text(args: &Args) -> Result<String, CliError> {
    if !args.menu {
        return read_input(args.file.as_deref());
    }
    let candidates = list_candidates(&args.dir)?;
    let stdin = io::stdin();
    let chosen = choose_file(&candidates, stdin.lock(), io::stdout())?;
    read_file(&chosen)
}

fn run(args: &Args) -> Result<(), CliError> {
    let text = load_text(args)?;
    let scanner = Scanner::new()?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match scanner.scan(&text) {
        Ok(report) => {
            info!(
                sentences = report.sentences.len(),
                accepted = report.accepted_sentences(),
                "scan finished"
            );
            write_scan_report(&mut out, &report)?;
        }
        Err(ScanError::EmptyInput) => {
            writeln!(out, "{}", ScanError::EmptyInput)?;
            writeln!(out)?;
            write_totals(&mut out, &ScanReport::empty(scanner.vocabulary()).totals)?;
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
