// lexdfa-automaton: Print the vocabulary automaton.
//
// Lists the states, the alphabet, the start, accept and trap states, and
// every explicit edge of the transition table.
//
// Usage:
//   lexdfa-automaton [--hide-trap]

use std::io::{self, Write};

use clap::Parser;
use lexdfa_automaton::Automaton;
use lexdfa_cli::CliError;
use lexdfa_cli::render::write_automaton;
use lexdfa_scan::ScanError;

#[derive(Debug, Parser)]
#[command(name = "lexdfa-automaton", version, about = "Print the transition table")]
struct Args {
    /// Leave out the edges into the trap state.
    #[arg(long)]
    hide_trap: bool,
}

fn run(args: &Args) -> Result<(), CliError> {
    let automaton = Automaton::standard().map_err(ScanError::from)?;
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_automaton(&mut out, &automaton, args.hide_trap)?;
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
