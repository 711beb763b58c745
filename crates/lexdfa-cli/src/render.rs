// Plain-text rendering of scan results and of the automaton table.

use std::io::{self, Write};

use lexdfa_automaton::Automaton;
use lexdfa_core::character::ALPHABET;
use lexdfa_core::report::{ScanReport, SentenceReport, Totals, WordCheckReport};

const RULE: &str = "--------------------------------------------------";

/// How accepted words stand out in the word-check output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Bold green ANSI escape codes.
    Ansi,
    /// `[word]`, for pipes and files.
    Brackets,
}

impl Highlight {
    /// ANSI when writing to a terminal.
    pub fn for_terminal(is_terminal: bool) -> Self {
        if is_terminal {
            Highlight::Ansi
        } else {
            Highlight::Brackets
        }
    }

    fn apply(self, word: &str) -> String {
        match self {
            Highlight::Ansi => format!("\x1b[1;32m{word}\x1b[0m"),
            Highlight::Brackets => format!("[{word}]"),
        }
    }
}

fn join_counts(counts: &[(String, usize)]) -> String {
    counts
        .iter()
        .map(|(w, c)| format!("{w}={c}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_positions(positions: &[(String, Vec<usize>)]) -> String {
    positions
        .iter()
        .map(|(w, p)| format!("{w}={p:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_numbers(numbers: &[usize]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Sentence scan
// ============================================================================

pub fn write_sentence<W: Write>(out: &mut W, report: &SentenceReport) -> io::Result<()> {
    writeln!(out, "Sentence: {}", report.sentence)?;
    writeln!(out, "Status: {}", report.status)?;
    writeln!(out, "Words: {}", report.words.join(", "))?;
    writeln!(out, "Matched Patterns: {}", report.matched_words.join(", "))?;
    writeln!(out, "Occurrences: {}", join_counts(&report.occurrence_count))?;
    writeln!(out, "Positions: {}", join_positions(&report.positions))?;
    writeln!(out, "{RULE}")
}

pub fn write_totals<W: Write>(out: &mut W, totals: &Totals) -> io::Result<()> {
    writeln!(out, "=== TOTAL OCCURRENCES ===")?;
    for (word, count) in totals.iter() {
        writeln!(out, "{word}: {count}")?;
    }
    Ok(())
}

/// Per-sentence breakdown followed by the totals table.
pub fn write_scan_report<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    for sentence in &report.sentences {
        write_sentence(out, sentence)?;
    }
    writeln!(out)?;
    write_totals(out, &report.totals)
}

// ============================================================================
// Word check
// ============================================================================

/// The text with accepted words highlighted, the accepted count, the overall
/// status and the per-word statistics table.
pub fn write_word_report<W: Write>(
    out: &mut W,
    report: &WordCheckReport,
    highlight: Highlight,
) -> io::Result<()> {
    let rendered: Vec<String> = report
        .verdicts
        .iter()
        .map(|v| {
            if v.status.is_accepted() {
                highlight.apply(&v.raw)
            } else {
                v.raw.clone()
            }
        })
        .collect();
    writeln!(out, "{}", rendered.join(" "))?;
    writeln!(out)?;
    writeln!(out, "Total accepted words: {}", report.total_accepted)?;
    writeln!(out, "Status: {}", report.status)?;
    writeln!(out)?;
    writeln!(out, "Word Statistics (Positions in text):")?;
    writeln!(out, "{:<10} {:<8} {:>5}  Positions", "Word", "Status", "Count")?;
    for (word, positions) in &report.stats {
        writeln!(
            out,
            "{:<10} {:<8} {:>5}  {}",
            word,
            "Accept",
            positions.len(),
            join_numbers(positions)
        )?;
    }
    Ok(())
}

// ============================================================================
// Automaton table
// ============================================================================

/// States, alphabet, start and accept states, then one line per edge.
///
/// With `hide_trap`, edges into the trap state are left out.
pub fn write_automaton<W: Write>(
    out: &mut W,
    automaton: &Automaton,
    hide_trap: bool,
) -> io::Result<()> {
    let states: Vec<String> = automaton
        .states()
        .map(|s| automaton.state_name(s))
        .collect();
    writeln!(out, "States: {}", states.join(" "))?;

    let alphabet: Vec<String> = ALPHABET.iter().map(char::to_string).collect();
    writeln!(out, "Alphabet: {}", alphabet.join(" "))?;
    writeln!(out, "Start state: {}", automaton.state_name(automaton.start()))?;

    let accepts: Vec<String> = automaton
        .accept_states()
        .map(|s| {
            let word = automaton.word_for_accept_state(s).unwrap_or_default();
            format!("{} ({word})", automaton.state_name(s))
        })
        .collect();
    writeln!(out, "Accept states: {}", accepts.join(", "))?;
    writeln!(out, "Trap state: {}", automaton.state_name(automaton.trap()))?;
    writeln!(out)?;

    writeln!(out, "Transitions:")?;
    for t in automaton.transitions() {
        if hide_trap && t.to == automaton.trap() {
            continue;
        }
        writeln!(
            out,
            "  {:<4} {:<4} -> {}",
            automaton.state_name(t.from),
            t.symbol.to_string(),
            automaton.state_name(t.to)
        )?;
    }
    Ok(())
}
