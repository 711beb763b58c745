//! Vocabulary scanner built on the lexdfa automaton.
//!
//! Input text is split into sentences; each sentence is tokenized while the
//! automaton is driven alongside, and the tokens are matched against the
//! vocabulary to produce counts and character positions.
//!
//! - [`sentence`] -- sentence splitting
//! - [`tokenizer`] -- word segmentation and automaton driver
//! - [`reporter`] -- vocabulary matches, whole-word counts and positions
//! - [`words`] -- word-by-word accept/reject check
//! - [`scanner`] -- [`Scanner`], the entry point used by front ends

pub mod reporter;
pub mod scanner;
pub mod sentence;
pub mod tokenizer;
pub mod words;

pub use scanner::Scanner;

use lexdfa_automaton::AutomatonError;

/// Error type for scan requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// The input text is empty or only whitespace.
    #[error("Input cannot be empty.")]
    EmptyInput,

    /// The vocabulary could not be turned into an automaton.
    #[error("failed to build automaton: {0}")]
    Automaton(#[from] AutomatonError),
}
