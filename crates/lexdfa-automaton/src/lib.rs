//! Word-chain deterministic finite automaton.
//!
//! The automaton recognizes a closed vocabulary of lowercase words. It is
//! declared word by word as chains of character edges from the start state,
//! then closed so that the transition function is total over `a..z`.
//!
//! # Architecture
//!
//! - [`state`] -- state identifiers and input symbols
//! - [`builder`] -- chain declaration and the closure passes
//! - [`table`] -- the finished, immutable transition table
//! - [`standard`] -- the ten-word table used by the scanner

pub mod builder;
pub mod standard;
pub mod state;
pub mod table;

pub use builder::AutomatonBuilder;
pub use state::{StateId, Symbol};
pub use table::{Automaton, Transition};

/// Error type for automaton construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AutomatonError {
    #[error("cannot declare an empty word")]
    EmptyWord,
    #[error("word {word:?} contains {ch:?}, which is outside the alphabet a-z")]
    NonAlphabetic { word: String, ch: char },
    #[error("word {0:?} is declared twice")]
    DuplicateWord(String),
    #[error("too many states: the table holds at most {max}")]
    TooManyStates { max: usize },
}
