// State identifiers and input symbols

use std::fmt;

use lexdfa_core::character::{ALPHABET, ALPHABET_SIZE, WORD_SEPARATOR, alphabet_index};

/// Opaque automaton state, an ordinal into the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) u16);

impl StateId {
    /// The start state is always the first row of the table.
    pub const START: StateId = StateId(0);

    /// Row index of this state.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Number of symbol columns: one per letter plus the word separator.
pub const SYMBOL_COUNT: usize = ALPHABET_SIZE + 1;

/// Column of the word separator.
pub(crate) const SEPARATOR_COLUMN: usize = ALPHABET_SIZE;

/// An input symbol with a column in the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// A lowercase letter, by alphabet ordinal.
    Letter(u8),
    /// The space character.
    Separator,
}

impl Symbol {
    /// Map a character to its symbol. Only `a..z` and space have one.
    #[inline]
    pub fn from_char(c: char) -> Option<Symbol> {
        if c == WORD_SEPARATOR {
            return Some(Symbol::Separator);
        }
        alphabet_index(c).map(|i| Symbol::Letter(i as u8))
    }

    /// Symbol for a table column.
    pub(crate) fn from_column(column: usize) -> Symbol {
        if column == SEPARATOR_COLUMN {
            Symbol::Separator
        } else {
            Symbol::Letter(column as u8)
        }
    }

    #[inline]
    pub fn column(self) -> usize {
        match self {
            Symbol::Letter(i) => i as usize,
            Symbol::Separator => SEPARATOR_COLUMN,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Letter(i) => ALPHABET[i as usize],
            Symbol::Separator => WORD_SEPARATOR,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Letter(_) => write!(f, "{}", self.as_char()),
            Symbol::Separator => f.write_str("' '"),
        }
    }
}
