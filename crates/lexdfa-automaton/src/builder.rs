// Automaton construction: word chains, then closure passes

use lexdfa_core::character::ALPHABET_SIZE;

use crate::AutomatonError;
use crate::state::{SEPARATOR_COLUMN, SYMBOL_COUNT, StateId, Symbol};
use crate::table::{Automaton, Row};

/// Largest number of states a table can hold (trap included).
pub const MAX_STATES: usize = u16::MAX as usize;

/// Collects word chains and closes them into an [`Automaton`].
///
/// Each declared word becomes a chain of edges from the start state. Words
/// sharing a prefix share the chain states up to the first differing
/// letter; from there the new word gets fresh states. States are numbered
/// in allocation order, so the declaration order fixes the state names.
///
/// ```
/// use lexdfa_automaton::AutomatonBuilder;
///
/// let mut builder = AutomatonBuilder::new();
/// builder.declare("bad").unwrap();
/// builder.declare("blue").unwrap();
/// let automaton = builder.build();
/// assert!(automaton.accepts("bad"));
/// assert!(automaton.accepts("blue"));
/// assert!(!automaton.accepts("bl"));
/// ```
#[derive(Debug, Clone)]
pub struct AutomatonBuilder {
    rows: Vec<Row>,
    accept: Vec<Option<String>>,
}

impl AutomatonBuilder {
    /// A builder holding only the start state.
    pub fn new() -> Self {
        Self {
            rows: vec![[None; SYMBOL_COUNT]],
            accept: vec![None],
        }
    }

    /// Declare a vocabulary word as a chain of letter edges from the start state.
    ///
    /// Returns the accept state at the end of the chain.
    pub fn declare(&mut self, word: &str) -> Result<StateId, AutomatonError> {
        if word.is_empty() {
            return Err(AutomatonError::EmptyWord);
        }
        let symbols = word
            .chars()
            .map(|ch| {
                Symbol::from_char(ch)
                    .filter(|s| matches!(s, Symbol::Letter(_)))
                    .ok_or_else(|| AutomatonError::NonAlphabetic {
                        word: word.to_string(),
                        ch,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut state = StateId::START;
        for symbol in symbols {
            state = match self.rows[state.index()][symbol.column()] {
                Some(next) => next,
                None => {
                    let next = self.allocate()?;
                    self.rows[state.index()][symbol.column()] = Some(next);
                    next
                }
            };
        }

        if self.accept[state.index()].is_some() {
            return Err(AutomatonError::DuplicateWord(word.to_string()));
        }
        self.accept[state.index()] = Some(word.to_string());
        Ok(state)
    }

    /// Declare several words in order.
    pub fn declare_all<I, S>(&mut self, words: I) -> Result<(), AutomatonError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.declare(word.as_ref())?;
        }
        Ok(())
    }

    /// Number of states declared so far, the start state included.
    pub fn state_count(&self) -> usize {
        self.rows.len()
    }

    fn allocate(&mut self) -> Result<StateId, AutomatonError> {
        // One slot stays reserved for the trap state.
        if self.rows.len() + 1 >= MAX_STATES {
            return Err(AutomatonError::TooManyStates { max: MAX_STATES });
        }
        let id = StateId(self.rows.len() as u16);
        self.rows.push([None; SYMBOL_COUNT]);
        self.accept.push(None);
        Ok(id)
    }

    /// Close the table and freeze it.
    ///
    /// 1. Every chain state gets a separator edge back to the start state.
    /// 2. Every missing letter edge goes to a new trap state, and the trap
    ///    state loops to itself on every letter.
    pub fn build(self) -> Automaton {
        let Self {
            mut rows,
            mut accept,
        } = self;

        let trap = StateId(rows.len() as u16);
        rows.push([None; SYMBOL_COUNT]);
        accept.push(None);

        for row in rows.iter_mut().take(trap.index()).skip(1) {
            row[SEPARATOR_COLUMN] = Some(StateId::START);
        }

        for row in rows.iter_mut() {
            for cell in row.iter_mut().take(ALPHABET_SIZE) {
                if cell.is_none() {
                    *cell = Some(trap);
                }
            }
        }

        Automaton::from_parts(rows, accept, trap)
    }
}

impl Default for AutomatonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
