// The finished transition table

use crate::state::{SYMBOL_COUNT, StateId, Symbol};

/// One table row: the explicit edge for each symbol column, if any.
pub(crate) type Row = [Option<StateId>; SYMBOL_COUNT];

/// An explicit edge of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub symbol: Symbol,
    pub to: StateId,
}

/// Immutable deterministic automaton over `a..z` plus the word separator.
///
/// Lookup is a two-dimensional index by (state ordinal, symbol column). The
/// table is total over the letters: after [`AutomatonBuilder::build`], every
/// state has an explicit edge for every letter, and the trap state loops to
/// itself. Anything without an explicit edge (start or trap on the
/// separator, characters outside the alphabet) also resolves to the trap
/// state through [`Automaton::next_state`].
///
/// The table holds no interior mutability and can be shared freely between
/// threads.
///
/// [`AutomatonBuilder::build`]: crate::AutomatonBuilder::build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    rows: Vec<Row>,
    accept: Vec<Option<String>>,
    trap: StateId,
}

impl Automaton {
    pub(crate) fn from_parts(rows: Vec<Row>, accept: Vec<Option<String>>, trap: StateId) -> Self {
        debug_assert_eq!(rows.len(), accept.len());
        debug_assert_eq!(trap.index() + 1, rows.len());
        Self { rows, accept, trap }
    }

    #[inline]
    pub fn start(&self) -> StateId {
        StateId::START
    }

    #[inline]
    pub fn trap(&self) -> StateId {
        self.trap
    }

    /// Number of states, start and trap included.
    pub fn state_count(&self) -> usize {
        self.rows.len()
    }

    /// All states in table order, the trap state last.
    pub fn states(&self) -> impl Iterator<Item = StateId> + use<> {
        (0..self.rows.len()).map(|i| StateId(i as u16))
    }

    /// Explicitly declared edge for `(state, c)`, if any.
    #[inline]
    pub fn transition(&self, state: StateId, c: char) -> Option<StateId> {
        let symbol = Symbol::from_char(c)?;
        self.rows.get(state.index())?[symbol.column()]
    }

    /// Total transition function: the explicit edge, or the trap state.
    #[inline]
    pub fn next_state(&self, state: StateId, c: char) -> StateId {
        self.transition(state, c).unwrap_or(self.trap)
    }

    #[inline]
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.word_for_accept_state(state).is_some()
    }

    /// The vocabulary word whose chain ends at `state`.
    pub fn word_for_accept_state(&self, state: StateId) -> Option<&str> {
        self.accept.get(state.index())?.as_deref()
    }

    /// Accept states in ascending order.
    pub fn accept_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.accept
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_some())
            .map(|(i, _)| StateId(i as u16))
    }

    /// Declared words in state order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.accept.iter().filter_map(|w| w.as_deref())
    }

    /// Run `word` from the start state and report whether it ends accepting.
    ///
    /// The word must already be lowercase; any other character leads to the
    /// trap state.
    pub fn accepts(&self, word: &str) -> bool {
        let end = word
            .chars()
            .fold(self.start(), |state, c| self.next_state(state, c));
        self.is_accepting(end)
    }

    /// Display name of a state: `q<n>`, or `qX` for the trap state.
    pub fn state_name(&self, state: StateId) -> String {
        if state == self.trap {
            "qX".to_string()
        } else {
            state.to_string()
        }
    }

    /// Every explicit edge, ordered by state then symbol column.
    pub fn transitions(&self) -> impl Iterator<Item = Transition> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter().enumerate().filter_map(move |(column, cell)| {
                cell.map(|to| Transition {
                    from: StateId(i as u16),
                    symbol: Symbol::from_column(column),
                    to,
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::AutomatonBuilder;

    use super::*;

    fn small() -> Automaton {
        let mut b = AutomatonBuilder::new();
        b.declare_all(["and", "any"]).unwrap();
        b.build()
    }

    #[test]
    fn trap_is_absorbing() {
        let a = small();
        let trap = a.trap();
        for c in ('a'..='z').chain([' ', '.', '9', 'Q']) {
            assert_eq!(a.next_state(trap, c), trap);
        }
        assert!(!a.is_accepting(trap));
    }

    #[test]
    fn next_state_is_total() {
        let a = small();
        assert_eq!(a.next_state(a.start(), 'x'), a.trap());
        assert_eq!(a.next_state(a.start(), ' '), a.trap());
        assert_eq!(a.next_state(a.start(), '!'), a.trap());
        assert_eq!(a.next_state(StateId(999), 'a'), a.trap());
    }

    #[test]
    fn accept_states_map_to_words() {
        let a = small();
        let accepts: Vec<StateId> = a.accept_states().collect();
        assert_eq!(accepts, [StateId(3), StateId(4)]);
        assert_eq!(a.word_for_accept_state(StateId(3)), Some("and"));
        assert_eq!(a.word_for_accept_state(StateId(4)), Some("any"));
        assert_eq!(a.word_for_accept_state(StateId(2)), None);
        assert_eq!(a.words().collect::<Vec<_>>(), ["and", "any"]);
    }

    #[test]
    fn accepts_requires_full_word() {
        let a = small();
        assert!(a.accepts("and"));
        assert!(!a.accepts("an"));
        assert!(!a.accepts("anders"));
        assert!(!a.accepts("AND"));
        assert!(!a.accepts(""));
    }

    #[test]
    fn state_names() {
        let a = small();
        assert_eq!(a.state_name(a.start()), "q0");
        assert_eq!(a.state_name(StateId(3)), "q3");
        assert_eq!(a.state_name(a.trap()), "qX");
    }

    #[test]
    fn transitions_cover_the_table() {
        let a = small();
        // 4 chain states + start + trap, 26 letters each, plus 4 separator edges
        assert_eq!(a.transitions().count(), 6 * 26 + 4);
        let first = a.transitions().next().unwrap();
        assert_eq!(first.from, a.start());
        assert_eq!(first.symbol, Symbol::Letter(0));
        assert_eq!(first.to, StateId(1));
    }
}
