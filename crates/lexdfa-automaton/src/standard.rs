// The ten-word automaton used by the scanner

use crate::{Automaton, AutomatonBuilder, AutomatonError};

/// Chain declaration order of the standard table.
///
/// This order numbers the states so that the accept states are
/// `q3 q7 q11 q14 q20 q25 q28 q30 q34 q39`, with `bad` and `blue` sharing
/// `q12` for their common `b`.
pub const STANDARD_CHAINS: [&str; 10] = [
    "and", "most", "good", "bad", "pretty", "dirty", "blue", "or", "very", "never",
];

impl Automaton {
    /// Build the standard ten-word automaton.
    pub fn standard() -> Result<Automaton, AutomatonError> {
        Self::from_words(STANDARD_CHAINS)
    }

    /// Build an automaton from words in chain declaration order.
    pub fn from_words<I, S>(words: I) -> Result<Automaton, AutomatonError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = AutomatonBuilder::new();
        builder.declare_all(words)?;
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use lexdfa_core::vocabulary::STANDARD_WORDS;

    use crate::StateId;

    use super::*;

    fn standard() -> Automaton {
        Automaton::standard().unwrap()
    }

    #[test]
    fn accept_state_numbering() {
        let a = standard();
        let names: Vec<String> = a.accept_states().map(|s| a.state_name(s)).collect();
        assert_eq!(
            names,
            ["q3", "q7", "q11", "q14", "q20", "q25", "q28", "q30", "q34", "q39"]
        );
        assert_eq!(a.state_count(), 41);
        assert_eq!(a.state_name(a.trap()), "qX");
    }

    #[test]
    fn every_vocabulary_word_reaches_its_own_accept_state() {
        let a = standard();
        for word in STANDARD_WORDS {
            let end = word.chars().fold(a.start(), |s, c| a.next_state(s, c));
            assert_eq!(a.word_for_accept_state(end), Some(word), "word {word}");
        }
    }

    #[test]
    fn accept_states_are_exactly_the_chain_ends() {
        let a = standard();
        assert_eq!(a.accept_states().count(), STANDARD_WORDS.len());
        let mut words: Vec<&str> = a.words().collect();
        words.sort_unstable();
        let mut expected = STANDARD_WORDS.to_vec();
        expected.sort_unstable();
        assert_eq!(words, expected);
    }

    #[test]
    fn bad_and_blue_branch_after_b() {
        let a = standard();
        let b = a.next_state(a.start(), 'b');
        assert_eq!(a.state_name(b), "q12");
        assert_eq!(a.next_state(b, 'a'), StateId(13));
        assert_eq!(a.next_state(b, 'l'), StateId(26));
        assert!(a.accepts("bad"));
        assert!(a.accepts("blue"));
        assert!(!a.accepts("bue"));
        assert!(!a.accepts("blad"));
    }

    #[test]
    fn intermediate_states_never_accept() {
        let a = standard();
        for prefix in ["a", "an", "mos", "goo", "b", "bl", "pret", "dirt", "o", "ver", "neve"] {
            assert!(!a.accepts(prefix), "prefix {prefix}");
        }
    }

    #[test]
    fn longer_words_fall_into_the_trap() {
        let a = standard();
        let end = "anderson".chars().fold(a.start(), |s, c| a.next_state(s, c));
        assert_eq!(end, a.trap());
        assert!(!a.accepts("anderson"));
        assert!(!a.accepts("oregon"));
    }

    #[test]
    fn separator_returns_to_start() {
        let a = standard();
        let mut s = a.start();
        for c in "very".chars() {
            s = a.next_state(s, c);
        }
        assert_eq!(a.next_state(s, ' '), a.start());
        // an intermediate state resets too
        let v = a.next_state(a.start(), 'v');
        assert_eq!(a.next_state(v, ' '), a.start());
    }
}
