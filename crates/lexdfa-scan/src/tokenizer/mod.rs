// Tokenizer and automaton driver

use lexdfa_automaton::{Automaton, StateId};
use lexdfa_core::character::{fold, is_letter};
use tracing::trace;

/// A word segmented from a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The word, case-folded.
    pub text: String,

    /// Character offset of the first letter within the sentence.
    pub pos: usize,

    /// Automaton state reached after the last letter.
    pub state: StateId,
}

impl Token {
    /// Whether the automaton ended this word in an accept state.
    pub fn ends_accepting(&self, automaton: &Automaton) -> bool {
        automaton.is_accepting(self.state)
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Word buffer and automaton state for one sentence.
struct Driver<'a> {
    automaton: &'a Automaton,
    state: StateId,
    buffer: String,
    start: usize,
    tokens: Vec<Token>,
}

impl<'a> Driver<'a> {
    fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            state: automaton.start(),
            buffer: String::new(),
            start: 0,
            tokens: Vec::new(),
        }
    }

    /// Emit the buffered word, if any, and return to the start state.
    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            self.tokens.push(Token {
                text: std::mem::take(&mut self.buffer),
                pos: self.start,
                state: self.state,
            });
        }
        self.state = self.automaton.start();
    }

    fn step(&mut self, pos: usize, c: char) {
        if !is_letter(c) {
            self.flush();
            return;
        }

        let c = fold(c);
        match self.automaton.transition(self.state, c) {
            Some(next) => {
                if self.buffer.is_empty() {
                    self.start = pos;
                }
                self.state = next;
                self.buffer.push(c);
            }
            None => {
                // Only possible for a table that was not closed over the
                // alphabet: the letter is dropped and the word ends here.
                trace!(pos, %c, "no transition, resetting");
                self.flush();
            }
        }
    }

    fn finish(mut self) -> Vec<Token> {
        self.flush();
        self.tokens
    }
}

/// Segment a sentence into maximal runs of letters.
///
/// Each character is case-folded and fed to the automaton. A non-letter ends
/// the current word and resets the automaton to the start state; the final
/// word is flushed at the end of the sentence. Nothing carries over between
/// calls.
pub fn tokenize(automaton: &Automaton, sentence: &str) -> Vec<Token> {
    let mut driver = Driver::new(automaton);
    for (pos, c) in sentence.chars().enumerate() {
        driver.step(pos, c);
    }
    driver.finish()
}

/// The folded words of a sentence, in order.
pub fn words(automaton: &Automaton, sentence: &str) -> Vec<String> {
    tokenize(automaton, sentence)
        .into_iter()
        .map(|t| t.text)
        .collect()
}
