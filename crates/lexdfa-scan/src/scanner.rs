// Scanner: top-level entry point used by the front ends.
//
// Owns one immutable automaton and the vocabulary it recognizes. All
// per-request state (word buffers, driver state, counters) lives on the
// stack of the call, so a single `Scanner` can serve any number of
// requests, from any number of threads.

use lexdfa_automaton::Automaton;
use lexdfa_core::report::{ScanReport, Totals, WordCheckReport};
use lexdfa_core::vocabulary::Vocabulary;
use tracing::{debug, debug_span};

use crate::ScanError;
use crate::reporter::report_sentence;
use crate::sentence::split_sentences;
use crate::tokenizer;
use crate::words::check_words;

/// Vocabulary scanner.
#[derive(Debug, Clone)]
pub struct Scanner {
    automaton: Automaton,
    vocabulary: Vocabulary,
}

impl Scanner {
    /// Create a scanner for the standard ten-word vocabulary.
    pub fn new() -> Result<Self, ScanError> {
        Ok(Self {
            automaton: Automaton::standard()?,
            vocabulary: Vocabulary::standard(),
        })
    }

    /// Create a scanner for a custom vocabulary.
    ///
    /// The words are declared in the given order, which is also the reporting
    /// order.
    pub fn with_words<I, S>(words: I) -> Result<Self, ScanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect();
        let automaton = Automaton::from_words(&words)?;
        let vocabulary = Vocabulary::new(&words);
        Ok(Self {
            automaton,
            vocabulary,
        })
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Scan a full text: split it into sentences, report each one and sum
    /// the occurrence counts.
    ///
    /// Returns [`ScanError::EmptyInput`] for empty or whitespace-only text.
    /// Text made only of terminators yields a report with no sentences.
    pub fn scan(&self, text: &str) -> Result<ScanReport, ScanError> {
        if text.trim().is_empty() {
            return Err(ScanError::EmptyInput);
        }

        let mut totals = Totals::zeroed(&self.vocabulary);
        let mut sentences = Vec::new();

        for (index, sentence) in split_sentences(text).into_iter().enumerate() {
            let _span = debug_span!("sentence", index).entered();
            let words = tokenizer::words(&self.automaton, sentence);
            debug!(?words, "tokenized");

            let report = report_sentence(&self.vocabulary, sentence, words);
            for (word, count) in &report.occurrence_count {
                totals.add(word, *count);
            }
            debug!(
                status = %report.status,
                matched = ?report.matched_words,
                "scanned"
            );
            sentences.push(report);
        }

        Ok(ScanReport { sentences, totals })
    }

    /// Check a text word by word, without sentence splitting.
    ///
    /// Returns [`ScanError::EmptyInput`] for empty or whitespace-only text.
    pub fn check_words(&self, text: &str) -> Result<WordCheckReport, ScanError> {
        if text.trim().is_empty() {
            return Err(ScanError::EmptyInput);
        }
        let report = check_words(&self.automaton, &self.vocabulary, text);
        debug!(
            words = report.verdicts.len(),
            accepted = report.total_accepted,
            "checked words"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use lexdfa_core::enums::Status;

    use super::*;

    fn scanner() -> Scanner {
        Scanner::new().unwrap()
    }

    #[test]
    fn empty_input_is_an_error() {
        let s = scanner();
        assert_eq!(s.scan(""), Err(ScanError::EmptyInput));
        assert_eq!(s.scan(" \n\t "), Err(ScanError::EmptyInput));
        assert_eq!(s.check_words("   "), Err(ScanError::EmptyInput));
    }

    #[test]
    fn terminators_only_yield_no_sentences() {
        let report = scanner().scan("...").unwrap();
        assert!(report.sentences.is_empty());
        assert_eq!(report.totals.total(), 0);
        assert_eq!(report.totals.iter().count(), 10);
    }

    #[test]
    fn multi_sentence_aggregation() {
        let report = scanner().scan("This is very good. I feel very bad.").unwrap();
        assert_eq!(report.sentences.len(), 2);
        assert!(report.sentences.iter().all(|s| s.status == Status::Accepted));
        assert_eq!(report.totals.get("very"), 2);
        assert_eq!(report.totals.get("good"), 1);
        assert_eq!(report.totals.get("bad"), 1);
        assert_eq!(report.totals.total(), 4);
        assert_eq!(report.accepted_sentences(), 2);
    }

    #[test]
    fn positions_are_relative_to_the_trimmed_sentence() {
        let report = scanner().scan("x.   very good").unwrap();
        let second = &report.sentences[1];
        assert_eq!(second.sentence, "very good");
        assert_eq!(second.positions_of("very"), [0]);
        assert_eq!(second.positions_of("good"), [5]);
    }

    #[test]
    fn custom_vocabulary() {
        let s = Scanner::with_words(["cat", "car"]).unwrap();
        let report = s.scan("The cat sat in the car. Cats!").unwrap();
        assert_eq!(report.sentences[0].matched_words, ["cat", "car"]);
        assert_eq!(report.sentences[1].status, Status::Rejected);
        assert_eq!(report.totals.get("cat"), 1);
    }

    #[test]
    fn invalid_custom_vocabulary() {
        assert!(matches!(
            Scanner::with_words(["ok", "not ok"]),
            Err(ScanError::Automaton(_))
        ));
    }

    #[test]
    fn scanner_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Scanner>();
    }
}
