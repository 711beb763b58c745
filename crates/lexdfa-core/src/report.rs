// Scan result types returned to front ends

use crate::enums::Status;
use crate::vocabulary::Vocabulary;

// ---------------------------------------------------------------------------
// SentenceReport
// ---------------------------------------------------------------------------

/// Result of scanning one sentence.
///
/// Word-keyed fields (`matched_words`, `occurrence_count`, `positions`) are
/// listed in vocabulary order. A rejected sentence has all three empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceReport {
    /// The sentence text, trimmed of surrounding whitespace.
    pub sentence: String,

    pub status: Status,

    /// Every tokenized word of the sentence, case-folded, in order.
    pub words: Vec<String>,

    /// Vocabulary words found among `words`.
    pub matched_words: Vec<String>,

    /// Whole-word occurrences of each matched word in `sentence`.
    pub occurrence_count: Vec<(String, usize)>,

    /// Character offsets (within `sentence`) of each vocabulary word that
    /// occurs as a whole word.
    pub positions: Vec<(String, Vec<usize>)>,
}

impl SentenceReport {
    /// Create a rejected report with no matches.
    pub fn rejected(sentence: impl Into<String>, words: Vec<String>) -> Self {
        Self {
            sentence: sentence.into(),
            status: Status::Rejected,
            words,
            matched_words: Vec::new(),
            occurrence_count: Vec::new(),
            positions: Vec::new(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status.is_accepted()
    }

    /// Occurrences of `word` in this sentence, 0 when it was not matched.
    pub fn count_of(&self, word: &str) -> usize {
        self.occurrence_count
            .iter()
            .find(|(w, _)| w == word)
            .map_or(0, |(_, c)| *c)
    }

    /// Offsets of `word` in this sentence, empty when absent.
    pub fn positions_of(&self, word: &str) -> &[usize] {
        self.positions
            .iter()
            .find(|(w, _)| w == word)
            .map_or(&[], |(_, p)| p.as_slice())
    }
}

// ---------------------------------------------------------------------------
// Totals
// ---------------------------------------------------------------------------

/// Occurrence count per vocabulary word summed over all sentences.
///
/// Every vocabulary word has an entry, in vocabulary order, even when its
/// count is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    counts: Vec<(String, usize)>,
}

impl Totals {
    /// All vocabulary words at zero.
    pub fn zeroed(vocabulary: &Vocabulary) -> Self {
        Self {
            counts: vocabulary.iter().map(|(_, w)| (w.to_string(), 0)).collect(),
        }
    }

    /// Add `n` occurrences of `word`. Words outside the vocabulary are ignored.
    pub fn add(&mut self, word: &str, n: usize) {
        if let Some((_, c)) = self.counts.iter_mut().find(|(w, _)| w == word) {
            *c += n;
        }
    }

    /// Count for `word`, 0 for unknown words.
    pub fn get(&self, word: &str) -> usize {
        self.counts
            .iter()
            .find(|(w, _)| w == word)
            .map_or(0, |(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Sum over all words.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }
}

// ---------------------------------------------------------------------------
// ScanReport
// ---------------------------------------------------------------------------

/// Result of scanning a full input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub sentences: Vec<SentenceReport>,
    pub totals: Totals,
}

impl ScanReport {
    /// A report with no sentences and zero totals, shown for empty input.
    pub fn empty(vocabulary: &Vocabulary) -> Self {
        Self {
            sentences: Vec::new(),
            totals: Totals::zeroed(vocabulary),
        }
    }

    pub fn accepted_sentences(&self) -> usize {
        self.sentences.iter().filter(|s| s.is_accepted()).count()
    }
}

// ---------------------------------------------------------------------------
// Word check
//
// The word-by-word mode classifies each whitespace-separated word on its own
// instead of scanning sentences.
// ---------------------------------------------------------------------------

/// Verdict for one whitespace-separated word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordVerdict {
    /// The word as typed, punctuation included.
    pub raw: String,
    /// Letters only, lowercased.
    pub clean: String,
    /// 1-based position among the words of the text.
    pub position: usize,
    pub status: Status,
}

/// Result of checking a text word by word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCheckReport {
    pub verdicts: Vec<WordVerdict>,
    /// 1-based positions of each accepted word, in vocabulary order.
    pub stats: Vec<(String, Vec<usize>)>,
    pub total_accepted: usize,
    pub status: Status,
}

impl WordCheckReport {
    /// A report for empty input.
    pub fn empty() -> Self {
        Self {
            verdicts: Vec::new(),
            stats: Vec::new(),
            total_accepted: 0,
            status: Status::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_zeroed_has_every_word() {
        let totals = Totals::zeroed(&Vocabulary::standard());
        assert_eq!(totals.iter().count(), 10);
        assert_eq!(totals.total(), 0);
        assert_eq!(totals.get("most"), 0);
    }

    #[test]
    fn totals_add() {
        let mut totals = Totals::zeroed(&Vocabulary::standard());
        totals.add("very", 2);
        totals.add("very", 1);
        totals.add("banana", 5);
        assert_eq!(totals.get("very"), 3);
        assert_eq!(totals.get("banana"), 0);
        assert_eq!(totals.total(), 3);
    }

    #[test]
    fn rejected_report_is_empty() {
        let r = SentenceReport::rejected("hello world", vec!["hello".into(), "world".into()]);
        assert!(!r.is_accepted());
        assert!(r.matched_words.is_empty());
        assert_eq!(r.count_of("hello"), 0);
        assert!(r.positions_of("hello").is_empty());
    }

    #[test]
    fn accessors_find_entries() {
        let r = SentenceReport {
            sentence: "very very good".into(),
            status: Status::Accepted,
            words: vec!["very".into(), "very".into(), "good".into()],
            matched_words: vec!["very".into(), "good".into()],
            occurrence_count: vec![("very".into(), 2), ("good".into(), 1)],
            positions: vec![("very".into(), vec![0, 5]), ("good".into(), vec![10])],
        };
        assert_eq!(r.count_of("very"), 2);
        assert_eq!(r.positions_of("good"), [10]);
    }

    #[test]
    fn empty_scan_report() {
        let r = ScanReport::empty(&Vocabulary::standard());
        assert!(r.sentences.is_empty());
        assert_eq!(r.accepted_sentences(), 0);
        assert_eq!(r.totals.total(), 0);
    }
}
