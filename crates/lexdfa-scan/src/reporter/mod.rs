// Match reporter: vocabulary matches, counts and positions

use lexdfa_core::character::{fold, is_letter};
use lexdfa_core::enums::Status;
use lexdfa_core::report::SentenceReport;
use lexdfa_core::vocabulary::Vocabulary;

// ============================================================================
// Whole-word search
// ============================================================================

/// A sentence prepared for case-insensitive whole-word search.
///
/// Offsets are character offsets into the original sentence.
pub struct Haystack {
    chars: Vec<char>,
}

impl Haystack {
    pub fn new(sentence: &str) -> Self {
        Self {
            chars: sentence.chars().map(fold).collect(),
        }
    }

    /// Offsets of every whole-word occurrence of `word`, left to right.
    ///
    /// An occurrence is whole when the characters on either side of it, if
    /// any, are not letters. `word` must be lowercase.
    pub fn find_whole_word(&self, word: &str) -> Vec<usize> {
        let needle: Vec<char> = word.chars().collect();
        let n = needle.len();
        if n == 0 || n > self.chars.len() {
            return Vec::new();
        }

        let mut found = Vec::new();
        for start in 0..=self.chars.len() - n {
            let end = start + n;
            if self.chars[start..end] != needle[..] {
                continue;
            }
            let open = start == 0 || !is_letter(self.chars[start - 1]);
            let close = end == self.chars.len() || !is_letter(self.chars[end]);
            if open && close {
                found.push(start);
            }
        }
        found
    }
}

// ============================================================================
// Reporter operations
// ============================================================================

/// Vocabulary words present among the tokenized `words`, in vocabulary order.
pub fn matched_words(vocabulary: &Vocabulary, words: &[String]) -> Vec<String> {
    let mut seen = vec![false; vocabulary.len()];
    for word in words {
        if let Some(id) = vocabulary.lookup(word) {
            seen[id.index()] = true;
        }
    }
    vocabulary
        .iter()
        .filter(|(id, _)| seen[id.index()])
        .map(|(_, w)| w.to_string())
        .collect()
}

/// Whole-word, case-insensitive occurrences of each matched word in the
/// original sentence text.
pub fn occurrence_count(matched: &[String], sentence: &str) -> Vec<(String, usize)> {
    let haystack = Haystack::new(sentence);
    matched
        .iter()
        .map(|w| (w.clone(), haystack.find_whole_word(w).len()))
        .collect()
}

/// Offsets of every vocabulary word that occurs as a whole word in the
/// sentence. Words that do not occur are left out.
pub fn positions(vocabulary: &Vocabulary, sentence: &str) -> Vec<(String, Vec<usize>)> {
    let haystack = Haystack::new(sentence);
    vocabulary
        .iter()
        .filter_map(|(_, w)| {
            let found = haystack.find_whole_word(w);
            (!found.is_empty()).then(|| (w.to_string(), found))
        })
        .collect()
}

/// Assemble the report for one sentence from its tokenized words.
///
/// A sentence is accepted when at least one vocabulary word is among its
/// words; only then are counts and positions computed.
pub fn report_sentence(
    vocabulary: &Vocabulary,
    sentence: &str,
    words: Vec<String>,
) -> SentenceReport {
    let matched = matched_words(vocabulary, &words);
    if matched.is_empty() {
        return SentenceReport::rejected(sentence, words);
    }

    SentenceReport {
        sentence: sentence.to_string(),
        status: Status::Accepted,
        occurrence_count: occurrence_count(&matched, sentence),
        positions: positions(vocabulary, sentence),
        matched_words: matched,
        words,
    }
}
