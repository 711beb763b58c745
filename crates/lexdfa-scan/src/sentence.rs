// Sentence splitting

use lexdfa_core::character::is_sentence_terminator;

/// Split text into sentences.
///
/// A sentence is the text between `.` or line-feed characters. Consecutive
/// terminators act as one, surrounding whitespace is trimmed, and empty
/// sentences are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(is_sentence_terminator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
