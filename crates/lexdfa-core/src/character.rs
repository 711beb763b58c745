// Character classification and the scanner alphabet

// ---------------------------------------------------------------------------
// Alphabet
// ---------------------------------------------------------------------------

/// The input alphabet of the automaton: lowercase ASCII letters.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Number of letters in [`ALPHABET`].
pub const ALPHABET_SIZE: usize = ALPHABET.len();

/// The word separator that closes a live automaton state back to the start state.
pub const WORD_SEPARATOR: char = ' ';

/// Returns the ordinal of a lowercase alphabet letter (`'a'` = 0).
#[inline]
pub fn alphabet_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some(c as usize - 'a' as usize)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Character classes
//
// Only ASCII letters count as letters: the vocabulary is spelled in `a..z`
// and no Unicode normalization is attempted, so `é` or `ä` behave like
// punctuation and split words.
// ---------------------------------------------------------------------------

/// Check whether a character is part of a word.
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check whether a character ends a sentence.
#[inline]
pub fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '\n')
}

/// Case-fold a character the way the scanner compares words.
#[inline]
pub fn fold(c: char) -> char {
    c.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_contiguous() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(alphabet_index(c), Some(i));
        }
        assert_eq!(ALPHABET_SIZE, 26);
    }

    #[test]
    fn alphabet_index_rejects_non_letters() {
        assert_eq!(alphabet_index('A'), None);
        assert_eq!(alphabet_index(' '), None);
        assert_eq!(alphabet_index('1'), None);
        assert_eq!(alphabet_index('\u{00E4}'), None); // ä
    }

    #[test]
    fn letters_and_terminators() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(!is_letter('\u{00E9}')); // é
        assert!(!is_letter('7'));
        assert!(is_sentence_terminator('.'));
        assert!(is_sentence_terminator('\n'));
        assert!(!is_sentence_terminator('!'));
        assert!(!is_sentence_terminator(' '));
    }

    #[test]
    fn fold_only_touches_ascii() {
        assert_eq!(fold('V'), 'v');
        assert_eq!(fold('v'), 'v');
        assert_eq!(fold('\u{00C4}'), '\u{00C4}');
    }
}
