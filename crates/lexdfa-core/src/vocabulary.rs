// The closed set of target words

use hashbrown::HashMap;

/// The target words in reporting order.
pub const STANDARD_WORDS: [&str; 10] = [
    "and", "or", "very", "never", "good", "bad", "pretty", "dirty", "blue", "most",
];

/// Index of a word within a [`Vocabulary`], in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub u16);

impl WordId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An ordered set of lowercase target words with O(1) lookup.
///
/// The order is the reporting order: totals tables, matched-word lists and
/// position tables all follow it.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<String>,
    index: HashMap<String, WordId>,
}

impl Vocabulary {
    /// Build a vocabulary from words in reporting order.
    ///
    /// Words are lowercased; a repeated word keeps its first position.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Vec::new();
        let mut index = HashMap::new();
        for word in words {
            let word = word.as_ref().to_ascii_lowercase();
            if index.contains_key(&word) {
                continue;
            }
            index.insert(word.clone(), WordId(list.len() as u16));
            list.push(word);
        }
        Self { words: list, index }
    }

    /// The ten-word vocabulary of the scanner.
    pub fn standard() -> Self {
        Self::new(STANDARD_WORDS)
    }

    /// Look up an already case-folded word.
    #[inline]
    pub fn lookup(&self, word: &str) -> Option<WordId> {
        self.index.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// The spelling of a word id.
    pub fn word(&self, id: WordId) -> &str {
        &self.words[id.index()]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate `(id, word)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (WordId(i as u16), w.as_str()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
