// Word-by-word accept/reject check
//
// Unlike `scan`, this mode does not split sentences. Each
// whitespace-separated word is stripped of everything but its letters and
// run through the automaton on its own.

use lexdfa_automaton::Automaton;
use lexdfa_core::character::{fold, is_letter};
use lexdfa_core::enums::Status;
use lexdfa_core::report::{WordCheckReport, WordVerdict};
use lexdfa_core::vocabulary::Vocabulary;

/// Keep only the letters of `raw`, lowercased.
pub fn clean_word(raw: &str) -> String {
    raw.chars().filter(|&c| is_letter(c)).map(fold).collect()
}

/// Classify every whitespace-separated word of `text`.
///
/// Positions are 1-based word indices. `stats` lists the positions of each
/// accepted word in vocabulary order.
pub fn check_words(automaton: &Automaton, vocabulary: &Vocabulary, text: &str) -> WordCheckReport {
    let mut verdicts = Vec::new();
    let mut positions: Vec<Vec<usize>> = vec![Vec::new(); vocabulary.len()];
    let mut total_accepted = 0;

    for (i, raw) in text.split_whitespace().enumerate() {
        let position = i + 1;
        let clean = clean_word(raw);
        let accepted = automaton.accepts(&clean);
        if accepted {
            total_accepted += 1;
            if let Some(id) = vocabulary.lookup(&clean) {
                positions[id.index()].push(position);
            }
        }
        verdicts.push(WordVerdict {
            raw: raw.to_string(),
            clean,
            position,
            status: Status::from_accepted(accepted),
        });
    }

    let stats = vocabulary
        .iter()
        .zip(positions)
        .filter(|(_, p)| !p.is_empty())
        .map(|((_, w), p)| (w.to_string(), p))
        .collect();

    WordCheckReport {
        verdicts,
        stats,
        total_accepted,
        status: Status::from_accepted(total_accepted > 0),
    }
}
