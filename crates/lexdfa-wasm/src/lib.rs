// WASM bindings for the lexdfa vocabulary scanner.
//
// Provides a `WasmScanner` class exported via wasm-bindgen that wraps the
// `Scanner` from lexdfa-scan. Reports are serialized to JavaScript values
// using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const scanner = new WasmScanner();
//   scanner.scan("This is very good.");  // => { sentences: [...], totals: [...] }
//   scanner.checkWords("very good");     // => { words: [...], totalAccepted: 2, ... }
//   scanner.automaton();                 // => { states: ["q0", ...], transitions: [...] }
//   scanner.vocabulary();                // => ["and", "or", ...]
//   WasmScanner.getVersion();            // => "0.1.0"

use serde::Serialize;
use wasm_bindgen::prelude::*;

use lexdfa_core::report::{ScanReport, SentenceReport, WordCheckReport};
use lexdfa_scan::{ScanError, Scanner};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCount {
    word: String,
    count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsPositions {
    word: String,
    positions: Vec<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSentence {
    sentence: String,
    status: &'static str,
    words: Vec<String>,
    matched_words: Vec<String>,
    occurrence_count: Vec<JsCount>,
    positions: Vec<JsPositions>,
}

/// Scan result. `error` is set (and `sentences` empty) for blank input.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsScanReport {
    sentences: Vec<JsSentence>,
    totals: Vec<JsCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsWordVerdict {
    raw: String,
    clean: String,
    position: usize,
    status: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsWordCheck {
    words: Vec<JsWordVerdict>,
    stats: Vec<JsPositions>,
    total_accepted: usize,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTransition {
    from: String,
    symbol: String,
    to: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsAcceptState {
    state: String,
    word: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsAutomaton {
    states: Vec<String>,
    alphabet: Vec<String>,
    start: String,
    accept: Vec<JsAcceptState>,
    trap: String,
    transitions: Vec<JsTransition>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn counts(pairs: impl IntoIterator<Item = (String, usize)>) -> Vec<JsCount> {
    pairs
        .into_iter()
        .map(|(word, count)| JsCount { word, count })
        .collect()
}

fn positions(pairs: Vec<(String, Vec<usize>)>) -> Vec<JsPositions> {
    pairs
        .into_iter()
        .map(|(word, positions)| JsPositions { word, positions })
        .collect()
}

fn sentence_to_js(s: SentenceReport) -> JsSentence {
    JsSentence {
        sentence: s.sentence,
        status: s.status.as_str(),
        words: s.words,
        matched_words: s.matched_words,
        occurrence_count: counts(s.occurrence_count),
        positions: positions(s.positions),
    }
}

fn scan_to_js(report: ScanReport, error: Option<String>) -> JsScanReport {
    JsScanReport {
        totals: counts(report.totals.iter().map(|(w, c)| (w.to_string(), c))),
        sentences: report.sentences.into_iter().map(sentence_to_js).collect(),
        error,
    }
}

fn words_to_js(report: WordCheckReport, error: Option<String>) -> JsWordCheck {
    JsWordCheck {
        words: report
            .verdicts
            .into_iter()
            .map(|v| JsWordVerdict {
                raw: v.raw,
                clean: v.clean,
                position: v.position,
                status: v.status.as_str(),
            })
            .collect(),
        stats: positions(report.stats),
        total_accepted: report.total_accepted,
        status: report.status.as_str(),
        error,
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn scan_error_to_js(e: ScanError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmScanner
// ============================================================================

/// Vocabulary scanner for WebAssembly.
///
/// Holds one immutable automaton; every call is independent.
#[wasm_bindgen]
pub struct WasmScanner {
    scanner: Scanner,
}

#[wasm_bindgen]
impl WasmScanner {
    /// Create a scanner over the standard vocabulary.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmScanner, JsError> {
        let scanner = Scanner::new().map_err(scan_error_to_js)?;
        Ok(WasmScanner { scanner })
    }

    /// Scan text sentence by sentence.
    ///
    /// Returns `{ sentences, totals }`. Each sentence has `sentence`,
    /// `status`, `words`, `matchedWords`, `occurrenceCount` and `positions`.
    /// Blank input yields no sentences, zero totals and an `error` message.
    pub fn scan(&self, text: &str) -> Result<JsValue, JsError> {
        let report = match self.scanner.scan(text) {
            Ok(report) => scan_to_js(report, None),
            Err(e @ ScanError::EmptyInput) => scan_to_js(
                ScanReport::empty(self.scanner.vocabulary()),
                Some(e.to_string()),
            ),
            Err(e) => return Err(scan_error_to_js(e)),
        };
        to_js(&report)
    }

    /// Check each whitespace-separated word on its own.
    ///
    /// Returns `{ words, stats, totalAccepted, status }`.
    #[wasm_bindgen(js_name = "checkWords")]
    pub fn check_words(&self, text: &str) -> Result<JsValue, JsError> {
        let report = match self.scanner.check_words(text) {
            Ok(report) => words_to_js(report, None),
            Err(e @ ScanError::EmptyInput) => {
                words_to_js(WordCheckReport::empty(), Some(e.to_string()))
            }
            Err(e) => return Err(scan_error_to_js(e)),
        };
        to_js(&report)
    }

    /// Describe the automaton: states, alphabet, start, accept and trap
    /// states, and every explicit edge.
    pub fn automaton(&self) -> Result<JsValue, JsError> {
        to_js(&self.describe_automaton())
    }

    /// The vocabulary words in reporting order.
    pub fn vocabulary(&self) -> Vec<String> {
        self.scanner
            .vocabulary()
            .words()
            .iter()
            .map(|w| w.to_string())
            .collect()
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

impl WasmScanner {
    fn describe_automaton(&self) -> JsAutomaton {
        let a = self.scanner.automaton();
        JsAutomaton {
            states: a.states().map(|s| a.state_name(s)).collect(),
            alphabet: lexdfa_core::character::ALPHABET
                .iter()
                .map(char::to_string)
                .collect(),
            start: a.state_name(a.start()),
            accept: a
                .accept_states()
                .filter_map(|s| {
                    let word = a.word_for_accept_state(s)?;
                    Some(JsAcceptState {
                        state: a.state_name(s),
                        word: word.to_string(),
                    })
                })
                .collect(),
            trap: a.state_name(a.trap()),
            transitions: a
                .transitions()
                .map(|t| JsTransition {
                    from: a.state_name(t.from),
                    symbol: t.symbol.as_char().to_string(),
                    to: a.state_name(t.to),
                })
                .collect(),
        }
    }
}
