//! Shared types for the lexdfa vocabulary scanner.
//!
//! - [`character`] -- alphabet and character classification
//! - [`enums`] -- acceptance status
//! - [`vocabulary`] -- the closed set of target words
//! - [`report`] -- per-sentence, aggregate and word-check results

pub mod character;
pub mod enums;
pub mod report;
pub mod vocabulary;
