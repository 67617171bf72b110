//! Sentence and word segmentation.
//!
//! This module splits raw text units into sentences and sentences into word
//! tokens using the Unicode Text Segmentation algorithm (UAX #29). Unlike a
//! search-engine tokenizer, punctuation is kept as stand-alone tokens: the
//! part-of-speech tagger and the chunk grammar both want to see it.
//!
//! # Examples
//!
//! ```
//! use topica::analysis::tokenizer::SentenceTokenizer;
//!
//! let tokenizer = SentenceTokenizer::new();
//! let sentences: Vec<_> = tokenizer.sentences("The cat sat. A dog ran.");
//! assert_eq!(sentences.len(), 2);
//!
//! let words = tokenizer.words("The cat sat.");
//! assert_eq!(words, vec!["The", "cat", "sat", "."]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into sentences and sentences into word tokens.
///
/// Sentence boundaries and word bounds both follow UAX #29, which handles
/// international text and common abbreviations reasonably without a trained
/// model.
#[derive(Clone, Debug, Default)]
pub struct SentenceTokenizer;

impl SentenceTokenizer {
    /// Create a new sentence tokenizer.
    pub fn new() -> Self {
        SentenceTokenizer
    }

    /// Split a text unit into sentences.
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Split a sentence into word tokens, keeping punctuation as tokens.
    pub fn words(&self, sentence: &str) -> Vec<String> {
        sentence
            .split_word_bounds()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Name of this tokenizer (for debugging and configuration).
    pub fn name(&self) -> &'static str {
        "unicode_sentence"
    }
}
