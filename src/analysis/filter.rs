//! Candidate phrase filtering.
//!
//! After segmentation every phrase string passes through a
//! [`CandidateFilter`], which drops stop words, whitespace-only and
//! pure-punctuation strings, and anything of two characters or fewer.
//! Survivors are lower-cased by the extractor. Rejecting a candidate is a
//! filtering decision, never an error.
//!
//! # Examples
//!
//! ```
//! use topica::analysis::filter::CandidateFilter;
//!
//! let filter = CandidateFilter::new(); // default English stop words
//! assert!(!filter.accept("the"));
//! assert!(!filter.accept("!!"));
//! assert!(filter.accept("topic extraction"));
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

/// Default English stop words list.
///
/// The standard corpus list: pronouns, auxiliaries, articles, particles,
/// and contraction fragments.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// ASCII punctuation characters.
const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Default English stop words as a set, loaded once per process.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<AHashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Default punctuation characters as a set, loaded once per process.
pub static DEFAULT_PUNCTUATION_SET: LazyLock<AHashSet<char>> =
    LazyLock::new(|| ASCII_PUNCTUATION.chars().collect());

/// A filter deciding which candidate phrases survive extraction.
///
/// A phrase is kept iff it is non-empty after trimming, not exactly a
/// configured stop word, not composed entirely of configured punctuation
/// characters, and longer than two characters. The stop-word comparison
/// happens on the phrase as extracted, before any case folding.
#[derive(Clone, Debug)]
pub struct CandidateFilter {
    /// The set of stop words to reject.
    stop_words: Arc<AHashSet<String>>,
    /// Characters counting as punctuation for the all-punctuation check.
    puncts: Arc<AHashSet<char>>,
}

impl CandidateFilter {
    /// Create a filter with the default English stop words and ASCII
    /// punctuation.
    pub fn new() -> Self {
        CandidateFilter {
            stop_words: Arc::new(DEFAULT_ENGLISH_STOP_WORDS_SET.clone()),
            puncts: Arc::new(DEFAULT_PUNCTUATION_SET.clone()),
        }
    }

    /// Replace the stop-word set.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = Arc::new(words.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Replace the punctuation set.
    pub fn with_puncts<I>(mut self, puncts: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.puncts = Arc::new(puncts.into_iter().collect());
        self
    }

    /// Check if a phrase is a configured stop word.
    pub fn is_stop_word(&self, phrase: &str) -> bool {
        self.stop_words.contains(phrase)
    }

    /// Decide whether a candidate phrase survives.
    pub fn accept(&self, phrase: &str) -> bool {
        !phrase.trim().is_empty()
            && !self.is_stop_word(phrase)
            && !phrase.chars().all(|c| self.puncts.contains(&c))
            && phrase.chars().count() > 2
    }
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = CandidateFilter::new();

        assert!(!filter.accept("the"));
        assert!(!filter.accept(""));
        assert!(!filter.accept("   "));
        assert!(!filter.accept("..."));
        assert!(filter.accept("rust language"));
    }

    #[test]
    fn test_custom_sets() {
        let filter = CandidateFilter::new()
            .with_stop_words(vec!["the", "a"])
            .with_puncts(['!', '?']);

        assert!(!filter.accept("the")); // stop word
        assert!(!filter.accept("!!")); // pure punctuation
        assert!(!filter.accept("ok")); // length 2
        assert!(filter.accept("CAT")); // kept; extractor lower-cases it
    }

    #[test]
    fn test_stop_word_match_is_exact() {
        let filter = CandidateFilter::new().with_stop_words(vec!["the"]);

        // Comparison happens before case folding: "The" is not "the".
        assert!(filter.accept("The"));
    }

    #[test]
    fn test_length_counts_characters() {
        let filter = CandidateFilter::new();

        // Two characters, dropped even though multibyte.
        assert!(!filter.accept("où"));
        assert!(filter.accept("oùi"));
    }

    #[test]
    fn test_default_sets_loaded_once() {
        assert!(DEFAULT_ENGLISH_STOP_WORDS_SET.contains("the"));
        assert!(DEFAULT_PUNCTUATION_SET.contains(&'!'));
        assert_eq!(DEFAULT_PUNCTUATION_SET.len(), 32);
    }
}
