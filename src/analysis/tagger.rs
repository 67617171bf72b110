//! Part-of-speech tagging.
//!
//! Tagging is a collaborator seam: the extractor only depends on the
//! [`Tagger`] trait, so a statistical or model-backed tagger can be plugged
//! in. The built-in [`RuleTagger`] is a deterministic lexicon-plus-suffix
//! tagger emitting Penn Treebank style tags, good enough to drive the chunk
//! grammar without any external model files.
//!
//! # Examples
//!
//! ```
//! use topica::analysis::tagger::{RuleTagger, Tagger};
//!
//! let tagger = RuleTagger::new();
//! let words: Vec<String> = ["The", "big", "cat"].iter().map(|s| s.to_string()).collect();
//! let tagged = tagger.tag(&words).unwrap();
//!
//! assert_eq!(tagged[0].pos, "DT");
//! assert_eq!(tagged[1].pos, "JJ");
//! assert_eq!(tagged[2].pos, "NN");
//! ```

use std::sync::LazyLock;

use ahash::AHashMap;

use crate::analysis::token::TaggedWord;
use crate::error::Result;

/// Trait for taggers that assign a part-of-speech tag to each word.
pub trait Tagger: Send + Sync {
    /// Tag an ordered sequence of words, preserving order.
    fn tag(&self, words: &[String]) -> Result<Vec<TaggedWord>>;

    /// Get the name of this tagger (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Closed-class word lexicon, keyed by lower-cased surface form.
static LEXICON: LazyLock<AHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let entries: &[(&str, &str)] = &[
        // Determiners
        ("the", "DT"),
        ("a", "DT"),
        ("an", "DT"),
        ("this", "DT"),
        ("that", "DT"),
        ("these", "DT"),
        ("those", "DT"),
        ("each", "DT"),
        ("every", "DT"),
        ("some", "DT"),
        ("any", "DT"),
        ("no", "DT"),
        // Prepositions and subordinating conjunctions
        ("of", "IN"),
        ("in", "IN"),
        ("on", "IN"),
        ("at", "IN"),
        ("by", "IN"),
        ("for", "IN"),
        ("with", "IN"),
        ("from", "IN"),
        ("to", "IN"),
        ("into", "IN"),
        ("over", "IN"),
        ("under", "IN"),
        ("about", "IN"),
        ("after", "IN"),
        ("before", "IN"),
        ("between", "IN"),
        ("during", "IN"),
        ("through", "IN"),
        ("against", "IN"),
        ("without", "IN"),
        ("within", "IN"),
        ("upon", "IN"),
        ("as", "IN"),
        ("if", "IN"),
        ("because", "IN"),
        ("while", "IN"),
        // Coordinating conjunctions
        ("and", "CC"),
        ("or", "CC"),
        ("but", "CC"),
        ("nor", "CC"),
        ("so", "CC"),
        ("yet", "CC"),
        // Pronouns
        ("i", "PRP"),
        ("you", "PRP"),
        ("he", "PRP"),
        ("she", "PRP"),
        ("it", "PRP"),
        ("we", "PRP"),
        ("they", "PRP"),
        ("me", "PRP"),
        ("him", "PRP"),
        ("her", "PRP"),
        ("us", "PRP"),
        ("them", "PRP"),
        ("its", "PRP$"),
        ("my", "PRP$"),
        ("your", "PRP$"),
        ("his", "PRP$"),
        ("our", "PRP$"),
        ("their", "PRP$"),
        // Modals
        ("can", "MD"),
        ("could", "MD"),
        ("may", "MD"),
        ("might", "MD"),
        ("must", "MD"),
        ("shall", "MD"),
        ("should", "MD"),
        ("will", "MD"),
        ("would", "MD"),
        // Auxiliaries and common verbs
        ("is", "VBZ"),
        ("are", "VBP"),
        ("was", "VBD"),
        ("were", "VBD"),
        ("be", "VB"),
        ("been", "VBN"),
        ("being", "VBG"),
        ("am", "VBP"),
        ("has", "VBZ"),
        ("have", "VBP"),
        ("had", "VBD"),
        ("do", "VBP"),
        ("does", "VBZ"),
        ("did", "VBD"),
        // Wh-words
        ("who", "WP"),
        ("what", "WP"),
        ("whom", "WP"),
        ("which", "WDT"),
        ("whose", "WP$"),
        ("when", "WRB"),
        ("where", "WRB"),
        ("why", "WRB"),
        ("how", "WRB"),
        // Existential and common adverbs
        ("there", "EX"),
        ("not", "RB"),
        ("very", "RB"),
        ("too", "RB"),
        ("also", "RB"),
        ("then", "RB"),
        ("now", "RB"),
        ("here", "RB"),
    ];
    entries.iter().copied().collect()
});

/// Adjective-forming suffixes checked before the noun fallback.
const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "ble", "ical", "ish", "less"];

/// A deterministic rule-based part-of-speech tagger.
///
/// Resolution order per word: punctuation tags as itself (Penn Treebank
/// convention), then the closed-class lexicon (case-insensitive), then
/// numerals, then capitalization, then suffix heuristics, and finally the
/// `NN` fallback.
#[derive(Clone, Debug, Default)]
pub struct RuleTagger;

impl RuleTagger {
    /// Create a new rule-based tagger.
    pub fn new() -> Self {
        RuleTagger
    }

    fn tag_word(&self, word: &str) -> String {
        if !word.is_empty() && word.chars().all(|c| !c.is_alphanumeric()) {
            // Punctuation tokens carry themselves as tag.
            return word.to_string();
        }

        let lower = word.to_lowercase();
        if let Some(tag) = LEXICON.get(lower.as_str()) {
            return (*tag).to_string();
        }

        if word.chars().all(|c| c.is_numeric() || c == '.' || c == ',')
            && word.chars().any(|c| c.is_numeric())
        {
            return "CD".to_string();
        }

        if word.chars().next().is_some_and(|c| c.is_uppercase()) {
            return "NNP".to_string();
        }

        for suffix in ADJECTIVE_SUFFIXES {
            if lower.ends_with(suffix) {
                return "JJ".to_string();
            }
        }
        if lower.ends_with("ly") {
            return "RB".to_string();
        }
        if lower.ends_with("ing") && lower.len() > 4 {
            return "VBG".to_string();
        }
        if lower.ends_with("ed") && lower.len() > 3 {
            return "VBD".to_string();
        }
        if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 3 {
            return "NNS".to_string();
        }

        "NN".to_string()
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, words: &[String]) -> Result<Vec<TaggedWord>> {
        Ok(words
            .iter()
            .map(|word| TaggedWord::new(word.clone(), self.tag_word(word)))
            .collect())
    }

    fn name(&self) -> &'static str {
        "rule"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_one(word: &str) -> String {
        let tagger = RuleTagger::new();
        let tagged = tagger.tag(&[word.to_string()]).unwrap();
        tagged[0].pos.clone()
    }

    #[test]
    fn test_lexicon_words() {
        assert_eq!(tag_one("the"), "DT");
        assert_eq!(tag_one("of"), "IN");
        assert_eq!(tag_one("and"), "CC");
        assert_eq!(tag_one("And"), "CC"); // case-insensitive lookup
    }

    #[test]
    fn test_punctuation_tags_as_itself() {
        assert_eq!(tag_one("."), ".");
        assert_eq!(tag_one(","), ",");
        assert_eq!(tag_one("!?"), "!?");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tag_one("42"), "CD");
        assert_eq!(tag_one("3.14"), "CD");
    }

    #[test]
    fn test_capitalized_proper_noun() {
        assert_eq!(tag_one("Rust"), "NNP");
        assert_eq!(tag_one("Cats"), "NNP");
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(tag_one("famous"), "JJ");
        assert_eq!(tag_one("quickly"), "RB");
        assert_eq!(tag_one("running"), "VBG");
        assert_eq!(tag_one("walked"), "VBD");
        assert_eq!(tag_one("cats"), "NNS");
        assert_eq!(tag_one("glass"), "NN");
    }

    #[test]
    fn test_default_noun() {
        assert_eq!(tag_one("cat"), "NN");
        assert_eq!(tag_one("extraction"), "NN");
    }

    #[test]
    fn test_order_preserved() {
        let tagger = RuleTagger::new();
        let words: Vec<String> = ["The", "quick", "fox"].iter().map(|s| s.to_string()).collect();
        let tagged = tagger.tag(&words).unwrap();

        let surface: Vec<&str> = tagged.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(surface, vec!["The", "quick", "fox"]);
    }
}
