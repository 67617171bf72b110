//! Grammar-based chunking.
//!
//! A chunker turns a tagged sentence into IOB-annotated tokens: every token
//! inside a grammar match gets `B-<label>` (first token) or `I-<label>`
//! (continuation), everything else gets `O`. Like tagging, chunking is a
//! collaborator seam behind the [`Chunker`] trait.
//!
//! # Examples
//!
//! ```
//! use topica::analysis::chunker::{Chunker, RegexpChunker};
//! use topica::analysis::grammar::Grammar;
//! use topica::analysis::token::TaggedWord;
//!
//! let grammar = Grammar::parse("NP: {<JJ>* <NN.*>+}").unwrap();
//! let chunker = RegexpChunker::new();
//! let tagged = vec![
//!     TaggedWord::new("big", "JJ"),
//!     TaggedWord::new("cat", "NN"),
//!     TaggedWord::new("ran", "VBD"),
//! ];
//!
//! let iob = chunker.chunk(&tagged, &grammar).unwrap();
//! assert_eq!(iob[0].chunk, "B-NP");
//! assert_eq!(iob[1].chunk, "I-NP");
//! assert_eq!(iob[2].chunk, "O");
//! ```

use crate::analysis::grammar::Grammar;
use crate::analysis::token::{IobToken, TaggedWord};
use crate::error::Result;

/// Trait for chunkers that annotate tagged tokens with IOB chunk tags.
pub trait Chunker: Send + Sync {
    /// Annotate a tagged sentence against a chunk grammar, preserving order.
    fn chunk(&self, tagged: &[TaggedWord], grammar: &Grammar) -> Result<Vec<IobToken>>;

    /// Get the name of this chunker (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A chunker that matches the grammar's compiled pattern over the sentence's
/// tag sequence, the way NLTK's RegexpParser does.
#[derive(Clone, Debug, Default)]
pub struct RegexpChunker;

impl RegexpChunker {
    /// Create a new regexp chunker.
    pub fn new() -> Self {
        RegexpChunker
    }
}

impl Chunker for RegexpChunker {
    fn chunk(&self, tagged: &[TaggedWord], grammar: &Grammar) -> Result<Vec<IobToken>> {
        let tags: Vec<String> = tagged.iter().map(|t| t.pos.clone()).collect();

        let mut chunk_tags = vec!["O".to_string(); tagged.len()];
        for span in grammar.find_spans(&tags) {
            for (offset, index) in span.enumerate() {
                chunk_tags[index] = if offset == 0 {
                    format!("B-{}", grammar.label())
                } else {
                    format!("I-{}", grammar.label())
                };
            }
        }

        Ok(tagged
            .iter()
            .zip(chunk_tags)
            .map(|(t, chunk)| IobToken::new(t.word.clone(), t.pos.clone(), chunk))
            .collect())
    }

    fn name(&self) -> &'static str {
        "regexp"
    }
}
