//! Token types for the extraction pipeline.
//!
//! Two token shapes flow through the pipeline:
//!
//! - [`TaggedWord`] - a word plus its part-of-speech tag, produced by a
//!   [`Tagger`](crate::analysis::tagger::Tagger)
//! - [`IobToken`] - a word, its part-of-speech tag, and its IOB chunk tag,
//!   produced by a [`Chunker`](crate::analysis::chunker::Chunker)
//!
//! The IOB chunk tag is `"B-<label>"` for the first token of a chunk,
//! `"I-<label>"` for tokens continuing a chunk, and `"O"` for tokens outside
//! any chunk.
//!
//! # Examples
//!
//! ```
//! use topica::analysis::token::IobToken;
//!
//! let token = IobToken::new("cat", "NN", "B-NP");
//! assert!(token.begins_chunk());
//! assert!(!token.is_outside());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A word paired with its part-of-speech tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedWord {
    /// The surface form of the word.
    pub word: String,

    /// The part-of-speech tag (Penn Treebank style, e.g. "NN", "JJ").
    pub pos: String,
}

impl TaggedWord {
    /// Create a new tagged word.
    pub fn new<W: Into<String>, P: Into<String>>(word: W, pos: P) -> Self {
        TaggedWord {
            word: word.into(),
            pos: pos.into(),
        }
    }
}

impl fmt::Display for TaggedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.word, self.pos)
    }
}

/// A word with part-of-speech and IOB chunk annotation.
///
/// Immutable once produced by the chunker; the segmenter reads these but
/// never mutates them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IobToken {
    /// The surface form of the word.
    pub word: String,

    /// The part-of-speech tag.
    pub pos: String,

    /// The IOB chunk tag: "B-…", "I-…", or "O".
    pub chunk: String,
}

impl IobToken {
    /// Create a new IOB-annotated token.
    pub fn new<W, P, C>(word: W, pos: P, chunk: C) -> Self
    where
        W: Into<String>,
        P: Into<String>,
        C: Into<String>,
    {
        IobToken {
            word: word.into(),
            pos: pos.into(),
            chunk: chunk.into(),
        }
    }

    /// Whether this token sits outside every chunk.
    pub fn is_outside(&self) -> bool {
        self.chunk == "O"
    }

    /// Whether this token opens a new chunk.
    pub fn begins_chunk(&self) -> bool {
        self.chunk.starts_with('B')
    }
}

impl fmt::Display for IobToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.word, self.pos, self.chunk)
    }
}
