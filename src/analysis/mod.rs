//! Text analysis module for Topica.
//!
//! This module provides the building blocks of the extraction pipeline:
//! sentence/word segmentation, part-of-speech tagging, grammar-based
//! chunking, IOB tag-sequence segmentation, and candidate filtering.

pub mod chunker;
pub mod filter;
pub mod grammar;
pub mod segmenter;
pub mod stem;
pub mod tagger;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use chunker::{Chunker, RegexpChunker};
pub use filter::CandidateFilter;
pub use grammar::Grammar;
pub use segmenter::segment;
pub use stem::{IdentityStemmer, SnowballStemmer, Stemmer};
pub use tagger::{RuleTagger, Tagger};
pub use token::{IobToken, TaggedWord};
pub use tokenizer::SentenceTokenizer;
