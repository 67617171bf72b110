//! # Topica
//!
//! A topic phrase extraction library for Rust.
//!
//! Topica pulls candidate topic phrases out of a page's text and ranks them
//! by raw frequency. The pipeline tags words with parts of speech, matches a
//! chunk grammar over the tag sequence, reconstructs noun phrases from the
//! IOB annotation, filters out stop words and noise, and counts what's left.
//!
//! ## Features
//!
//! - Pure Rust extraction pipeline
//! - Pluggable tagger and chunker collaborators
//! - NLTK-style chunk grammar patterns
//! - Deterministic, stable frequency ranking
//! - Optional HTTP fetcher for live pages
//!
//! ## Example
//!
//! ```
//! use topica::document::PageText;
//! use topica::extractor::TopicExtractor;
//!
//! let page = PageText::new(
//!     vec!["Rust Language".to_string()],
//!     vec!["The Rust language is fast.".to_string()],
//! );
//!
//! let extractor = TopicExtractor::new(Default::default()).unwrap();
//! let ranked = extractor.rank_candidates(&page).unwrap();
//! assert!(!ranked.is_empty());
//! ```

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod rank;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
