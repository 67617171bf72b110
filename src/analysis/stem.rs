//! Word stemming.
//!
//! The extractor configuration carries a stemmer so callers can normalize
//! word variants in downstream processing. The current pipeline does not
//! apply stemming to its output (matching the behavior of frequency-ranking
//! raw phrases); the seam exists so a variant-collapsing ranker can reuse
//! the configured stemmer.
//!
//! # Examples
//!
//! ```
//! use topica::analysis::stem::{SnowballStemmer, Stemmer};
//!
//! let stemmer = SnowballStemmer::english();
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("extraction"), "extract");
//! ```

use rust_stemmers::{Algorithm, Stemmer as SnowballInner};

/// Trait for word stemmers.
pub trait Stemmer: Send + Sync {
    /// Reduce a word to its stem.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Snowball stemmer backed by the `rust-stemmers` crate.
pub struct SnowballStemmer {
    inner: SnowballInner,
}

impl SnowballStemmer {
    /// Create an English Snowball stemmer.
    pub fn english() -> Self {
        SnowballStemmer {
            inner: SnowballInner::create(Algorithm::English),
        }
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }

    fn name(&self) -> &'static str {
        "snowball_english"
    }
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer").finish()
    }
}

/// A stemmer that returns words unchanged.
#[derive(Clone, Debug, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    /// Create a new identity stemmer.
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}
