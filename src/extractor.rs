//! Topic phrase extraction orchestration.
//!
//! [`TopicExtractor`] drives the whole pipeline over a [`PageText`]: per
//! text unit it strips and drops placeholder strings, splits sentences,
//! tokenizes words, tags, chunks against the configured grammar, segments
//! the IOB annotation into phrases, and filters the candidates. Title
//! candidates always precede content candidates, and sentence order is
//! preserved within each, so extraction is deterministic end to end.
//!
//! # Examples
//!
//! ```
//! use topica::document::PageText;
//! use topica::extractor::{ExtractorConfig, TopicExtractor};
//!
//! let extractor = TopicExtractor::new(ExtractorConfig::default()).unwrap();
//! let page = PageText::new(
//!     vec!["Topic Extraction".to_string()],
//!     vec!["The quick extraction of topics.".to_string()],
//! );
//!
//! let candidates = extractor.extract_candidates(&page).unwrap();
//! assert_eq!(candidates[0], "topic extraction");
//! ```

use std::sync::Arc;

use log::debug;

use crate::analysis::chunker::{Chunker, RegexpChunker};
use crate::analysis::filter::CandidateFilter;
use crate::analysis::grammar::Grammar;
use crate::analysis::segmenter::segment;
use crate::analysis::stem::{SnowballStemmer, Stemmer};
use crate::analysis::tagger::{RuleTagger, Tagger};
use crate::analysis::tokenizer::SentenceTokenizer;
use crate::document::PageText;
use crate::error::Result;
use crate::rank::{RankedPhrase, rank};

/// Explicit extractor configuration.
///
/// All override points are plain typed values validated when the pieces are
/// built: the grammar rejects malformed patterns at [`Grammar::parse`], the
/// filter holds concrete sets. Defaults are process-wide immutable
/// resources, injected here rather than read as ambient state.
#[derive(Clone)]
pub struct ExtractorConfig {
    /// Candidate filtering policy (stop words, punctuation, length).
    pub filter: CandidateFilter,

    /// The chunk grammar matched over each sentence's tag sequence.
    pub grammar: Grammar,

    /// Configured word stemmer. Not applied to extraction output; exposed
    /// for downstream variant collapsing.
    pub stemmer: Arc<dyn Stemmer>,
}

impl ExtractorConfig {
    /// Create the default configuration: English stop words, ASCII
    /// punctuation, the default noun-phrase grammar, and an English
    /// Snowball stemmer.
    pub fn new() -> Self {
        ExtractorConfig {
            filter: CandidateFilter::new(),
            grammar: Grammar::default(),
            stemmer: Arc::new(SnowballStemmer::english()),
        }
    }

    /// Replace the candidate filter.
    pub fn with_filter(mut self, filter: CandidateFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Replace the chunk grammar.
    pub fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Replace the stemmer.
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExtractorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorConfig")
            .field("filter", &self.filter)
            .field("grammar", &self.grammar.pattern())
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

/// Extracts candidate topic phrases from a page document.
///
/// The extractor is a pure, stateless transform per invocation: it reads
/// its input document, never mutates collaborator output, and keeps no
/// state between calls.
pub struct TopicExtractor {
    config: ExtractorConfig,
    tokenizer: SentenceTokenizer,
    tagger: Arc<dyn Tagger>,
    chunker: Arc<dyn Chunker>,
}

impl TopicExtractor {
    /// Create a new extractor with the given configuration and the built-in
    /// rule tagger and regexp chunker.
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        Ok(TopicExtractor {
            config,
            tokenizer: SentenceTokenizer::new(),
            tagger: Arc::new(RuleTagger::new()),
            chunker: Arc::new(RegexpChunker::new()),
        })
    }

    /// Swap in a different tagger collaborator.
    pub fn with_tagger(mut self, tagger: Arc<dyn Tagger>) -> Self {
        self.tagger = tagger;
        self
    }

    /// Swap in a different chunker collaborator.
    pub fn with_chunker(mut self, chunker: Arc<dyn Chunker>) -> Self {
        self.chunker = chunker;
        self
    }

    /// Get the extractor configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Get the configured stemmer.
    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.config.stemmer
    }

    /// Extract the ordered candidate list from a page: title candidates
    /// first, then content candidates, sentence order preserved.
    pub fn extract_candidates(&self, page: &PageText) -> Result<Vec<String>> {
        let mut candidates = Vec::new();
        self.process(&page.title, &mut candidates)?;
        let title_count = candidates.len();
        self.process(&page.content, &mut candidates)?;

        debug!(
            "extracted {} candidates ({} from title, {} from content)",
            candidates.len(),
            title_count,
            candidates.len() - title_count,
        );
        Ok(candidates)
    }

    /// Extract candidates and rank them by frequency, counts descending,
    /// ties in first-encountered order.
    pub fn rank_candidates(&self, page: &PageText) -> Result<Vec<RankedPhrase>> {
        let candidates = self.extract_candidates(page)?;
        Ok(rank(&candidates))
    }

    /// Run the per-unit pipeline over a list of text units, appending
    /// surviving lower-cased phrases to `out`.
    fn process(&self, units: &[String], out: &mut Vec<String>) -> Result<()> {
        for unit in units {
            let stripped = unit.trim();
            // Empty units and the "None" placeholder the fetcher may emit.
            if stripped.is_empty() || stripped == "None" {
                continue;
            }

            for sentence in self.tokenizer.sentences(stripped) {
                let words = self.tokenizer.words(sentence);
                if words.is_empty() {
                    continue;
                }

                let tagged = self.tagger.tag(&words)?;
                let iob = self.chunker.chunk(&tagged, &self.config.grammar)?;

                for phrase in segment(&iob) {
                    if self.config.filter.accept(&phrase) {
                        out.push(phrase.to_lowercase());
                    }
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for TopicExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TopicExtractor")
            .field("config", &self.config)
            .field("tokenizer", &self.tokenizer.name())
            .field("tagger", &self.tagger.name())
            .field("chunker", &self.chunker.name())
            .finish()
    }
}
