//! Chunk grammar patterns.
//!
//! A [`Grammar`] is an NLTK-style chunk pattern such as
//! `NP: {(<JJ>* <NN.*>+ <IN>)? <JJ>* <NN.*>+}`: a chunk label, then a braced
//! body where each `<…>` holds a regular expression over part-of-speech tags
//! and tokens combine with `( ) ? * + |`. The pattern is validated and
//! compiled once at construction; a malformed pattern is a configuration
//! error, not something discovered mid-extraction.
//!
//! Matching works over an encoding of a sentence's tag sequence as
//! `<TAG><TAG>…`. A `.` inside a token matches any tag character but never
//! crosses a token boundary, so `<NN.*>` matches `NN`, `NNS`, or `NNP` but
//! not two adjacent tags.
//!
//! # Examples
//!
//! ```
//! use topica::analysis::grammar::Grammar;
//!
//! let grammar = Grammar::parse("NP: {<JJ>* <NN.*>+}").unwrap();
//! assert_eq!(grammar.label(), "NP");
//!
//! let tags = vec!["JJ".to_string(), "NN".to_string(), "VBD".to_string()];
//! let spans = grammar.find_spans(&tags);
//! assert_eq!(spans, vec![0..2]);
//! ```

use std::ops::Range;

use regex::Regex;

use crate::error::{Result, TopicaError};

/// The default noun-phrase grammar: optional adjectives plus noun(s) with an
/// optional trailing prepositional link, then optional adjectives plus
/// noun(s) again.
pub const DEFAULT_GRAMMAR: &str = "NP: {(<JJ>* <NN.*>+ <IN>)? <JJ>* <NN.*>+}";

/// A compiled chunk grammar.
#[derive(Clone, Debug)]
pub struct Grammar {
    label: String,
    pattern: String,
    regex: Regex,
}

impl Grammar {
    /// Parse and compile a chunk grammar pattern.
    ///
    /// # Errors
    ///
    /// Returns [`TopicaError::Grammar`] for a missing label, unbalanced
    /// braces or angle brackets, or characters outside the supported
    /// pattern syntax.
    pub fn parse(pattern: &str) -> Result<Self> {
        let (label, body) = pattern
            .split_once(':')
            .ok_or_else(|| TopicaError::grammar("pattern must be '<label>: {<body>}'"))?;

        let label = label.trim();
        if label.is_empty() {
            return Err(TopicaError::grammar("chunk label must not be empty"));
        }

        let body = body.trim();
        let inner = body
            .strip_prefix('{')
            .and_then(|b| b.strip_suffix('}'))
            .ok_or_else(|| TopicaError::grammar("pattern body must be wrapped in braces"))?;
        if inner.contains('{') || inner.contains('}') {
            return Err(TopicaError::grammar("pattern must contain exactly one braced body"));
        }

        let compiled = Self::compile_body(inner)?;
        let regex = Regex::new(&compiled)
            .map_err(|e| TopicaError::grammar(format!("invalid tag expression: {e}")))?;

        Ok(Grammar {
            label: label.to_string(),
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The chunk label, e.g. "NP".
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The original pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Find the token index ranges of all grammar matches over a tag
    /// sequence. Matches are leftmost and non-overlapping.
    pub fn find_spans(&self, tags: &[String]) -> Vec<Range<usize>> {
        let mut encoded = String::new();
        let mut starts = Vec::with_capacity(tags.len());
        for tag in tags {
            starts.push(encoded.len());
            encoded.push('<');
            // Angle brackets inside a tag would corrupt the encoding.
            for c in tag.chars() {
                encoded.push(if c == '<' || c == '>' { '_' } else { c });
            }
            encoded.push('>');
        }

        self.regex
            .find_iter(&encoded)
            .filter(|m| m.start() < m.end())
            .map(|m| {
                let first = starts.partition_point(|&s| s < m.start());
                let last = starts.partition_point(|&s| s < m.end());
                first..last
            })
            .collect()
    }

    /// Translate the braced body into a regular expression over the
    /// `<TAG><TAG>…` encoding.
    fn compile_body(body: &str) -> Result<String> {
        let mut out = String::new();
        let mut chars = body.chars();

        while let Some(c) = chars.next() {
            match c {
                c if c.is_whitespace() => {}
                '(' => out.push_str("(?:"),
                ')' | '?' | '*' | '+' | '|' => out.push(c),
                '<' => {
                    let mut inner = String::new();
                    let mut closed = false;
                    for t in chars.by_ref() {
                        match t {
                            '>' => {
                                closed = true;
                                break;
                            }
                            '<' => {
                                return Err(TopicaError::grammar(
                                    "nested angle bracket in tag expression",
                                ));
                            }
                            _ => inner.push(t),
                        }
                    }
                    if !closed {
                        return Err(TopicaError::grammar("unclosed angle bracket"));
                    }
                    if inner.is_empty() {
                        return Err(TopicaError::grammar("empty tag expression"));
                    }
                    // A '.' may match any tag character but not '>', so a
                    // wildcard cannot leak across token boundaries. The whole
                    // token is grouped so a trailing quantifier binds the
                    // full `<…>` unit rather than the closing bracket.
                    let inner = inner.replace('.', "[^>]");
                    out.push_str("(?:<(?:");
                    out.push_str(&inner);
                    out.push_str(")>)");
                }
                other => {
                    return Err(TopicaError::grammar(format!(
                        "unexpected character '{other}' in pattern"
                    )));
                }
            }
        }

        Ok(out)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::parse(DEFAULT_GRAMMAR).expect("default grammar pattern should compile")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_default_grammar() {
        let grammar = Grammar::default();
        assert_eq!(grammar.label(), "NP");
        assert_eq!(grammar.pattern(), DEFAULT_GRAMMAR);
    }

    #[test]
    fn test_simple_noun_phrase_span() {
        let grammar = Grammar::parse("NP: {<JJ>* <NN.*>+}").unwrap();

        // "the big cat sat" -> DT JJ NN VBD
        let spans = grammar.find_spans(&tags(&["DT", "JJ", "NN", "VBD"]));
        assert_eq!(spans, vec![1..3]);
    }

    #[test]
    fn test_wildcard_matches_tag_variants() {
        let grammar = Grammar::parse("NP: {<NN.*>+}").unwrap();

        let spans = grammar.find_spans(&tags(&["NN", "NNS", "NNP", "VBD", "NN"]));
        assert_eq!(spans, vec![0..3, 4..5]);
    }

    #[test]
    fn test_wildcard_does_not_cross_boundary() {
        let grammar = Grammar::parse("NP: {<NN.*>}").unwrap();

        // A single-token wildcard must never swallow two tags.
        let spans = grammar.find_spans(&tags(&["NN", "NN"]));
        assert_eq!(spans, vec![0..1, 1..2]);
    }

    #[test]
    fn test_prepositional_link() {
        let grammar = Grammar::default();

        // "department of justice" -> NN IN NN, one compound span
        let spans = grammar.find_spans(&tags(&["NN", "IN", "NN"]));
        assert_eq!(spans, vec![0..3]);
    }

    #[test]
    fn test_alternation_inside_token() {
        let grammar = Grammar::parse("NP: {<NN.*|CC>+}").unwrap();

        let spans = grammar.find_spans(&tags(&["NNP", "CC", "NNP"]));
        assert_eq!(spans, vec![0..3]);
    }

    #[test]
    fn test_quantifier_binds_whole_token() {
        // Optional tokens must be skippable entirely: a bare noun matches
        // the default grammar even with no adjective in sight.
        let spans = Grammar::default().find_spans(&tags(&["NN"]));
        assert_eq!(spans, vec![0..1]);

        // And a repeated token collects the whole run into one span.
        let grammar = Grammar::parse("NP: {<NN>+}").unwrap();
        let spans = grammar.find_spans(&tags(&["NN", "NN"]));
        assert_eq!(spans, vec![0..2]);
    }

    #[test]
    fn test_no_match() {
        let grammar = Grammar::parse("NP: {<NN>+}").unwrap();
        assert!(grammar.find_spans(&tags(&["VBD", "DT"])).is_empty());
    }

    #[test]
    fn test_malformed_patterns_rejected() {
        assert!(Grammar::parse("no braces here").is_err());
        assert!(Grammar::parse("NP: {<NN>").is_err());
        assert!(Grammar::parse("NP: {<NN}>").is_err());
        assert!(Grammar::parse(": {<NN>}").is_err());
        assert!(Grammar::parse("NP: {<NN> junk}").is_err());
        assert!(Grammar::parse("NP: {<>}").is_err());
    }
}
