//! Tag-sequence segmentation.
//!
//! [`segment`] reconstructs phrase strings from one sentence's IOB-annotated
//! tokens. The algorithm first applies a stable partition that moves every
//! `O` token behind the chunk tokens (relative order preserved on both
//! sides), then scans for `B` boundaries and stops at the first `O`.
//!
//! The partition step means chunk tokens are concatenated even when `O`
//! tokens separated them in the sentence. That grouping behavior is part of
//! this function's contract and is preserved deliberately; callers that want
//! strictly contiguous spans should arrange for the grammar to produce them.
//!
//! # Examples
//!
//! ```
//! use topica::analysis::segmenter::segment;
//! use topica::analysis::token::IobToken;
//!
//! let tokens = vec![
//!     IobToken::new("big", "JJ", "B-NP"),
//!     IobToken::new("cat", "NN", "I-NP"),
//!     IobToken::new("dog", "NN", "B-NP"),
//!     IobToken::new("ran", "VBD", "O"),
//! ];
//!
//! assert_eq!(segment(&tokens), vec!["big cat", "dog"]);
//! ```

use crate::analysis::token::IobToken;

/// Group a sentence's IOB-tagged tokens into phrase strings, one per chunk
/// span, words joined with single spaces in original order.
///
/// A single-token input yields that token's word regardless of its chunk
/// tag (the scan never starts). An input consisting entirely of `O` tokens
/// yields the first token's word: after the partition the scan stops at
/// index 1, and the `[0, 1)` pseudo-span is emitted as-is. An empty input
/// yields an empty vector.
pub fn segment(tokens: &[IobToken]) -> Vec<String> {
    if tokens.is_empty() {
        return Vec::new();
    }

    // Stable partition keyed on "is outside": chunk tokens first, O tokens
    // last, relative order untouched within each group.
    let mut partitioned: Vec<&IobToken> = tokens.iter().collect();
    partitioned.sort_by_key(|t| t.is_outside());

    let mut phrases = Vec::new();
    let mut start = 0;
    let mut end = 1;
    while end < partitioned.len() {
        if partitioned[end].begins_chunk() {
            phrases.push(join_words(&partitioned[start..end]));
            start = end;
        } else if partitioned[end].is_outside() {
            break;
        }
        end += 1;
    }
    phrases.push(join_words(&partitioned[start..end]));
    phrases
}

fn join_words(tokens: &[&IobToken]) -> String {
    tokens
        .iter()
        .map(|t| t.word.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iob(triples: &[(&str, &str, &str)]) -> Vec<IobToken> {
        triples
            .iter()
            .map(|(w, p, c)| IobToken::new(*w, *p, *c))
            .collect()
    }

    #[test]
    fn test_two_chunks_boundary_split() {
        // Boundaries at [0,2) and [2,5): exactly two phrases, left to right.
        let tokens = iob(&[
            ("machine", "NN", "B-NP"),
            ("learning", "NN", "I-NP"),
            ("deep", "JJ", "B-NP"),
            ("neural", "JJ", "I-NP"),
            ("network", "NN", "I-NP"),
        ]);

        assert_eq!(segment(&tokens), vec!["machine learning", "deep neural network"]);
    }

    #[test]
    fn test_single_token_any_tag() {
        for chunk in ["B-NP", "I-NP", "O"] {
            let tokens = iob(&[("cat", "NN", chunk)]);
            assert_eq!(segment(&tokens), vec!["cat"]);
        }
    }

    #[test]
    fn test_outside_tokens_bound_final_span() {
        let tokens = iob(&[
            ("the", "DT", "O"),
            ("big", "JJ", "B-NP"),
            ("cat", "NN", "I-NP"),
            ("sat", "VBD", "O"),
        ]);

        // Partition moves both O tokens behind "big cat"; the scan stops at
        // the first of them.
        assert_eq!(segment(&tokens), vec!["big cat"]);
    }

    #[test]
    fn test_all_outside_emits_first_word() {
        let tokens = iob(&[("ran", "VBD", "O"), ("fast", "RB", "O")]);
        assert_eq!(segment(&tokens), vec!["ran"]);
    }

    #[test]
    fn test_discontiguous_chunks_are_regrouped() {
        // The partition step pulls chunk tokens together across an O gap.
        let tokens = iob(&[
            ("cat", "NN", "B-NP"),
            ("sat", "VBD", "O"),
            ("dog", "NN", "B-NP"),
        ]);

        assert_eq!(segment(&tokens), vec!["cat", "dog"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(segment(&[]).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let tokens = iob(&[
            ("a", "DT", "B-NP"),
            ("b", "NN", "I-NP"),
            ("c", "NN", "B-NP"),
            ("d", "VBD", "O"),
        ]);

        assert_eq!(segment(&tokens), segment(&tokens));
    }
}
