//! Frequency ranking of candidate phrases.
//!
//! [`rank`] counts exact string occurrences in a candidate list and sorts
//! the distinct phrases by count, descending. The sort is stable over
//! first-encountered order, so ties resolve deterministically for a given
//! input ordering.
//!
//! # Examples
//!
//! ```
//! use topica::rank::rank;
//!
//! let candidates: Vec<String> = ["ny", "ny", "sf"].iter().map(|s| s.to_string()).collect();
//! let ranked = rank(&candidates);
//!
//! assert_eq!(ranked[0].phrase, "ny");
//! assert_eq!(ranked[0].count, 2);
//! assert_eq!(ranked[1].phrase, "sf");
//! assert_eq!(ranked[1].count, 1);
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A phrase together with its occurrence count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPhrase {
    /// The candidate phrase, case-normalized upstream.
    pub phrase: String,

    /// Number of occurrences in the candidate list. Always positive.
    pub count: usize,
}

/// Count phrase occurrences and sort descending by count.
///
/// Distinct phrases are recorded in first-encountered order, and the stable
/// sort keeps that order among equal counts.
pub fn rank(candidates: &[String]) -> Vec<RankedPhrase> {
    let mut index: AHashMap<&str, usize> = AHashMap::with_capacity(candidates.len());
    let mut table: Vec<RankedPhrase> = Vec::new();

    for candidate in candidates {
        match index.get(candidate.as_str()) {
            Some(&slot) => table[slot].count += 1,
            None => {
                index.insert(candidate.as_str(), table.len());
                table.push(RankedPhrase {
                    phrase: candidate.clone(),
                    count: 1,
                });
            }
        }
    }

    // Stable: ties keep first-encountered order.
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_counts_descending() {
        let ranked = rank(&candidates(&["ny", "ny", "sf"]));

        assert_eq!(ranked.len(), 2);
        assert_eq!((ranked[0].phrase.as_str(), ranked[0].count), ("ny", 2));
        assert_eq!((ranked[1].phrase.as_str(), ranked[1].count), ("sf", 1));
    }

    #[test]
    fn test_tie_break_first_encountered() {
        let ranked = rank(&candidates(&["b", "a", "b", "a"]));

        assert_eq!(ranked.len(), 2);
        assert_eq!((ranked[0].phrase.as_str(), ranked[0].count), ("b", 2));
        assert_eq!((ranked[1].phrase.as_str(), ranked[1].count), ("a", 2));
    }

    #[test]
    fn test_empty_input() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn test_counts_are_positive() {
        let ranked = rank(&candidates(&["x", "y", "x", "z"]));
        assert!(ranked.iter().all(|r| r.count >= 1));
    }

    #[test]
    fn test_deterministic() {
        let input = candidates(&["c", "a", "b", "a", "c", "a"]);
        assert_eq!(rank(&input), rank(&input));
    }
}
