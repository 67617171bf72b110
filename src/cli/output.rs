//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TopicaArgs};
use crate::error::Result;
use crate::rank::RankedPhrase;

/// Result structure for an extraction run.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractionResults {
    /// Source URL, when the document came from the fetcher.
    pub url: Option<String>,
    /// Total candidate occurrences before counting.
    pub total_candidates: usize,
    /// Number of distinct ranked phrases.
    pub distinct_phrases: usize,
    /// Extraction wall-clock time.
    pub duration_ms: u64,
    /// Ranked phrases, counts descending.
    pub phrases: Vec<RankedPhrase>,
}

/// Print extraction results in the requested format.
pub fn output_results(results: &ExtractionResults, args: &TopicaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(results)?
            } else {
                serde_json::to_string(results)?
            };
            println!("{json}");
        }
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                if let Some(url) = &results.url {
                    println!("Source: {url}");
                }
                println!(
                    "{} distinct phrases from {} candidates ({} ms)",
                    results.distinct_phrases, results.total_candidates, results.duration_ms
                );
            }
            for ranked in &results.phrases {
                println!("{:>6}  {}", ranked.count, ranked.phrase);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_serialize() {
        let results = ExtractionResults {
            url: None,
            total_candidates: 3,
            distinct_phrases: 2,
            duration_ms: 1,
            phrases: vec![
                RankedPhrase {
                    phrase: "ny".to_string(),
                    count: 2,
                },
                RankedPhrase {
                    phrase: "sf".to_string(),
                    count: 1,
                },
            ],
        };

        let json = serde_json::to_string(&results).unwrap();
        assert!(json.contains("\"distinct_phrases\":2"));
        assert!(json.contains("\"phrase\":\"ny\""));
    }
}
