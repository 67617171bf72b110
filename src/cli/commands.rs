//! Command implementations for the Topica CLI.

use std::fs;
use std::time::{Duration, Instant};

use crate::analysis::grammar::Grammar;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::PageText;
use crate::error::Result;
use crate::extractor::{ExtractorConfig, TopicExtractor};
use crate::fetch::{HttpFetcher, PageFetcher};

/// Execute a CLI command.
pub fn execute_command(args: TopicaArgs) -> Result<()> {
    match &args.command {
        Command::Extract(extract_args) => extract_page(extract_args.clone(), &args),
        Command::Rank(rank_args) => rank_document(rank_args.clone(), &args),
    }
}

/// Fetch a page and rank its topic phrases.
fn extract_page(args: ExtractArgs, cli_args: &TopicaArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Fetching: {}", args.url);
    }

    let fetcher = HttpFetcher::new()?
        .with_timeout(Duration::from_secs(args.timeout))
        .with_links_only(!args.all_text);

    let runtime = tokio::runtime::Runtime::new()?;
    let page = runtime.block_on(fetcher.fetch(&args.url))?;

    rank_page(&page, args.grammar.as_deref(), args.limit, Some(&args.url), cli_args)
}

/// Rank topic phrases from a JSON document file.
fn rank_document(args: RankArgs, cli_args: &TopicaArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Reading document: {}", args.document_file.display());
    }

    let raw = fs::read_to_string(&args.document_file)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    let page = PageText::from_json(&value)?;

    rank_page(&page, args.grammar.as_deref(), args.limit, None, cli_args)
}

/// Shared extraction + ranking + output path.
fn rank_page(
    page: &PageText,
    grammar: Option<&str>,
    limit: usize,
    url: Option<&str>,
    cli_args: &TopicaArgs,
) -> Result<()> {
    let mut config = ExtractorConfig::default();
    if let Some(pattern) = grammar {
        config = config.with_grammar(Grammar::parse(pattern)?);
    }
    let extractor = TopicExtractor::new(config)?;

    let start = Instant::now();
    let candidates = extractor.extract_candidates(page)?;
    let mut phrases = crate::rank::rank(&candidates);
    let duration_ms = start.elapsed().as_millis() as u64;

    let distinct = phrases.len();
    if limit > 0 {
        phrases.truncate(limit);
    }

    output_results(
        &ExtractionResults {
            url: url.map(str::to_string),
            total_candidates: candidates.len(),
            distinct_phrases: distinct,
            duration_ms,
            phrases,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args(command: Command) -> TopicaArgs {
        TopicaArgs {
            verbose: 0,
            quiet: true,
            output_format: OutputFormat::Human,
            pretty: false,
            command,
        }
    }

    #[test]
    fn test_rank_document_missing_file() {
        let rank_args = RankArgs {
            document_file: "/nonexistent/page.json".into(),
            grammar: None,
            limit: 0,
        };
        let args = base_args(Command::Rank(rank_args.clone()));

        assert!(rank_document(rank_args, &args).is_err());
    }

    #[test]
    fn test_rank_page_with_custom_grammar() {
        let page = PageText::new(
            vec!["Topic Extraction".to_string()],
            vec!["The topic extraction pipeline.".to_string()],
        );
        let args = base_args(Command::Rank(RankArgs {
            document_file: "unused.json".into(),
            grammar: None,
            limit: 0,
        }));

        let result = rank_page(&page, Some("NP: {<NN.*>+}"), 1, None, &args);
        assert!(result.is_ok());
    }

    #[test]
    fn test_rank_page_rejects_bad_grammar() {
        let page = PageText::new(vec![], vec![]);
        let args = base_args(Command::Rank(RankArgs {
            document_file: "unused.json".into(),
            grammar: None,
            limit: 0,
        }));

        let result = rank_page(&page, Some("broken"), 0, None, &args);
        assert!(result.is_err());
    }
}
