//! Sentences command - show segmentation and difficulty scores.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use stylecheck_core::config::Config;
use stylecheck_core::readability::{self, HARD_SENTENCE_SCORE, VERY_HARD_SENTENCE_SCORE};
use stylecheck_core::{Range, Segmenter, Sentence, TextDocument};

use super::read_input_file;

/// Arguments for the `sentences` subcommand.
#[derive(Args, Debug)]
pub struct SentencesArgs {
    /// File to split into sentences.
    pub file: Utf8PathBuf,

    /// Only show sentences scoring at least this much.
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<u32>,

    /// Show a sentence left open at the end of the file.
    #[arg(long)]
    pub keep_trailing: bool,
}

#[derive(Debug, Serialize)]
struct SentenceReport {
    range: Range,
    score: u32,
    text: String,
}

impl SentenceReport {
    fn new(sentence: &Sentence<'_>) -> Self {
        Self {
            range: sentence.range(),
            score: readability::score(sentence),
            text: sentence.text(),
        }
    }
}

/// Print each sentence of a file with its range and score.
#[instrument(name = "cmd_sentences", skip_all, fields(file = %args.file))]
pub fn cmd_sentences(
    args: SentencesArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(min_score = ?args.min_score, "executing sentences command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let document = TextDocument::new(&content);
    let segmenter =
        Segmenter::new().keep_trailing(args.keep_trailing || config.keep_trailing_sentence);

    let reports: Vec<SentenceReport> = segmenter
        .segment(&document)
        .iter()
        .map(SentenceReport::new)
        .filter(|r| args.min_score.is_none_or(|min| r.score >= min))
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        let start = report.range.start;
        let end = report.range.end;
        let score = format!("{:>3}", report.score);
        let score = match report.score {
            s if s > VERY_HARD_SENTENCE_SCORE => score
                .if_supports_color(Stream::Stdout, |t| t.red())
                .to_string(),
            s if s > HARD_SENTENCE_SCORE => score
                .if_supports_color(Stream::Stdout, |t| t.yellow())
                .to_string(),
            _ => score,
        };
        println!(
            "{}:{}-{}:{} {score} {}",
            start.line + 1,
            start.character + 1,
            end.line + 1,
            end.character + 1,
            report.text
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylecheck_core::Position;

    #[test]
    fn report_joins_fragments() {
        let document = TextDocument::new("A first line\nand a second one.");
        let sentences = Segmenter::new().segment(&document);
        let report = SentenceReport::new(&sentences[0]);
        assert_eq!(report.text, "A first line and a second one.");
        assert_eq!(report.range.start, Position::new(0, 0));
        assert_eq!(report.range.end, Position::new(1, 17));
    }
}
