//! Check command - report style diagnostics for one or more files.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use stylecheck_core::config::Config;
use stylecheck_core::{Analyzer, Diagnostic, Rule, Severity, TextDocument};

use super::read_input_file;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to check.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Only run this rule (repeatable). Overrides `checks` in config.
    #[arg(long = "rule", value_enum, value_name = "RULE")]
    pub rules: Vec<Rule>,

    /// Skip this rule (repeatable). Overrides `exclude` in config.
    #[arg(long, value_enum, value_name = "RULE")]
    pub exclude: Vec<Rule>,

    /// Report a sentence left open at the end of a file.
    #[arg(long)]
    pub keep_trailing: bool,

    /// Fail when any warning is reported.
    #[arg(long)]
    pub strict: bool,
}

impl CheckArgs {
    /// The configuration with command-line overrides applied.
    fn apply(&self, config: &Config) -> Config {
        let mut config = config.clone();
        if !self.rules.is_empty() {
            config.checks = Some(self.rules.clone());
        }
        if !self.exclude.is_empty() {
            config.exclude = Some(self.exclude.clone());
        }
        config.keep_trailing_sentence |= self.keep_trailing;
        config
    }
}

#[derive(Serialize)]
struct FileReport<'a> {
    file: &'a Utf8Path,
    diagnostics: Vec<Diagnostic>,
}

/// Check files and print their diagnostics.
#[instrument(name = "cmd_check", skip_all, fields(files = args.files.len()))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(rules = ?args.rules, exclude = ?args.exclude, strict = args.strict, "executing check command");

    let config = args.apply(config);
    let analyzer = Analyzer::from_config(&config).context("failed to prepare analyzer")?;

    let progress = progress_bar(args.files.len())?;
    let mut reports = Vec::with_capacity(args.files.len());
    for file in &args.files {
        progress.set_message(file.to_string());
        let content = read_input_file(file, max_input_bytes)?;
        let diagnostics = analyzer.analyze(&TextDocument::new(&content));
        debug!(%file, diagnostics = diagnostics.len(), "checked file");
        reports.push(FileReport {
            file: file.as_path(),
            diagnostics,
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    let total: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
    let warnings = reports
        .iter()
        .flat_map(|r| &r.diagnostics)
        .filter(|d| d.severity == Severity::Warning)
        .count();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            for diagnostic in &report.diagnostics {
                println!("{}", format_diagnostic(report.file, diagnostic));
            }
        }
        if total == 0 {
            println!(
                "{} no issues in {} file(s)",
                "PASS:".if_supports_color(Stream::Stdout, |t| t.green()),
                reports.len()
            );
        } else {
            println!(
                "{total} issue(s) in {} file(s), {warnings} warning(s)",
                reports.len()
            );
        }
    }

    if args.strict && warnings > 0 {
        bail!("{warnings} warning(s) reported");
    }
    Ok(())
}

/// `file:line:col: severity[rule]: message`, with 1-based line and column.
fn format_diagnostic(file: &Utf8Path, diagnostic: &Diagnostic) -> String {
    let start = diagnostic.range.start;
    let severity = match diagnostic.severity {
        Severity::Warning => diagnostic
            .severity
            .if_supports_color(Stream::Stdout, |t| t.yellow())
            .to_string(),
        Severity::Information => diagnostic
            .severity
            .if_supports_color(Stream::Stdout, |t| t.cyan())
            .to_string(),
    };
    format!(
        "{file}:{}:{}: {severity}[{}]: {}",
        start.line + 1,
        start.character + 1,
        diagnostic.rule,
        diagnostic.message
    )
}

fn progress_bar(files: usize) -> anyhow::Result<ProgressBar> {
    if files < 2 {
        return Ok(ProgressBar::hidden());
    }
    let bar = ProgressBar::new(files as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .context("invalid progress template")?
            .progress_chars("#>-"),
    );
    Ok(bar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylecheck_core::Range;

    #[test]
    fn diagnostics_are_one_based() {
        owo_colors::set_override(false);
        let diagnostic = Diagnostic::information(
            Range::on_line(0, 8, 19),
            "Complex. Omit or replace with 'many' or 'some'.",
            Rule::ComplexWord,
        );
        assert_eq!(
            format_diagnostic(Utf8Path::new("doc.md"), &diagnostic),
            "doc.md:1:9: information[complex-word]: Complex. Omit or replace with 'many' or 'some'."
        );
    }

    #[test]
    fn command_line_overrides_config() {
        let config = Config {
            checks: Some(vec![Rule::Adverb]),
            ..Config::default()
        };
        let args = CheckArgs {
            files: vec![Utf8PathBuf::from("doc.md")],
            rules: vec![Rule::Qualifier],
            exclude: Vec::new(),
            keep_trailing: true,
            strict: false,
        };
        let applied = args.apply(&config);
        assert_eq!(applied.checks, Some(vec![Rule::Qualifier]));
        assert!(applied.exclude.is_none());
        assert!(applied.keep_trailing_sentence);
    }

    #[test]
    fn single_file_has_no_progress_bar() {
        assert!(progress_bar(1).unwrap().is_hidden());
    }
}
