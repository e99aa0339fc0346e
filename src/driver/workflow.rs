//! Workflow orchestration.
//!
//! Drives the whole conversion: expand inputs, parse, report, filter,
//! render HTML, optionally convert to PDF.

use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use log::info;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::models::DEFAULT_COLOR;
use crate::parser;
use crate::render::{self, RenderRules};
use crate::session::ConvertSession;

use super::cli::Args;

/// Parse one `--color SPEAKER=HEX` assignment.
pub fn parse_color_assignment(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((speaker, color)) if !speaker.is_empty() && !color.is_empty() => {
            Ok((speaker.to_string(), color.to_string()))
        }
        _ => bail!("Invalid color assignment '{}', expected SPEAKER=HEX", raw),
    }
}

/// Parse a `--start`/`--end` bound.
pub fn parse_window_bound(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .with_context(|| format!("Invalid datetime '{}', expected YYYY-MM-DD HH:MM:SS", raw))
}

/// Derive an output path from the first input file: same directory and
/// stem, with `_converted` and the given extension appended.
pub fn derive_output_path(first_input: &Path, extension: &str) -> PathBuf {
    let stem = first_input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("logs");
    first_input.with_file_name(format!("{}_converted.{}", stem, extension))
}

/// Conversion workflow over a loaded configuration.
pub struct ConvertWorkflow {
    config: Config,
}

impl ConvertWorkflow {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Expand CLI inputs into a flat file list; directory inputs are
    /// walked for `.log` files, file inputs are taken as given.
    fn collect_input_files(&self, inputs: &[String]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for input in inputs {
            let expanded = shellexpand::tilde(input);
            let path = PathBuf::from(expanded.as_ref());

            if path.is_dir() {
                files.extend(parser::discover_log_files(input)?);
            } else {
                files.push(path);
            }
        }

        Ok(files)
    }

    /// Execute the conversion workflow.
    pub fn run(&self, args: Args) -> Result<()> {
        info!("Starting log conversion...");

        let files = self.collect_input_files(&args.inputs)?;
        println!("✓ Selected {} input files", files.len());

        if files.is_empty() {
            println!("No log files to process. Exiting.");
            return Ok(());
        }

        let strategy = args.split.unwrap_or(self.config.split_strategy);
        let chat_only = self.config.chat_only && !args.all_lines;

        let mut session = ConvertSession::new(strategy, chat_only);
        session.select_files(files.clone());
        session.process();

        println!("✓ Parsed {} chat messages", session.messages().len());

        // Zero messages means no observable time range; nothing to render.
        let Some((first, last)) = session.time_range() else {
            println!("No chat messages found in the selected files. Exiting.");
            return Ok(());
        };

        println!("✓ Time range: {} .. {}", first, last);

        for (speaker, color) in &self.config.colors {
            session.set_color(speaker.clone(), color.clone());
        }
        for raw in &args.colors {
            let (speaker, color) = parse_color_assignment(raw)?;
            session.set_color(speaker, color);
        }

        println!("✓ Speakers:");
        for speaker in session.speakers() {
            let color = session
                .colors()
                .get(speaker)
                .map(String::as_str)
                .unwrap_or(DEFAULT_COLOR);
            println!("    {} ({})", speaker, color);
        }

        let start = match &args.start {
            Some(raw) => parse_window_bound(raw)?,
            None => first,
        };
        let end = match &args.end {
            Some(raw) => parse_window_bound(raw)?,
            None => last,
        };
        if start > end {
            bail!("Window start {} is after end {}", start, end);
        }

        let filtered = session.messages_between(start, end);
        println!("✓ {} messages within {} .. {}", filtered.len(), start, end);

        let rules = RenderRules {
            ignore: self.config.ignore_rule.clone(),
            italicize: self.config.italicize_rule.clone(),
        };
        let html = render::render_document(&filtered, session.colors(), &rules);

        let html_path = match &args.output {
            Some(output) => PathBuf::from(shellexpand::tilde(output).as_ref()),
            None => derive_output_path(&files[0], "html"),
        };

        if args.dry_run {
            println!("✓ Dry-run mode (not writing output)");
            println!("  Would write HTML: {}", html_path.display());
            if args.pdf || self.config.convert_to_pdf {
                let pdf_path = html_path.with_extension("pdf");
                println!("  Would write PDF: {}", pdf_path.display());
            }
            return Ok(());
        }

        std::fs::write(&html_path, &html)
            .with_context(|| format!("Failed to write HTML file: {}", html_path.display()))?;
        println!("✓ Wrote HTML: {}", html_path.display());

        if args.pdf || self.config.convert_to_pdf {
            let pdf_path = html_path.with_extension("pdf");
            render::pdf::convert(&html_path, &pdf_path, self.config.pdf_browser.as_deref())?;
            println!("✓ Wrote PDF: {}", pdf_path.display());
        }

        println!("✓ Conversion complete!");

        Ok(())
    }
}
