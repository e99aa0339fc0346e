//! CLI argument parsing.
//!
//! Flags stand in for the original GUI's file picker, radio buttons,
//! checkboxes and datetime editors.

use clap::Parser;

use crate::splitter::SplitStrategy;

/// Convert Minecraft server chat logs into a styled HTML transcript
#[derive(Parser, Debug, Clone)]
#[command(name = "mclogconv")]
#[command(about = "Convert Minecraft server chat logs to HTML (and optionally PDF)", long_about = None)]
pub struct Args {
    /// Log files or directories to ingest (files named YYYY-MM-DD-<n>.log)
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Config file path
    #[arg(short, long, default_value = "./mclogconv.json")]
    pub config: String,

    /// Start of the time window, "YYYY-MM-DD HH:MM:SS" (default: earliest message)
    #[arg(long)]
    pub start: Option<String>,

    /// End of the time window, "YYYY-MM-DD HH:MM:SS" (default: latest message)
    #[arg(long)]
    pub end: Option<String>,

    /// Override the configured speaker split strategy
    #[arg(long, value_enum)]
    pub split: Option<SplitStrategy>,

    /// Keep every timestamped line instead of chat lines only
    #[arg(long)]
    pub all_lines: bool,

    /// Also convert the HTML output to PDF
    #[arg(long)]
    pub pdf: bool,

    /// Output HTML path (default: first input with a `_converted.html` suffix)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Assign a speaker color, e.g. --color "Alice=#ff0000" (repeatable)
    #[arg(long = "color", value_name = "SPEAKER=HEX")]
    pub colors: Vec<String>,

    /// Parse and print the summary without writing any output
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["mclogconv", "2024-03-01-1.log"]);
        assert_eq!(args.config, "./mclogconv.json");
        assert_eq!(args.inputs, vec!["2024-03-01-1.log"]);
        assert!(args.split.is_none());
        assert!(!args.all_lines);
        assert!(!args.pdf);
        assert!(!args.dry_run);
        assert!(args.colors.is_empty());
    }

    #[test]
    fn test_args_requires_inputs() {
        assert!(Args::try_parse_from(["mclogconv"]).is_err());
    }

    #[test]
    fn test_args_split_strategy_values() {
        let args = Args::parse_from(["mclogconv", "--split", "first-space", "a.log"]);
        assert_eq!(args.split, Some(SplitStrategy::FirstSpace));

        let args = Args::parse_from(["mclogconv", "--split", "second-space", "a.log"]);
        assert_eq!(args.split, Some(SplitStrategy::SecondSpace));
    }

    #[test]
    fn test_args_window_bounds() {
        let args = Args::parse_from([
            "mclogconv",
            "--start",
            "2024-03-01 09:00:00",
            "--end",
            "2024-03-01 18:00:00",
            "a.log",
        ]);
        assert_eq!(args.start.as_deref(), Some("2024-03-01 09:00:00"));
        assert_eq!(args.end.as_deref(), Some("2024-03-01 18:00:00"));
    }

    #[test]
    fn test_args_repeatable_colors() {
        let args = Args::parse_from([
            "mclogconv",
            "--color",
            "Alice=#ff0000",
            "--color",
            "Bob=#00ff00",
            "a.log",
        ]);
        assert_eq!(args.colors, vec!["Alice=#ff0000", "Bob=#00ff00"]);
    }

    #[test]
    fn test_args_combined_flags() {
        let args = Args::parse_from(["mclogconv", "--pdf", "--all-lines", "--dry-run", "a.log"]);
        assert!(args.pdf);
        assert!(args.all_lines);
        assert!(args.dry_run);
    }
}
