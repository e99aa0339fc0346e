use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::models::StyleRule;
use crate::splitter::SplitStrategy;

/// Tool configuration, loaded from a JSON file.
///
/// Every field has a default; a missing config file means "all defaults",
/// since most runs only need CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How chat lines are split into speaker and message
    pub split_strategy: SplitStrategy,
    /// Keep only chat-thread lines (the observed default); `false` keeps
    /// every timestamped line
    pub chat_only: bool,
    /// Always convert the HTML output to PDF as well
    pub convert_to_pdf: bool,
    /// Messages matching this prefix/suffix pair are excluded from output
    pub ignore_rule: Option<StyleRule>,
    /// Messages matching this pair are rendered italic, delimiters stripped
    pub italicize_rule: Option<StyleRule>,
    /// Speaker display colors, e.g. {"Alice": "#ff0000"}
    pub colors: HashMap<String, String>,
    /// Headless browser binary for PDF conversion; probed from PATH if unset
    pub pdf_browser: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            split_strategy: SplitStrategy::SecondSpace,
            chat_only: true,
            convert_to_pdf: false,
            ignore_rule: None,
            italicize_rule: None,
            colors: HashMap::new(),
            pdf_browser: None,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load("/nonexistent/mclogconv/config.json").unwrap();
        assert_eq!(config.split_strategy, SplitStrategy::SecondSpace);
        assert!(config.chat_only);
        assert!(!config.convert_to_pdf);
        assert!(config.colors.is_empty());
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r##"{
  "split_strategy": "first_space",
  "chat_only": false,
  "convert_to_pdf": true,
  "ignore_rule": { "start": "((", "end": "))" },
  "colors": { "Alice": "#ff0000" },
  "pdf_browser": "/usr/bin/chromium"
}"##,
        )
        .unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.split_strategy, SplitStrategy::FirstSpace);
        assert!(!config.chat_only);
        assert!(config.convert_to_pdf);
        assert_eq!(config.ignore_rule.unwrap().start, "((");
        assert!(config.italicize_rule.is_none());
        assert_eq!(config.colors["Alice"], "#ff0000");
        assert_eq!(config.pdf_browser.as_deref(), Some("/usr/bin/chromium"));
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "split_strategy": "first_space" }"#).unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.split_strategy, SplitStrategy::FirstSpace);
        assert!(config.chat_only);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(Config::load(path.to_str().unwrap()).is_err());
    }
}
