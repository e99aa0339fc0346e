use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use log::{debug, info, warn};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

use crate::store::LogStore;

/// Cheap pre-check before the full chat pattern is applied.
const CHAT_MARKER: &str = "Async Chat Thread";

static FILENAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})-\d+\.log$").unwrap());
static LINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\d{2}:\d{2}:\d{2})\] (.*)$").unwrap());
static CHAT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[Async Chat Thread - #\d+/INFO\]: (.+)").unwrap());

/// Derive the calendar date a log file covers from its filename.
///
/// Server logs are named `YYYY-MM-DD-<index>.log`; anything else is not a
/// dated log file and the caller skips it entirely.
pub fn date_from_filename(path: &Path) -> Option<NaiveDate> {
    let name = path.file_name()?.to_str()?;
    let caps = FILENAME_PATTERN.captures(name)?;
    NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok()
}

/// Parse one log line into its wall-clock time and message body.
///
/// Lines that do not carry the `[HH:MM:SS] ` framing are not log records
/// and yield `None`. The body is returned exactly as written, internal
/// whitespace included.
pub fn parse_line(line: &str) -> Option<(NaiveTime, &str)> {
    let line = line.trim();
    let caps = LINE_PATTERN.captures(line)?;
    let time = NaiveTime::parse_from_str(caps.get(1)?.as_str(), "%H:%M:%S").ok()?;
    Some((time, caps.get(2)?.as_str()))
}

/// Recover the literal chat text from a log message body.
///
/// The body must both contain the chat-thread marker and match the full
/// chat pattern; the marker check is kept as an independent condition.
pub fn extract_chat_text(body: &str) -> Option<&str> {
    if !body.contains(CHAT_MARKER) {
        return None;
    }
    Some(CHAT_PATTERN.captures(body)?.get(1)?.as_str())
}

/// Collect dated `.log` files under a directory, sorted by path so that
/// ingestion order is deterministic.
pub fn discover_log_files(log_dir: &str) -> Result<Vec<PathBuf>> {
    let expanded_path = shellexpand::tilde(log_dir);
    let log_dir = PathBuf::from(expanded_path.as_ref());

    if !log_dir.exists() {
        warn!("Log directory does not exist: {}", log_dir.display());
        return Ok(Vec::new());
    }

    let mut log_files = Vec::new();

    for entry in WalkDir::new(&log_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("log") {
            log_files.push(path.to_path_buf());
        }
    }

    log_files.sort();

    info!("Found {} log files in {}", log_files.len(), log_dir.display());

    Ok(log_files)
}

/// Ingest all files into a date-keyed store, in file-list order.
///
/// Files whose names carry no date are skipped; unreadable files are
/// reported and skipped; non-matching lines are dropped. With `chat_only`
/// set, only chat-thread lines survive, stripped down to their literal
/// chat text.
pub fn ingest_files(paths: &[PathBuf], chat_only: bool) -> LogStore {
    let mut store = LogStore::new();

    for path in paths {
        let Some(date) = date_from_filename(path) else {
            debug!("Skipping file without a dated name: {}", path.display());
            continue;
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read log file {}: {}", path.display(), e);
                continue;
            }
        };

        for line in content.lines() {
            let Some((time, body)) = parse_line(line) else {
                continue;
            };

            if chat_only {
                if let Some(chat_text) = extract_chat_text(body) {
                    store.add(date, time, chat_text.to_string());
                }
            } else {
                store.add(date, time, body.to_string());
            }
        }
    }

    info!("Ingested {} records from {} files", store.len(), paths.len());

    store
}
