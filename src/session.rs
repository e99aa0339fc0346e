use chrono::NaiveDateTime;
use log::info;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use crate::models::ChatMessage;
use crate::parser;
use crate::splitter::SplitStrategy;

/// Transport-layer prefix the server injects on unsigned chat messages.
const NOT_SECURE_PREFIX: &str = "[Not Secure] ";

/// One conversion session: the selected files plus everything derived
/// from them in a single parse pass.
///
/// Derived state (messages, speakers, time range, colors) is rebuilt from
/// scratch on every `process` call; re-selecting files discards it but
/// keeps the configured split strategy.
#[derive(Debug)]
pub struct ConvertSession {
    files: Vec<PathBuf>,
    strategy: SplitStrategy,
    chat_only: bool,
    messages: Vec<ChatMessage>,
    speakers: BTreeSet<String>,
    time_range: Option<(NaiveDateTime, NaiveDateTime)>,
    colors: HashMap<String, String>,
}

impl ConvertSession {
    pub fn new(strategy: SplitStrategy, chat_only: bool) -> Self {
        Self {
            files: Vec::new(),
            strategy,
            chat_only,
            messages: Vec::new(),
            speakers: BTreeSet::new(),
            time_range: None,
            colors: HashMap::new(),
        }
    }

    /// Replace the file selection, discarding all previously derived state.
    pub fn select_files(&mut self, files: Vec<PathBuf>) {
        self.files = files;
        self.reset();
    }

    fn reset(&mut self) {
        self.messages.clear();
        self.speakers.clear();
        self.time_range = None;
        self.colors.clear();
    }

    /// Run the full parse pass over the selected files.
    ///
    /// Dated files are read in selection order, chat lines extracted, the
    /// unsigned-chat prefix stripped, and each surviving line split into
    /// speaker and body. Lines the active strategy cannot split contribute
    /// nothing. With zero resulting messages the time range stays unset;
    /// callers must check before presenting a window.
    pub fn process(&mut self) {
        self.reset();

        let store = parser::ingest_files(&self.files, self.chat_only);

        for (date, time, text) in store.all_records() {
            let text = text.strip_prefix(NOT_SECURE_PREFIX).unwrap_or(text);

            let Some((speaker, body)) = self.strategy.split(text) else {
                continue;
            };

            let timestamp = date.and_time(time);
            self.time_range = match self.time_range {
                None => Some((timestamp, timestamp)),
                Some((first, last)) => Some((first.min(timestamp), last.max(timestamp))),
            };

            self.speakers.insert(speaker.to_string());
            self.messages.push(ChatMessage {
                timestamp,
                speaker: speaker.to_string(),
                text: body.to_string(),
            });
        }

        info!(
            "Parsed {} chat messages from {} speakers",
            self.messages.len(),
            self.speakers.len()
        );
    }

    /// Messages with `start <= timestamp <= end`, in parse order.
    ///
    /// Pure and repeatable: narrowing an already-filtered range yields a
    /// subset, and filtering with the full observed range returns every
    /// message unchanged in order.
    pub fn messages_between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<&ChatMessage> {
        self.messages
            .iter()
            .filter(|m| start <= m.timestamp && m.timestamp <= end)
            .collect()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Distinct speakers, lexicographically sorted.
    pub fn speakers(&self) -> &BTreeSet<String> {
        &self.speakers
    }

    /// Earliest and latest timestamp observed; `None` until a parse pass
    /// has produced at least one message.
    pub fn time_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.time_range
    }

    pub fn set_color(&mut self, speaker: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(speaker.into(), color.into());
    }

    pub fn colors(&self) -> &HashMap<String, String> {
        &self.colors
    }

    pub fn strategy(&self) -> SplitStrategy {
        self.strategy
    }
}
