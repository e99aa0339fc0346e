use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Strategy for splitting a chat line into speaker and message body.
///
/// `SecondSpace` handles servers whose chat format puts a spaced prefix
/// before the name (e.g. `[Guild] Alice hi`); `FirstSpace` handles plain
/// `Alice hi` formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SplitStrategy {
    #[default]
    SecondSpace,
    FirstSpace,
}

impl SplitStrategy {
    /// Split `text` into (speaker, message body).
    ///
    /// Returns `None` when the required delimiter is absent: a single-word
    /// message yields no record under either strategy, and `SecondSpace`
    /// additionally drops two-word messages with no second space. Absence
    /// is modeled explicitly rather than as an empty message body.
    pub fn split<'a>(&self, text: &'a str) -> Option<(&'a str, &'a str)> {
        match self {
            SplitStrategy::SecondSpace => {
                let first = text.find(' ')?;
                let second = text[first + 1..].find(' ').map(|i| first + 1 + i)?;
                Some((&text[..second], &text[second + 1..]))
            }
            SplitStrategy::FirstSpace => text.split_once(' '),
        }
    }
}
