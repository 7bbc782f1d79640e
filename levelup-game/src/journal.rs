//! Bounded, append-only game journal.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::constants::JOURNAL_CAPACITY;

/// Outcome category of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable journal record handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLogEntry {
    pub id: u64,
    pub day: u32,
    pub text: String,
    pub severity: Severity,
}

/// Ordered journal with FIFO eviction once capacity is exceeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    entries: VecDeque<GameLogEntry>,
    next_id: u64,
}

impl Journal {
    /// Append an entry, evicting the oldest once over capacity. Returns the
    /// appended entry for callers that surface it immediately.
    pub fn push(&mut self, day: u32, text: impl Into<String>, severity: Severity) -> GameLogEntry {
        let entry = GameLogEntry {
            id: self.next_id,
            day,
            text: text.into(),
            severity,
        };
        self.next_id += 1;
        self.entries.push_back(entry.clone());
        while self.entries.len() > JOURNAL_CAPACITY {
            self.entries.pop_front();
        }
        entry
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameLogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&GameLogEntry> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
