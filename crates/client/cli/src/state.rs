//! Application state shared between input handling and rendering.
use std::collections::VecDeque;

use wardrobe_core::Tick;

use crate::presentation::viewport::Viewport;

/// Severity used to color message log entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntry {
    pub frame: Tick,
    pub level: MessageLevel,
    pub text: String,
}

/// Bounded log of recent interactions, newest last.
#[derive(Clone, Debug)]
pub struct MessageLog {
    capacity: usize,
    entries: VecDeque<MessageEntry>,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    pub fn push(&mut self, frame: Tick, level: MessageLevel, text: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(MessageEntry {
            frame,
            level,
            text: text.into(),
        });
    }

    pub fn info(&mut self, frame: Tick, text: impl Into<String>) {
        self.push(frame, MessageLevel::Info, text);
    }

    pub fn warn(&mut self, frame: Tick, text: impl Into<String>) {
        self.push(frame, MessageLevel::Warning, text);
    }

    /// The `count` most recent entries, newest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(count)
    }
}

/// UI-side state that the engine knows nothing about.
pub struct AppState {
    pub messages: MessageLog,
    /// Mapping between terminal cells and world units, refreshed on every
    /// draw. `None` until the first frame is rendered.
    pub viewport: Option<Viewport>,
}

impl AppState {
    pub fn new(message_capacity: usize) -> Self {
        Self {
            messages: MessageLog::new(message_capacity),
            viewport: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_drops_oldest_entries_past_capacity() {
        let mut log = MessageLog::new(2);
        log.info(Tick(1), "first");
        log.info(Tick(2), "second");
        log.warn(Tick(3), "third");
        let texts: Vec<&str> = log.recent(5).map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, vec!["third", "second"]);
    }
}
