use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

impl StatusLevel {
    fn ttl(self) -> Duration {
        match self {
            StatusLevel::Info => Duration::from_secs(2),
            StatusLevel::Warning => Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub shown_at: Instant,
}

impl StatusMessage {
    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) > self.level.ttl()
    }
}

/// One-line transient notices ("Sound off", save failures) under the panel.
/// Only the latest message is kept.
#[derive(Debug, Default)]
pub struct StatusBar {
    message: Option<StatusMessage>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, level: StatusLevel, now: Instant) {
        self.message = Some(StatusMessage {
            text: text.into(),
            level,
            shown_at: now,
        });
    }

    /// The message, unless it has expired by `now`.
    pub fn current(&self, now: Instant) -> Option<&StatusMessage> {
        self.message.as_ref().filter(|m| !m.is_expired(now))
    }
}
