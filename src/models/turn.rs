use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// One displayed exchange unit. Never edited after it is appended to a
/// transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub speaker: Speaker,
    pub segments: Vec<String>,
    pub received_at: DateTime<Local>,
}

impl Turn {
    pub fn new(speaker: Speaker, segments: Vec<String>) -> Self {
        Self {
            speaker,
            segments,
            received_at: Local::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.speaker == Speaker::User
    }
}
