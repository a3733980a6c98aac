//! Transcript message types for the assistant widget.
//!
//! A transcript is an ordered, append-only sequence of messages. The only
//! permitted mutation is rewriting the text of a previously appended entry,
//! which the transcript exposes through an opaque handle (used for the
//! "Thinking…" placeholder pattern).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Who produced a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::User => write!(f, "user"),
            Origin::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Origin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Origin::User),
            "assistant" => Ok(Origin::Assistant),
            other => Err(format!("invalid message origin: '{other}'")),
        }
    }
}

/// A single entry in the assistant transcript.
///
/// Entries are ordered by `created_at` within a transcript and never
/// removed. `text` may be rewritten in place exactly once for placeholder
/// entries; `origin` and `created_at` are immutable after append.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub origin: Origin,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a message stamped with the current time.
    pub fn new(origin: Origin, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            origin,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_roundtrip() {
        for origin in [Origin::User, Origin::Assistant] {
            let s = origin.to_string();
            let parsed: Origin = s.parse().unwrap();
            assert_eq!(origin, parsed);
        }
    }

    #[test]
    fn test_origin_serde() {
        let json = serde_json::to_string(&Origin::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: Origin = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Origin::Assistant);
    }

    #[test]
    fn test_origin_parse_rejects_unknown() {
        assert!("system".parse::<Origin>().is_err());
    }

    #[test]
    fn test_message_serialize() {
        let message = Message::new(Origin::User, "hello");
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"origin\":\"user\""));
        assert!(json.contains("\"text\":\"hello\""));
    }
}
