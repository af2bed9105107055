//! Conversation exchange types.
//!
//! An [`Exchange`] is one user input paired with the reply the engine
//! produced for it. Exchanges are appended to the durable conversation log
//! and to the bounded short-term context buffer.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp format used in the durable record, e.g. `2026-08-29 14:03:07`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One user/assistant exchange with its timestamp.
///
/// Field names match the durable record schema (`user`, `ai`, `time`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// The raw user input line.
    pub user: String,
    /// The reply the engine returned.
    pub ai: String,
    /// Local timestamp formatted with [`TIME_FORMAT`].
    pub time: String,
}

impl Exchange {
    /// Create an exchange stamped with the current local time.
    pub fn now(user: impl Into<String>, ai: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ai: ai.into(),
            time: Local::now().format(TIME_FORMAT).to_string(),
        }
    }

    /// Number of whitespace-separated words in the user input.
    ///
    /// The contextual-reference resolver uses this to skip trivial inputs
    /// when looking for the last meaningful exchange.
    pub fn user_word_count(&self) -> usize {
        self.user.split_whitespace().count()
    }
}
