//! Global configuration types.
//!
//! Deserialized from `config.toml` in the data directory. Every field has a
//! default so a missing or partial file still yields a usable config.

use serde::{Deserialize, Serialize};

/// Default bound on the short-term context buffer.
pub const DEFAULT_CONTEXT_SIZE: usize = 20;

/// Global configuration for the FlexiChat engine and API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Assistant display name; lower-cased it doubles as the teaching
    /// trigger word ("ali learn '<key>' means ...").
    pub assistant_name: String,

    /// Capacity of the short-term context buffer.
    pub context_size: usize,

    /// Address the REST API binds to.
    pub listen_addr: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            assistant_name: "Ali".to_string(),
            context_size: DEFAULT_CONTEXT_SIZE,
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

impl GlobalConfig {
    /// The lower-cased teaching trigger word.
    pub fn trigger(&self) -> String {
        self.assistant_name.to_lowercase()
    }
}
