//! Infrastructure implementations for FlexiChat.
//!
//! Implements the ports defined in `flexichat-core`: the JSON-file durable
//! record store, the global config loader, and the similarity-index
//! capability (lexical by default, embedding-backed behind the
//! `embeddings` feature).

pub mod config;
pub mod record;
pub mod similarity;

use std::path::PathBuf;

/// Resolve the data directory.
///
/// `FLEXICHAT_DATA_DIR` wins when set; otherwise `~/.flexichat`, falling
/// back to a relative `.flexichat` when no home directory is available.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FLEXICHAT_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".flexichat"))
        .unwrap_or_else(|| PathBuf::from(".flexichat"))
}
