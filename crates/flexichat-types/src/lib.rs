//! Shared domain types for FlexiChat.
//!
//! This crate contains the core domain types used across the FlexiChat
//! engine: the durable memory record, conversation exchanges, configuration,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, chrono,
//! thiserror.

pub mod config;
pub mod error;
pub mod exchange;
pub mod record;
