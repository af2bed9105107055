//! HTTP/REST API layer for FlexiChat.
//!
//! Axum-based REST API at `/api/` with CORS support and request tracing.

pub mod chat;
pub mod router;
