//! Chat endpoint handlers.
//!
//! Every chat endpoint answers HTTP 200 with a `status` field; an empty
//! message is reported inside the envelope, not as an HTTP error. The
//! engine serializes one turn at a time behind the state mutex.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use flexichat_types::exchange::Exchange;

use crate::state::AppState;

/// Request body for `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Reply envelope for `POST /api/chat`.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub status: &'static str,
    pub reply: String,
}

/// GET /api/ route listing.
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "FlexiChat backend is running",
        "routes": [
            "/api/chat",
            "/api/chat/history",
            "/api/chat/clear",
        ],
    }))
}

/// POST /api/chat with one user message, answered by one engine turn.
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Json<ChatReply> {
    let message = body.message.trim();
    if message.is_empty() {
        return Json(ChatReply {
            status: "error",
            reply: "Empty message".to_string(),
        });
    }

    let mut engine = state.engine.lock().await;
    let reply = engine.get_response(message).await;
    Json(ChatReply {
        status: "success",
        reply,
    })
}

/// Reply envelope for `GET /api/chat/history`.
#[derive(Debug, Serialize)]
pub struct HistoryReply {
    pub status: &'static str,
    pub history: Vec<Exchange>,
}

/// GET /api/chat/history with the full durable conversation log.
pub async fn get_history(State(state): State<AppState>) -> Json<HistoryReply> {
    let engine = state.engine.lock().await;
    Json(HistoryReply {
        status: "success",
        history: engine.history().to_vec(),
    })
}

/// DELETE /api/chat/clear resets the memory record to a fresh state.
pub async fn clear_chat(State(state): State<AppState>) -> Json<Value> {
    let mut engine = state.engine.lock().await;
    engine.reset().await;
    Json(json!({
        "status": "success",
        "message": "Chat cleared",
    }))
}
