//! Contextual reference resolver.
//!
//! Two question families:
//!
//! - Temporal cues ("yesterday", "earlier", "you told me", ...) answer from
//!   the short-term context buffer, most recent first, skipping inputs of
//!   two words or fewer.
//! - "what did i tell you about <topic>" scans the full conversation log
//!   for a case-insensitive substring match; when that finds nothing, the
//!   optional similarity index gets a best-effort shot before the resolver
//!   invites the user to state it now.

use std::sync::LazyLock;

use regex::Regex;

use flexichat_types::exchange::Exchange;
use flexichat_types::record::MemoryRecord;

use crate::context::ContextBuffer;
use crate::similarity::SimilarityIndex;

const TEMPORAL_CUES: &[&str] = &["yesterday", "earlier", "before", "last time", "you told me"];

static TOLD_YOU_ABOUT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)what did i tell you about\s+(.+?)\??$").unwrap());

/// Resolve references to earlier parts of the conversation.
pub fn resolve_contextual(
    record: &MemoryRecord,
    context: &ContextBuffer,
    similarity: Option<&dyn SimilarityIndex>,
    text: &str,
) -> Option<String> {
    let lower = text.to_lowercase();

    if TEMPORAL_CUES.iter().any(|cue| lower.contains(cue)) {
        // skip the "what did i tell you about" form, handled below with a
        // real topic search ("before" etc. could otherwise shadow it)
        if !TOLD_YOU_ABOUT_RE.is_match(text) {
            for entry in context.iter_recent() {
                if entry.user_word_count() > 2 {
                    return Some(format!(
                        "You mentioned earlier: \"{}\". Would you like to continue that topic?",
                        entry.user
                    ));
                }
            }
            return Some(
                "I remember bits of our last chats. What would you like to continue?".to_string(),
            );
        }
    }

    let caps = TOLD_YOU_ABOUT_RE.captures(text)?;
    let topic = caps.get(1)?.as_str().trim().to_lowercase();

    if let Some(found) = search_log(&record.conversations, &topic) {
        return Some(format!(
            "You told me: \"{}\" and I replied: \"{}\" on {}",
            found.user, found.ai, found.time
        ));
    }

    if let Some(index) = similarity {
        if let Some(hit) = index.find_similar(&topic, 3).into_iter().next() {
            return Some(format!(
                "I found something related: \"{hit}\". Does that match what you meant?"
            ));
        }
    }

    Some("I don't see that in my recent chats. Want to tell me about it now?".to_string())
}

/// Most recent log entry whose input contains the topic, case-insensitive.
fn search_log<'a>(log: &'a [Exchange], topic: &str) -> Option<&'a Exchange> {
    log.iter()
        .rev()
        .find(|entry| entry.user.to_lowercase().contains(topic))
}
