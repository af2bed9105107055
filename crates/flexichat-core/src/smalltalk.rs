//! Mood detection, greetings, and the deterministic fallback reply.
//!
//! These run at the tail of the dispatch chain, after every extractor and
//! resolver has passed. All replies are fixed strings so behavior stays
//! testable; there is no randomness anywhere in the chain.

use std::sync::LazyLock;

use regex::Regex;

use flexichat_types::record::MemoryRecord;

static MOOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:i am|i'm)\s+(sad|happy|angry|tired|bored|excited)\b").unwrap()
});

static GREETING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:hi|hello|hey|yo|hiya)\b").unwrap());

/// Fixed empathetic replies per detected mood.
const MOOD_REPLIES: &[(&str, &str)] = &[
    ("sad", "Oh no, I'm here for you. Want to tell me what's wrong?"),
    ("happy", "Yay! I'm happy for you!"),
    ("angry", "Take a deep breath. I'm with you."),
    ("tired", "Maybe a short break will help."),
    ("bored", "Let's do something fun. Want a joke or a fact?"),
    ("excited", "Awesome! Tell me what's got you excited!"),
];

/// Reply to "I am X" / "I'm X" over the fixed emotion vocabulary.
pub fn resolve_mood(text: &str) -> Option<String> {
    let caps = MOOD_RE.captures(text)?;
    let mood = caps.get(1)?.as_str().to_lowercase();
    MOOD_REPLIES
        .iter()
        .find(|(m, _)| *m == mood)
        .map(|(_, reply)| (*reply).to_string())
}

/// Personalized greeting for lines starting with hi/hello/hey/yo/hiya.
pub fn resolve_greeting(record: &MemoryRecord, assistant_name: &str, text: &str) -> Option<String> {
    if !GREETING_RE.is_match(text) {
        return None;
    }
    Some(format!(
        "Hey {}! I'm {assistant_name}, your FlexiPDF AI assistant. How can I help you today?",
        record.display_name()
    ))
}

/// Deterministic friendly fallback when nothing else matched.
pub fn fallback_reply(record: &MemoryRecord) -> String {
    format!(
        "Hmm, interesting, {}. Tell me more about that.",
        record.display_name()
    )
}
