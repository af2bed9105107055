//! Generic "X is Y" fact extractor.
//!
//! Learns declarative statements into the fact table. A leading question
//! word (what/who/why/how) blocks the match so questions are never captured
//! as facts; "what is love" falls through to the fact resolver while
//! "love is emotion" stores `love -> emotion`.

use std::sync::LazyLock;

use regex::Regex;

use flexichat_types::record::MemoryRecord;

use crate::normalize::trim_trailing_punctuation;

static QUESTION_GUARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?:what|who|why|how)\b").unwrap());

static FACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*([^?.!]+?)\s+is\s+(.+)$").unwrap());

/// Try to learn a `<subject> is <definition>` statement.
///
/// Subjects shorter than two characters and empty definitions are
/// rejected. The subject is stored lower-cased; a later statement about
/// the same subject overwrites the earlier one.
pub fn extract_fact(record: &mut MemoryRecord, text: &str) -> Option<String> {
    if QUESTION_GUARD.is_match(text) {
        return None;
    }
    let caps = FACT_RE.captures(text)?;
    let subject = trim_trailing_punctuation(caps.get(1)?.as_str()).to_lowercase();
    let definition = trim_trailing_punctuation(caps.get(2)?.as_str()).to_string();
    if subject.len() < 2 || definition.is_empty() {
        return None;
    }
    tracing::debug!(%subject, "fact learned");
    record.facts.insert(subject.clone(), definition.clone());
    Some(format!("Got it! I've learned that {subject} is {definition}."))
}
