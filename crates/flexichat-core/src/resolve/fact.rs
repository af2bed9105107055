//! Fact/definition query resolver.
//!
//! Answers "what is X", "who is X", and "define X" from the fact table
//! first, then the knowledge base. As a fallback the leading article is
//! stripped ("what is the moon" also finds a fact taught as "moon").
//! Unknown terms yield None; the invite-to-teach reply belongs to the
//! broader "tell me about" path in the dispatcher, not here.

use std::sync::LazyLock;

use regex::Regex;

use flexichat_types::record::MemoryRecord;

use crate::normalize::{capitalize_first, display_key, strip_leading_article, trim_trailing_punctuation};

static FACT_QUERY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?:what is|who is|define)\s+(.+)$").unwrap());

/// Answer a definitional question from learned facts or app knowledge.
pub fn resolve_fact(record: &MemoryRecord, text: &str) -> Option<String> {
    let caps = FACT_QUERY_RE.captures(text)?;
    let term = trim_trailing_punctuation(caps.get(1)?.as_str()).to_lowercase();

    if let Some(definition) = record.facts.get(&term) {
        return Some(format!("{} is {definition}.", capitalize_first(&term)));
    }
    if let Some(explanation) = record.flexipdf_knowledge.get(&term) {
        return Some(format!("{}: {explanation}", capitalize_first(&display_key(&term))));
    }

    let stripped = strip_leading_article(&term);
    if stripped != term {
        if let Some(definition) = record.facts.get(stripped) {
            return Some(format!("{} is {definition}.", capitalize_first(stripped)));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_what_is_learned_fact() {
        let mut record = MemoryRecord::default();
        record.facts.insert("love".to_string(), "emotion".to_string());
        let reply = resolve_fact(&record, "What is love?").unwrap();
        assert!(reply.contains("emotion"));
        assert!(reply.starts_with("Love is"));
    }

    #[test]
    fn test_unknown_term_is_none_not_crash() {
        let record = MemoryRecord::default();
        assert!(resolve_fact(&record, "what is love").is_none());
        assert!(resolve_fact(&record, "define entropy?").is_none());
    }

    #[test]
    fn test_knowledge_base_lookup() {
        let mut record = MemoryRecord::default();
        record
            .flexipdf_knowledge
            .insert("split_pdf".to_string(), "Split a PDF by page ranges.".to_string());
        let reply = resolve_fact(&record, "what is split_pdf").unwrap();
        assert!(reply.contains("Split a PDF by page ranges."));
        assert!(reply.starts_with("Split pdf:"));
    }

    #[test]
    fn test_facts_checked_before_knowledge() {
        let mut record = MemoryRecord::default();
        record.facts.insert("ocr".to_string(), "my own definition".to_string());
        record
            .flexipdf_knowledge
            .insert("ocr".to_string(), "app explanation".to_string());
        let reply = resolve_fact(&record, "what is ocr").unwrap();
        assert!(reply.contains("my own definition"));
    }

    #[test]
    fn test_leading_article_stripped_fallback() {
        let mut record = MemoryRecord::default();
        record.facts.insert("moon".to_string(), "a natural satellite".to_string());
        let reply = resolve_fact(&record, "what is the moon?").unwrap();
        assert!(reply.contains("a natural satellite"));
    }

    #[test]
    fn test_define_form() {
        let mut record = MemoryRecord::default();
        record.facts.insert("gravity".to_string(), "a force".to_string());
        assert!(resolve_fact(&record, "define gravity").unwrap().contains("a force"));
    }

    #[test]
    fn test_non_question_is_none() {
        let mut record = MemoryRecord::default();
        record.facts.insert("love".to_string(), "emotion".to_string());
        assert!(resolve_fact(&record, "love is emotion").is_none());
    }
}
