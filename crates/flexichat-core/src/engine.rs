//! The dialogue dispatcher.
//!
//! [`ChatEngine`] orchestrates one request end to end: extractors in
//! priority order, then resolvers, then the help/mood/greeting/teach-offer
//! stages, then the deterministic fallback. The first stage to produce a
//! reply wins; every reply except the empty-input prompt is recorded to the
//! conversation log and context buffer and persisted immediately.
//!
//! `get_response` never fails: persistence errors are logged and swallowed
//! (best-effort per turn) and the optional similarity capability degrades
//! silently, so the caller always gets a reply string.

use std::sync::LazyLock;

use regex::Regex;

use flexichat_types::config::GlobalConfig;
use flexichat_types::error::StoreError;
use flexichat_types::exchange::Exchange;
use flexichat_types::record::MemoryRecord;

use crate::context::ContextBuffer;
use crate::extract::fact::extract_fact;
use crate::extract::profile::extract_profile;
use crate::extract::relationship::extract_relationship;
use crate::extract::teaching::TeachRules;
use crate::knowledge::{resolve_help, seed_defaults};
use crate::normalize::{capitalize_first, normalize_key};
use crate::resolve::context::resolve_contextual;
use crate::resolve::fact::resolve_fact;
use crate::resolve::personal::resolve_personal;
use crate::resolve::relationship::resolve_relationship;
use crate::similarity::SimilarityIndex;
use crate::smalltalk::{fallback_reply, resolve_greeting, resolve_mood};
use crate::store::RecordStore;

static TELL_ME_ABOUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:tell me about|what do you know about)\s+(.+?)\??$").unwrap()
});

/// Rule-based dialogue engine bound to one memory store.
///
/// Not reentrant: one call performs a read-modify-persist sequence with no
/// isolation, so concurrent callers must serialize access (one engine per
/// session, or a mutex around dispatch).
pub struct ChatEngine<S> {
    store: S,
    record: MemoryRecord,
    context: ContextBuffer,
    teach_rules: TeachRules,
    assistant_name: String,
    similarity: Option<Box<dyn SimilarityIndex>>,
}

impl<S: RecordStore> ChatEngine<S> {
    /// Load the record, seed the knowledge base, and build the optional
    /// similarity index over past conversation inputs.
    pub async fn init(
        store: S,
        config: &GlobalConfig,
        similarity: Option<Box<dyn SimilarityIndex>>,
    ) -> Result<Self, StoreError> {
        let record = store.load().await?;
        let mut engine = Self {
            store,
            record,
            context: ContextBuffer::new(config.context_size),
            teach_rules: TeachRules::new(&config.trigger()),
            assistant_name: config.assistant_name.clone(),
            similarity,
        };
        if seed_defaults(&mut engine.record) {
            engine.persist().await;
        }
        engine.rebuild_similarity();
        Ok(engine)
    }

    /// Produce one reply for one line of input.
    pub async fn get_response(&mut self, input: &str) -> String {
        let text = input.trim();
        if text.is_empty() {
            // no mutation, no logging
            return "Type something for me to respond to.".to_string();
        }

        // Extractors, first match wins. Each success is a mutation, so it
        // is persisted before the exchange itself is recorded.
        let extracted = extract_profile(&mut self.record, text)
            .or_else(|| extract_relationship(&mut self.record, text))
            .or_else(|| self.teach_rules.extract(&mut self.record, text))
            .or_else(|| extract_fact(&mut self.record, text));
        if let Some(reply) = extracted {
            self.persist().await;
            return self.remember(text, reply).await;
        }

        // Resolvers, first non-None wins. No mutation beyond logging.
        let resolved = resolve_relationship(&self.record, text)
            .or_else(|| resolve_fact(&self.record, text))
            .or_else(|| resolve_personal(&self.record, text))
            .or_else(|| {
                resolve_contextual(&self.record, &self.context, self.similarity.as_deref(), text)
            });
        if let Some(reply) = resolved {
            return self.remember(text, reply).await;
        }

        if let Some(reply) = resolve_help(&self.record, text) {
            return self.remember(text, reply).await;
        }
        if let Some(reply) = resolve_mood(text) {
            return self.remember(text, reply).await;
        }
        if let Some(reply) = resolve_greeting(&self.record, &self.assistant_name, text) {
            return self.remember(text, reply).await;
        }
        if let Some(reply) = self.resolve_tell_me_about(text) {
            return self.remember(text, reply).await;
        }

        let reply = fallback_reply(&self.record);
        self.remember(text, reply).await
    }

    /// Restore defaults, stamp a fresh creation time, clear the context
    /// buffer, and persist. Returns a confirmation message.
    pub async fn reset(&mut self) -> String {
        self.record = MemoryRecord::fresh();
        self.context.clear();
        self.persist().await;
        self.rebuild_similarity();
        "Memory reset. Fresh start!".to_string()
    }

    /// The full persisted conversation log.
    pub fn history(&self) -> &[Exchange] {
        &self.record.conversations
    }

    /// Read access to the current record (profile, facts, knowledge).
    pub fn record(&self) -> &MemoryRecord {
        &self.record
    }

    /// "tell me about X" / "what do you know about X": facts, then
    /// knowledge base, then an explicit invitation with the teaching
    /// syntax.
    fn resolve_tell_me_about(&self, text: &str) -> Option<String> {
        let caps = TELL_ME_ABOUT_RE.captures(text)?;
        let topic = caps.get(1)?.as_str().trim().to_lowercase();
        if let Some(definition) = self.record.facts.get(&topic) {
            return Some(format!("{} is {definition}.", capitalize_first(&topic)));
        }
        if let Some(explanation) = self.record.flexipdf_knowledge.get(&normalize_key(&topic)) {
            return Some(explanation.clone());
        }
        Some(format!(
            "I don't have much on {topic} yet. Would you like to teach me? \
             Say: {} learn '{topic}' means <your explanation>",
            self.assistant_name
        ))
    }

    /// Append the exchange to the log and context buffer, persist, and
    /// refresh the similarity index. Returns the reply for convenience.
    async fn remember(&mut self, input: &str, reply: String) -> String {
        let exchange = Exchange::now(input, reply.clone());
        self.record.conversations.push(exchange.clone());
        self.context.push(exchange);
        self.persist().await;
        self.rebuild_similarity();
        reply
    }

    /// Best-effort durable save. Failure must not interrupt the dialogue.
    async fn persist(&self) {
        if let Err(err) = self.store.save(&self.record).await {
            tracing::warn!(error = %err, "failed to persist memory record");
        }
    }

    fn rebuild_similarity(&mut self) {
        if let Some(index) = self.similarity.as_mut() {
            let texts: Vec<String> = self
                .record
                .conversations
                .iter()
                .map(|e| e.user.clone())
                .collect();
            index.rebuild(&texts);
        }
    }
}
