//! Optional similarity-search capability.
//!
//! The contextual-reference resolver can fall back to a best-effort "find
//! similar past inputs" lookup when a literal substring scan finds nothing.
//! Absence of the capability is a configuration state, not an error path:
//! the engine holds an `Option<Box<dyn SimilarityIndex>>` and degrades
//! silently to "no additional result" when it is `None` or returns nothing.

/// Best-effort similarity search over past conversation inputs.
///
/// Implementations live in flexichat-infra (a lexical overlap index by
/// default, an embedding-backed index behind the `embeddings` feature).
/// Both operations are infallible: an implementation that cannot serve a
/// query returns an empty result.
pub trait SimilarityIndex: Send + Sync {
    /// Replace the indexed corpus with the given texts.
    fn rebuild(&mut self, texts: &[String]);

    /// Return up to `k` indexed texts most similar to `query`,
    /// best match first. Empty when nothing qualifies.
    fn find_similar(&self, query: &str, k: usize) -> Vec<String>;
}
