//! Similarity index implementations.
//!
//! The default [`LexicalSimilarityIndex`] scores past inputs by token-set
//! cosine overlap and needs no model downloads. With the `embeddings`
//! feature enabled, [`FastembedSimilarityIndex`] ranks by dense-vector
//! cosine similarity instead.

use std::collections::HashSet;

use flexichat_core::similarity::SimilarityIndex;

fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Token-overlap similarity over past conversation inputs.
///
/// Score is cosine similarity between token sets: shared tokens divided by
/// the geometric mean of the two set sizes. Only strictly positive scores
/// qualify, so queries sharing no words with the corpus return nothing.
#[derive(Default)]
pub struct LexicalSimilarityIndex {
    entries: Vec<(String, HashSet<String>)>,
}

impl LexicalSimilarityIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SimilarityIndex for LexicalSimilarityIndex {
    fn rebuild(&mut self, texts: &[String]) {
        self.entries = texts
            .iter()
            .map(|text| (text.clone(), tokenize(text)))
            .collect();
    }

    fn find_similar(&self, query: &str, k: usize) -> Vec<String> {
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() || k == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(f32, &String)> = self
            .entries
            .iter()
            .filter_map(|(text, tokens)| {
                if tokens.is_empty() {
                    return None;
                }
                let shared = query_tokens.intersection(tokens).count();
                if shared == 0 {
                    return None;
                }
                let score =
                    shared as f32 / ((query_tokens.len() * tokens.len()) as f32).sqrt();
                Some((score, text))
            })
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().take(k).map(|(_, text)| text.clone()).collect()
    }
}

/// Dense-embedding similarity backed by fastembed.
///
/// Model initialization can fail (it downloads weights on first use), so
/// construction returns a `Result`; once built, lookups never fail and an
/// empty corpus simply yields no matches.
#[cfg(feature = "embeddings")]
pub mod embedded {
    use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

    use flexichat_core::similarity::SimilarityIndex;

    pub struct FastembedSimilarityIndex {
        model: TextEmbedding,
        entries: Vec<(String, Vec<f32>)>,
    }

    impl FastembedSimilarityIndex {
        pub fn new() -> anyhow::Result<Self> {
            let model = TextEmbedding::try_new(
                InitOptions::new(EmbeddingModel::AllMiniLML6V2),
            )?;
            Ok(Self {
                model,
                entries: Vec::new(),
            })
        }
    }

    fn cosine(a: &[f32], b: &[f32]) -> f32 {
        let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot / (norm_a * norm_b)
    }

    impl SimilarityIndex for FastembedSimilarityIndex {
        fn rebuild(&mut self, texts: &[String]) {
            self.entries.clear();
            if texts.is_empty() {
                return;
            }
            match self.model.embed(texts.to_vec(), None) {
                Ok(vectors) => {
                    self.entries = texts.iter().cloned().zip(vectors).collect();
                }
                Err(err) => {
                    tracing::warn!("embedding rebuild failed: {err}");
                }
            }
        }

        fn find_similar(&self, query: &str, k: usize) -> Vec<String> {
            if self.entries.is_empty() || k == 0 {
                return Vec::new();
            }
            let query_vec = match self.model.embed(vec![query.to_string()], None) {
                Ok(mut vectors) if !vectors.is_empty() => vectors.remove(0),
                Ok(_) => return Vec::new(),
                Err(err) => {
                    tracing::warn!("embedding query failed: {err}");
                    return Vec::new();
                }
            };

            let mut scored: Vec<(f32, &String)> = self
                .entries
                .iter()
                .map(|(text, vec)| (cosine(&query_vec, vec), text))
                .filter(|(score, _)| *score > 0.0)
                .collect();
            scored.sort_by(|a, b| {
                b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal)
            });
            scored.into_iter().take(k).map(|(_, text)| text.clone()).collect()
        }
    }
}

#[cfg(feature = "embeddings")]
pub use embedded::FastembedSimilarityIndex;
