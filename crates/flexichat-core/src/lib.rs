//! Rule-based dialogue engine for FlexiChat.
//!
//! This crate holds all of the decision logic: pattern-table extractors that
//! learn from the input, query resolvers that answer from learned memory,
//! the prioritized dispatch chain, and the short-term context buffer. It
//! also defines the "ports" (the [`store::RecordStore`] trait and the
//! [`similarity::SimilarityIndex`] capability) that the infrastructure
//! layer implements. It depends only on `flexichat-types` -- never on any
//! database/IO crate.

pub mod context;
pub mod engine;
pub mod extract;
pub mod knowledge;
pub mod normalize;
pub mod resolve;
pub mod similarity;
pub mod smalltalk;
pub mod store;
