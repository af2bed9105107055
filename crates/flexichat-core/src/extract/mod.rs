//! Extractors: rules that learn from the input line.
//!
//! Each extractor scans the raw input against an ordered pattern table and,
//! on the first match, performs exactly one mutation of the memory record
//! and returns a confirmation reply. `None` means no mutation and no reply,
//! letting the dispatcher fall through to the next stage.
//!
//! Priority order (first match wins per call):
//! 1. [`profile`]  -- structured personal facts (name, country, city, ...)
//! 2. [`relationship`] -- "my girlfriend is X" style rules
//! 3. [`teaching`] -- explicit knowledge-base teaching commands
//! 4. [`fact`]     -- generic "X is Y" statements (question-guarded)

pub mod fact;
pub mod profile;
pub mod relationship;
pub mod teaching;
