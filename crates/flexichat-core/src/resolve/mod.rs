//! Query resolvers: rules that answer from learned memory.
//!
//! Resolvers never mutate the record. Each one scans the input for its
//! question forms and looks up the memory store or context buffer; `None`
//! is the explicit "no answer" signal that lets the dispatcher fall
//! through to the next stage.
//!
//! Priority order (first non-None wins):
//! 1. [`relationship`] -- "who is my <role>"
//! 2. [`fact`]         -- "what is X" / "who is X" / "define X"
//! 3. [`personal`]     -- "my name" / "who am i" / "my city" / ...
//! 4. [`context`]      -- temporal references and "what did i tell you about"

pub mod context;
pub mod fact;
pub mod personal;
pub mod relationship;
