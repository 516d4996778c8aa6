//! Weighted flashcard practice server.
//!
//! Words live in a single JSON file with per-word `correct`/`wrong`
//! counters. Each practice request serves the words in a shuffled order
//! biased toward the ones the user keeps getting wrong; answer outcomes
//! update the counters.

pub mod server;
pub mod words;
