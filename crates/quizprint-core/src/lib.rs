//! quizprint-core
//!
//! Pure domain types for the quiz tree, aggregate counts, and the source
//! extractor. No filesystem access: callers hand in text and get a tree back.

pub mod error;
pub mod models;
pub mod source;
pub mod totals;
