//! Deterministic question answering over a fixed calculus knowledge base.
//!
//! `calculus-tutor` segments a free-text question into tokens and returns the
//! record of the first registered topic key found among them: an explanation,
//! a worked example and an exercise. Questions that mention no topic get a
//! fallback record listing the available topics. Matching is pure and total:
//! identical inputs always produce identical outputs, and no input fails.

pub mod config;
pub mod knowledge;
pub mod matching;
pub mod render;
pub mod topic;
pub mod types;
