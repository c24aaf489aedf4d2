//! Text-mining heuristics over memo text.
//!
//! # Responsibility
//! - Extract inline metadata tags and keywords.
//! - Detect mentioned people and follow-up commitments.
//!
//! # Invariants
//! - Every function here is pure and infallible: malformed input yields empty
//!   results, never an error.
//! - Regexes are compiled once per process and shared read-only.

pub mod follow_up;
pub mod keywords;
pub mod metadata;
pub mod people;
