//! Domain model consumed by the mining core.
//!
//! # Responsibility
//! - Define the memo and relationship shapes supplied by external collaborators.
//! - Keep storage concerns out of the core: these types are plain values.
//!
//! # Invariants
//! - Every memo is identified by a stable `MemoId`.
//! - Profile ids are the values referenced by `[Contact: <id>]` tags.

pub mod memo;
pub mod profile;
