//! Session-level services built on the mining heuristics.
//!
//! # Responsibility
//! - Hold caller-owned session state (suggestions, dismissals, resolved
//!   follow-ups).
//! - Keep UI callers decoupled from detector details.

pub mod follow_up_service;
pub mod suggestion_service;
