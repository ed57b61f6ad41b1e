//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate permutation and date/browser concerns from page
//! and component logic to improve reuse and testability.

pub mod date;
pub mod shuffle;
