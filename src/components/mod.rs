//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render feed content while reading shared state from Leptos
//! context providers; they hold no domain logic of their own.

pub mod rumour_card;
