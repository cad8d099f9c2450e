//! Love Notes UI Components
//!
//! Stateless Dioxus primitives for the greeting-card look. Class names map
//! to the global stylesheet shipped by the application.
//!
//! ## Palette
//!
//! - **Rose (#f43f5e)**: primary actions, accents
//! - **Blush (#fff0f3)**: card paper
//! - **Handwriting**: Caveat, falling back to Patrick Hand

pub mod components;

pub use components::*;
