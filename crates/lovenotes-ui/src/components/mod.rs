//! Reusable UI primitives
//!
//! Every component is stateless apart from `SecretInput`'s mask toggle.

mod button;
mod card;
mod secret_input;

pub use button::*;
pub use card::*;
pub use secret_input::*;
