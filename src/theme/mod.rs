//! Theme for Love Notes: fonts and the global stylesheet.

mod styles;

pub use styles::GLOBAL_STYLES;

/// Handwriting fonts (Caveat, Patrick Hand), linked once by the root.
pub const FONTS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Caveat:wght@400;600&family=Patrick+Hand&display=swap";
