//! The note deck shown by the slideshow.
//!
//! Notes are authored at build time and never change at runtime. A note's
//! identity is its position in the deck.

use crate::error::{NotesError, NotesResult};

/// Built-in notes, in display order.
const BUILTIN_NOTES: &[&str] = &[
    "Hey love ✨\nBefore anything else… take a deep breath. This little page is just for you.",
    "I love the way you laugh — it’s like a tiny sunrise I get to keep in my pocket ☀️",
    "Thank you for being my calm on loud days and my cheer on quiet ones 💛",
    "Every small moment with you feels like a favorite song on repeat 🎵",
    "You make ordinary days feel like confetti — soft, bright, and a little bit magical 🎊",
    "I’m proud of you. For the big wins, sure — but mostly for the tiny brave steps no one sees.",
    "Here’s a secret: I still get butterflies when I see your name pop up 🦋",
    "No matter where we are, you’re my home. Always. 🏡",
    "P.S. This is me saying it again (and again): I love you. A lot. ♾️💖",
];

/// An ordered, non-empty sequence of notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDeck {
    notes: Vec<String>,
}

impl NoteDeck {
    /// Create a deck from the given notes.
    ///
    /// Fails when the deck is empty or any note is blank.
    pub fn new<I, S>(notes: I) -> NotesResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let notes: Vec<String> = notes.into_iter().map(Into::into).collect();
        if notes.is_empty() {
            return Err(NotesError::EmptyDeck);
        }
        if let Some(index) = notes.iter().position(|n| n.trim().is_empty()) {
            return Err(NotesError::BlankNote(index));
        }
        Ok(Self { notes })
    }

    /// The deck compiled into the application.
    pub fn builtin() -> Self {
        Self {
            notes: BUILTIN_NOTES.iter().map(|n| (*n).to_string()).collect(),
        }
    }

    /// Number of notes. Never zero.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.notes.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.notes.iter().map(String::as_str)
    }
}

impl Default for NoteDeck {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_is_non_empty() {
        let deck = NoteDeck::builtin();
        assert_eq!(deck.len(), 9);
        assert!(!deck.is_empty());
        assert!(deck.iter().all(|n| !n.trim().is_empty()));
    }

    #[test]
    fn first_note_keeps_line_break() {
        let deck = NoteDeck::builtin();
        let first = deck.get(0).unwrap();
        assert!(first.contains('\n'));
        assert!(first.starts_with("Hey love"));
    }

    #[test]
    fn get_out_of_range_is_none() {
        let deck = NoteDeck::builtin();
        assert!(deck.get(deck.len()).is_none());
    }

    #[test]
    fn new_rejects_empty_deck() {
        let result = NoteDeck::new(Vec::<String>::new());
        assert!(matches!(result, Err(NotesError::EmptyDeck)));
    }

    #[test]
    fn new_rejects_blank_note() {
        let result = NoteDeck::new(["first", "  \n ", "third"]);
        assert!(matches!(result, Err(NotesError::BlankNote(1))));
    }

    #[test]
    fn new_keeps_order() {
        let deck = NoteDeck::new(["a", "b", "c"]).unwrap();
        assert_eq!(deck.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
