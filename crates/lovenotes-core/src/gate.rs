//! Password gate.
//!
//! A visitor unlocks the notes by typing the shared secret. Success is
//! remembered through a single flag in the key-value store so a returning
//! visitor skips the gate.

use crate::error::{NotesError, NotesResult};
use crate::storage::KeyValueStore;

/// The shared secret.
pub const EXPECTED_PASSWORD: &str = "muskuuu";

/// Storage key of the unlock flag.
pub const UNLOCK_KEY: &str = "love:unlocked";

/// Value stored under [`UNLOCK_KEY`] once unlocked.
pub const UNLOCK_SENTINEL: &str = "true";

/// Inline message shown after a wrong password.
pub const MISMATCH_MESSAGE: &str = "That’s not it — try again 💗";

/// Compare `input`, trimmed, against `expected` by exact equality.
pub fn check_password(input: &str, expected: &str) -> NotesResult<()> {
    if input.trim() == expected {
        Ok(())
    } else {
        Err(NotesError::PasswordMismatch)
    }
}

/// Whether the persisted flag says the notes are unlocked.
///
/// Storage failures read as locked.
pub fn is_unlocked(store: &dyn KeyValueStore) -> bool {
    match store.get(UNLOCK_KEY) {
        Ok(value) => value.as_deref() == Some(UNLOCK_SENTINEL),
        Err(e) => {
            tracing::warn!(error = %e, "Could not read unlock flag, treating as locked");
            false
        }
    }
}

/// Remember the unlock. A failed write only costs the visitor a retype next time.
pub fn persist_unlock(store: &dyn KeyValueStore) {
    if let Err(e) = store.set(UNLOCK_KEY, UNLOCK_SENTINEL) {
        tracing::warn!(error = %e, "Could not persist unlock flag");
    }
}

/// Password gate bound to an expected secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    expected: String,
}

impl Gate {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Check `input` and persist the unlock flag on success.
    ///
    /// On mismatch nothing is written and the caller may retry without limit.
    pub fn submit(&self, store: &dyn KeyValueStore, input: &str) -> NotesResult<()> {
        match check_password(input, &self.expected) {
            Ok(()) => {
                persist_unlock(store);
                tracing::info!("Gate unlocked");
                Ok(())
            }
            Err(e) => {
                tracing::debug!("Gate rejected password");
                Err(e)
            }
        }
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new(EXPECTED_PASSWORD)
    }
}
