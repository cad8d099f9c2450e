//! Shared context for Love Notes components.
//!
//! The root `App` provides the note deck and the key-value store; children
//! read them with the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(open_store);
//!
//! // In child components
//! let store = use_store();
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use lovenotes_core::config::DATABASE_FILE_NAME;
use lovenotes_core::{storage, AppConfig, NoteDeck, SharedStore};

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the configuration resolved at startup.
pub fn get_config() -> AppConfig {
    crate::get_config()
}

/// Open the unlock-flag store in the data directory.
///
/// Falls back to an in-memory store if the database cannot be opened.
pub fn open_store() -> SharedStore {
    storage::open_or_fallback(get_data_dir().join(DATABASE_FILE_NAME))
}

/// Hook to access the key-value store from context.
pub fn use_store() -> SharedStore {
    use_context::<SharedStore>()
}

/// Hook to access the note deck from context.
pub fn use_deck() -> NoteDeck {
    use_context::<NoteDeck>()
}
