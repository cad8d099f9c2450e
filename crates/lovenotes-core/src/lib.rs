//! Love Notes Core Library
//!
//! Everything behind the greeting-card slideshow that is not rendering:
//! the note deck, the password gate, the session state machine, storage for
//! the unlock flag, and the randomized background particles.
//!
//! ## Quick Start
//!
//! ```
//! use lovenotes_core::{Gate, MemoryStore, NoteDeck, Session};
//!
//! let store = MemoryStore::new();
//! let deck = NoteDeck::builtin();
//! let mut session = Session::restore(deck.len(), &store);
//! assert!(session.shows_gate());
//!
//! assert!(Gate::default().submit(&store, "wrong").is_err());
//! Gate::default().submit(&store, "muskuuu").unwrap();
//! session.unlock();
//!
//! session.next();
//! assert_eq!(deck.get(session.position()), deck.get(1));
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod gate;
pub mod particles;
pub mod session;
pub mod storage;

// Re-exports
pub use config::AppConfig;
pub use content::NoteDeck;
pub use error::{NotesError, NotesResult};
pub use gate::{Gate, EXPECTED_PASSWORD, MISMATCH_MESSAGE, UNLOCK_KEY, UNLOCK_SENTINEL};
pub use particles::{generate_particles, HeartParticle, Tint};
pub use session::{clamp, LockState, Marker, Move, PrimaryAction, Session};
pub use storage::{KeyValueStore, MemoryStore, RedbStore, SharedStore, UnavailableStore};
