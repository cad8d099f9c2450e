//! End-to-end visitor scenarios
//!
//! Drives the gate and session together the way the application root does,
//! against in-memory and on-disk stores.

use lovenotes_core::{
    Gate, KeyValueStore, Marker, MemoryStore, NoteDeck, NotesError, PrimaryAction, RedbStore,
    Session, EXPECTED_PASSWORD, UNLOCK_KEY,
};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Submit `input` and unlock the session on success, as the gate's callback does.
fn submit(session: &mut Session, store: &dyn KeyValueStore, input: &str) -> Result<(), NotesError> {
    Gate::default().submit(store, input)?;
    session.unlock();
    Ok(())
}

// ============================================================================
// Gate Scenarios
// ============================================================================

#[test]
fn test_fresh_session_wrong_then_right_password() {
    let store = MemoryStore::new();
    let deck = NoteDeck::builtin();
    let mut session = Session::restore(deck.len(), &store);

    assert!(session.shows_gate());

    let err = submit(&mut session, &store, "wrong").unwrap_err();
    assert!(matches!(err, NotesError::PasswordMismatch));
    assert!(session.shows_gate());
    assert_eq!(store.get(UNLOCK_KEY).unwrap(), None);

    submit(&mut session, &store, EXPECTED_PASSWORD).unwrap();
    assert!(!session.shows_gate());
    assert_eq!(session.position(), 0);
    assert_eq!(store.get(UNLOCK_KEY).unwrap().as_deref(), Some("true"));
}

#[test]
fn test_persisted_flag_skips_gate() {
    let store = MemoryStore::with_entry(UNLOCK_KEY, "true");
    let session = Session::restore(NoteDeck::builtin().len(), &store);

    assert!(session.is_unlocked());
    assert!(!session.shows_gate());
    assert_eq!(session.position(), 0);
}

#[test]
fn test_unlock_survives_restart_with_redb() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lovenotes.redb");
    let deck = NoteDeck::builtin();

    {
        let store = RedbStore::open(&path).unwrap();
        let mut session = Session::restore(deck.len(), &store);
        submit(&mut session, &store, &format!("  {EXPECTED_PASSWORD}  ")).unwrap();
    }

    let store = RedbStore::open(&path).unwrap();
    let session = Session::restore(deck.len(), &store);
    assert!(session.is_unlocked());
}

// ============================================================================
// Navigation Scenarios
// ============================================================================

#[test]
fn test_walk_through_deck_and_again() {
    let store = MemoryStore::with_entry(UNLOCK_KEY, "true");
    let deck = NoteDeck::builtin();
    let n = deck.len();
    let mut session = Session::restore(n, &store);

    assert!(!session.can_go_back());
    assert_eq!(session.primary_action(), PrimaryAction::Next);

    for _ in 0..n - 1 {
        session.advance();
    }
    assert_eq!(session.position(), n - 1);
    assert_eq!(session.primary_action(), PrimaryAction::Again);
    assert!(session.progress().all(|m| m == Marker::Reached));

    session.advance();
    assert_eq!(session.position(), 0);
    assert!(!session.can_go_back());
    assert_eq!(
        session.progress().filter(|m| *m == Marker::Reached).count(),
        1
    );
}

#[test]
fn test_navigation_is_idempotent_at_edges() {
    let deck = NoteDeck::new(["one", "two", "three"]).unwrap();
    let mut session = Session::new(deck.len());
    session.unlock();

    session.prev();
    session.prev();
    assert_eq!(session.position(), 0);

    for _ in 0..10 {
        session.next();
    }
    assert_eq!(session.position(), 2);
    assert_eq!(deck.get(session.position()), Some("three"));
}

#[test]
fn test_single_note_deck() {
    let deck = NoteDeck::new(["only"]).unwrap();
    let mut session = Session::new(deck.len());
    session.unlock();

    assert!(!session.can_go_back());
    assert_eq!(session.primary_action(), PrimaryAction::Again);
    session.advance();
    assert_eq!(session.position(), 0);
}
