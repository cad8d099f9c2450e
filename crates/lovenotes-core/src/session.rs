//! Session state machine.
//!
//! Two orthogonal axes:
//! - lock: `Locked` → `Unlocked`, no way back within a session
//! - position: `0..note_count`, only meaningful while unlocked
//!
//! Out-of-range moves are clamped, never rejected, so `0 <= position <
//! note_count` holds after every operation.

use crate::gate;
use crate::storage::KeyValueStore;

/// Clamp `value` into `[min, max]`.
pub fn clamp(value: i64, min: i64, max: i64) -> i64 {
    value.min(max).max(min)
}

/// Lock axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockState {
    #[default]
    Locked,
    Unlocked,
}

/// Most recent position change, for the card transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Move {
    #[default]
    None,
    Forward,
    Backward,
    Restart,
}

/// What the right-hand control does at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    /// Advance one note
    Next,
    /// Back to the first note; only at the last one
    Again,
}

/// Progress marker for one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// At or before the current position
    Reached,
    /// After the current position
    Ahead,
}

/// Per-visit session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    lock: LockState,
    position: usize,
    note_count: usize,
    last_move: Move,
    outgoing: Option<usize>,
}

impl Session {
    /// Fresh, locked session.
    ///
    /// A `note_count` of zero is treated as one so the position range is
    /// never empty.
    pub fn new(note_count: usize) -> Self {
        Self {
            lock: LockState::Locked,
            position: 0,
            note_count: note_count.max(1),
            last_move: Move::None,
            outgoing: None,
        }
    }

    /// Fresh session, unlocked when the persisted flag is already set.
    pub fn restore(note_count: usize, store: &dyn KeyValueStore) -> Self {
        let mut session = Self::new(note_count);
        if gate::is_unlocked(store) {
            tracing::info!("Unlock flag present, skipping gate");
            session.unlock();
        }
        session
    }

    pub fn lock_state(&self) -> LockState {
        self.lock
    }

    pub fn is_unlocked(&self) -> bool {
        self.lock == LockState::Unlocked
    }

    /// The gate is shown iff the session is locked.
    pub fn shows_gate(&self) -> bool {
        !self.is_unlocked()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn note_count(&self) -> usize {
        self.note_count
    }

    pub fn last_move(&self) -> Move {
        self.last_move
    }

    /// Position the visitor just left, while its card is still on its way out.
    pub fn outgoing(&self) -> Option<usize> {
        self.outgoing
    }

    /// The outgoing card has finished leaving.
    pub fn finish_exit(&mut self) {
        self.outgoing = None;
    }

    /// Idempotent.
    pub fn unlock(&mut self) {
        self.lock = LockState::Unlocked;
    }

    /// Advance one note, stopping at the last.
    pub fn next(&mut self) {
        self.step(1, Move::Forward);
    }

    /// Go back one note, stopping at the first.
    pub fn prev(&mut self) {
        self.step(-1, Move::Backward);
    }

    pub fn restart(&mut self) {
        if !self.is_unlocked() {
            return;
        }
        if self.position != 0 {
            self.outgoing = Some(self.position);
        }
        self.position = 0;
        self.last_move = Move::Restart;
        tracing::debug!("Restarted notes");
    }

    /// Run the primary action for the current position.
    pub fn advance(&mut self) {
        match self.primary_action() {
            PrimaryAction::Next => self.next(),
            PrimaryAction::Again => self.restart(),
        }
    }

    /// "Back" is disabled exactly at the first note.
    pub fn can_go_back(&self) -> bool {
        self.position > 0
    }

    pub fn is_last(&self) -> bool {
        self.position == self.last_index()
    }

    pub fn primary_action(&self) -> PrimaryAction {
        if self.is_last() {
            PrimaryAction::Again
        } else {
            PrimaryAction::Next
        }
    }

    /// One marker per note.
    pub fn progress(&self) -> impl Iterator<Item = Marker> + '_ {
        (0..self.note_count).map(move |i| {
            if i <= self.position {
                Marker::Reached
            } else {
                Marker::Ahead
            }
        })
    }

    fn last_index(&self) -> usize {
        self.note_count - 1
    }

    fn step(&mut self, delta: i64, direction: Move) {
        if !self.is_unlocked() {
            return;
        }
        let target = clamp(self.position as i64 + delta, 0, self.last_index() as i64) as usize;
        if target != self.position {
            self.outgoing = Some(self.position);
            self.position = target;
            self.last_move = direction;
            tracing::debug!(position = self.position, "Moved to note");
        }
    }
}
