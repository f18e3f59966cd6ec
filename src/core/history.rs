//! Versioned history of registry snapshots
//!
//! A single linear log with a current-position pointer, in the style of an
//! editor undo stack. Snapshots are whole-registry values, so undo and redo
//! are pure state restoration and never re-run the co-requisite engine.

use crate::core::error::{PlannerError, Result};
use crate::core::models::Registry;

/// Undo/redo log of immutable registry snapshots
#[derive(Debug, Clone)]
pub struct VersionedRegistry {
    /// Snapshot list; index 0 is the initial state
    states: Vec<Registry>,

    /// Index of the snapshot the session currently sits on
    current: usize,
}

impl VersionedRegistry {
    /// Create a history seeded with the initial registry state
    #[must_use]
    pub fn new(initial: Registry) -> Self {
        Self {
            states: vec![initial],
            current: 0,
        }
    }

    /// Record a new snapshot
    ///
    /// Any snapshots after the current position are discarded first, so a
    /// mutation after undo abandons the redo branch.
    pub fn commit(&mut self, state: Registry) {
        self.states.truncate(self.current + 1);
        self.states.push(state);
        self.current += 1;
    }

    /// Step back one snapshot
    ///
    /// # Errors
    /// Returns `NoEarlierState` when already at the initial snapshot
    pub fn undo(&mut self) -> Result<&Registry> {
        if self.current == 0 {
            return Err(PlannerError::NoEarlierState);
        }
        self.current -= 1;
        Ok(&self.states[self.current])
    }

    /// Step forward one snapshot
    ///
    /// # Errors
    /// Returns `NoLaterState` when already at the latest snapshot
    pub fn redo(&mut self) -> Result<&Registry> {
        if self.current + 1 == self.states.len() {
            return Err(PlannerError::NoLaterState);
        }
        self.current += 1;
        Ok(&self.states[self.current])
    }

    /// The snapshot at the current position
    #[must_use]
    pub fn current(&self) -> &Registry {
        &self.states[self.current]
    }

    /// Whether undo is possible
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.current > 0
    }

    /// Whether redo is possible
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.states.len()
    }

    /// Number of recorded snapshots (including the initial state)
    #[must_use]
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    /// Index of the current snapshot (0 is the initial state)
    #[must_use]
    pub const fn position(&self) -> usize {
        self.current
    }
}
