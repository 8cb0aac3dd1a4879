//! Camera state store: the single authority for pose mutations and
//! bounded undo/redo history.
//!
//! DESIGN
//! ======
//! `past` holds pre-mutation snapshots, most recent last, capped at
//! [`HISTORY_CAP`] with the oldest evicted first. `future` holds undone
//! states, most recent first, and is discarded on any effective mutation,
//! keeping the history linear. Every effective update is its own entry:
//! rapid per-frame drag updates are not coalesced, trading memory (bounded
//! by the cap) for undo granularity.
//!
//! The store never clamps. Callers hand it already-clamped updates; the
//! [`crate::input`] module enforces that contract for raw UI deltas.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::VecDeque;

use crate::camera::{CameraState, CameraUpdate};
use crate::consts::HISTORY_CAP;

/// Owns the live camera pose and both history stacks for one session.
#[derive(Debug, Clone)]
pub struct CameraStore {
    state: CameraState,
    past: VecDeque<CameraState>,
    future: VecDeque<CameraState>,
}

impl CameraStore {
    /// Create a store at the default pose with empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CameraState::default(),
            past: VecDeque::new(),
            future: VecDeque::new(),
        }
    }

    /// Merge a sparse update into the current pose.
    ///
    /// If at least one supplied field differs from its current value, the
    /// pre-mutation pose is pushed onto `past` and `future` is cleared.
    /// The merge is applied either way; a no-op update succeeds without
    /// touching history.
    pub fn update(&mut self, update: &CameraUpdate) {
        if update.changes(&self.state) {
            let snapshot = self.state;
            self.push_past(snapshot);
            self.future.clear();
        }
        update.apply_to(&mut self.state);
    }

    /// Step back to the most recent snapshot. No-op if `past` is empty.
    pub fn undo(&mut self) {
        let Some(previous) = self.past.pop_back() else {
            return;
        };
        self.future.push_front(self.state);
        self.state = previous;
    }

    /// Replay the most recently undone state. No-op if `future` is empty.
    pub fn redo(&mut self) {
        let Some(next) = self.future.pop_front() else {
            return;
        };
        let snapshot = self.state;
        self.push_past(snapshot);
        self.state = next;
    }

    /// Return to the default pose. The pre-reset pose is pushed onto
    /// `past`, so the reset itself is undoable; `future` is cleared.
    pub fn reset(&mut self) {
        let snapshot = self.state;
        self.push_past(snapshot);
        self.future.clear();
        self.state = CameraState::default();
    }

    /// The current pose.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of snapshots currently on the undo stack.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of states currently on the redo stack.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    fn push_past(&mut self, snapshot: CameraState) {
        if self.past.len() == HISTORY_CAP {
            self.past.pop_front();
        }
        self.past.push_back(snapshot);
    }
}

impl Default for CameraStore {
    fn default() -> Self {
        Self::new()
    }
}
