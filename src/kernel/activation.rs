//! Single- vs double-activation of tree rows.
//!
//! A press does not fire immediately: it waits `double_click_ms` for a second
//! press on the same row. Hosts call [`ActivationTracker::poll`] from their
//! tick to flush presses whose window has passed.

use crate::models::NodeId;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Plain activation; hosts toggle the folder.
    Single(NodeId),
    /// Second press inside the window; hosts start a rename.
    Double(NodeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    PendingSingle { id: NodeId, at: Instant },
}

#[derive(Debug)]
pub struct ActivationTracker {
    phase: Phase,
    window: Duration,
}

impl ActivationTracker {
    pub fn new(double_click_ms: u64) -> Self {
        Self {
            phase: Phase::Idle,
            window: Duration::from_millis(double_click_ms),
        }
    }

    /// Registers a press. Returns whatever became decided by it: a double on
    /// the same row, or the flushed single of a different pending row.
    pub fn press(&mut self, id: NodeId, now: Instant) -> Option<Activation> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::PendingSingle { id: pending, at }
                if pending == id && now.saturating_duration_since(at) <= self.window =>
            {
                Some(Activation::Double(id))
            }
            Phase::PendingSingle { id: pending, .. } => {
                self.phase = Phase::PendingSingle { id, at: now };
                Some(Activation::Single(pending))
            }
            Phase::Idle => {
                self.phase = Phase::PendingSingle { id, at: now };
                None
            }
        }
    }

    /// Fires the pending single once its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<Activation> {
        let due = matches!(
            &self.phase,
            Phase::PendingSingle { at, .. } if now.saturating_duration_since(*at) > self.window
        );
        if !due {
            return None;
        }
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::PendingSingle { id, .. } => Some(Activation::Single(id)),
            Phase::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::PendingSingle { .. })
    }

    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/activation.rs"]
mod tests;
