//! Pure state pieces for the TUI (functional core)
//!
//! No I/O here. Everything takes values and returns values, so the edit
//! state machine, notice expiry, and selection math are testable without
//! a terminal.

use std::time::{Duration, Instant};

// =============================================================================
// Edit state machine
// =============================================================================

/// What the input bar commits to on submit.
///
/// The primary action is determined by this state, not by rebinding
/// callbacks: `Idle` submits an add, `Editing` submits an update for the
/// captured item id. Starting a new edit while one is pending simply
/// replaces the state (last-initiated edit wins).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing {
        id: String,
    },
}

impl EditState {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }
}

// =============================================================================
// Transient notices
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short-lived message in the shared notice region.
///
/// Each notice carries its own expiry deadline. Replacing a notice
/// replaces the deadline too, so a fresh notice always gets its full
/// lifetime - there is no detached hide timer to fire early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    expires_at: Instant,
}

impl Notice {
    pub fn new(text: String, kind: NoticeKind, now: Instant, ttl: Duration) -> Self {
        Self {
            text,
            kind,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

// =============================================================================
// Selection math
// =============================================================================

/// Calculate new selected index after moving up
pub fn move_selection_up(current: usize) -> usize {
    current.saturating_sub(1)
}

/// Calculate new selected index after moving down
pub fn move_selection_down(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1).min(len - 1)
    }
}

/// Clamp selection index to valid range
pub fn clamp_selection(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        selected.min(len - 1)
    }
}

// =============================================================================
// Tests
// =============================================================================
