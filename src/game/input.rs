//! Input Tracking
//!
//! Keeps the set of currently-held keys from key-down/key-up events.
//! Movement keys are level-triggered (polled every tick); action keys are
//! edge-triggered (recognized once, at the up-to-down transition).

use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

use crate::game::avatar::Direction;

/// Outcome of feeding a key-down event to the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPress {
    /// Fresh up-to-down transition. Action keys fire on this.
    Pressed,
    /// The key was already down (OS auto-repeat). No effect.
    Held,
}

/// Edge-triggered action keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKey {
    /// `e` or space: interact with the nearby board
    Interact,
    /// `Escape`: close the topmost overlay
    Close,
    /// `l`: toggle the leaderboard
    Leaderboard,
}

impl ActionKey {
    /// Map a normalized key id to an action key, if it is one.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "e" | " " => Some(ActionKey::Interact),
            "escape" => Some(ActionKey::Close),
            "l" => Some(ActionKey::Leaderboard),
            _ => None,
        }
    }
}

/// Level-triggered snapshot of the four movement directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementKeys {
    /// `w` or ArrowUp held
    pub up: bool,
    /// `s` or ArrowDown held
    pub down: bool,
    /// `a` or ArrowLeft held
    pub left: bool,
    /// `d` or ArrowRight held
    pub right: bool,
}

impl MovementKeys {
    /// True if any movement key is held.
    #[inline]
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Facing direction for sprite selection.
    ///
    /// Precedence up > down > left > right, facing down when idle.
    pub fn direction(&self) -> Direction {
        if self.up {
            Direction::Up
        } else if self.down {
            Direction::Down
        } else if self.left {
            Direction::Left
        } else if self.right {
            Direction::Right
        } else {
            Direction::Down
        }
    }
}

/// Held-key state machine.
///
/// Keys are stored under their normalized (lower-cased) identifiers. Entries
/// are never removed; a released key simply maps to false.
#[derive(Clone, Debug, Default)]
pub struct InputTracker {
    keys: BTreeMap<String, bool>,
}

impl InputTracker {
    /// Create an empty tracker (nothing held).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down event.
    ///
    /// Returns whether this was a fresh press or an auto-repeat. Repeated
    /// key-down events for an already-held key are idempotent.
    pub fn key_down(&mut self, key: &str) -> KeyPress {
        let id = normalize_key(key);
        match self.keys.insert(id, true) {
            Some(true) => KeyPress::Held,
            _ => KeyPress::Pressed,
        }
    }

    /// Record a key-up event.
    pub fn key_up(&mut self, key: &str) {
        let id = normalize_key(key);
        self.keys.insert(id, false);
    }

    /// Is this key currently held?
    pub fn is_held(&self, key: &str) -> bool {
        self.keys.get(&normalize_key(key)).copied().unwrap_or(false)
    }

    /// Snapshot the movement keys for one tick.
    pub fn movement(&self) -> MovementKeys {
        MovementKeys {
            up: self.is_held("w") || self.is_held("arrowup"),
            down: self.is_held("s") || self.is_held("arrowdown"),
            left: self.is_held("a") || self.is_held("arrowleft"),
            right: self.is_held("d") || self.is_held("arrowright"),
        }
    }

    /// Release every key (session reset).
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// Lower-case a raw key identifier.
#[inline]
fn normalize_key(key: &str) -> String {
    key.to_ascii_lowercase()
}
