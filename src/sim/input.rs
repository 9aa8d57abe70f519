//! Keyboard and pointer input mapping
//!
//! Pure translation from raw key state into per-side intents. Nothing here
//! touches the match state.

use std::collections::HashSet;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::Side;

/// Keys the game distinguishes. Anything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    LCtrl,
    RCtrl,
    Space,
    Enter,
    Escape,
    Other(u32),
}

/// Raw events delivered by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window close request
    Quit,
    KeyDown(Key),
    /// Pointer press at screen coordinates
    MouseDown(IVec2),
}

/// Snapshot of currently held keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    held: HashSet<Key>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}

/// Per-side key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
    pub fire: Key,
}

impl Bindings {
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => Self {
                up: Key::W,
                down: Key::S,
                left: Key::A,
                right: Key::D,
                fire: Key::LCtrl,
            },
            Side::Right => Self {
                up: Key::Up,
                down: Key::Down,
                left: Key::Left,
                right: Key::Right,
                fire: Key::RCtrl,
            },
        }
    }
}

/// Directions a ship wants to move this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

/// Movement intent for `side` from the held-key snapshot
pub fn move_intent(keys: &KeySet, side: Side) -> MoveIntent {
    let b = Bindings::for_side(side);
    MoveIntent {
        up: keys.is_held(b.up),
        down: keys.is_held(b.down),
        left: keys.is_held(b.left),
        right: keys.is_held(b.right),
    }
}

/// Whether this event is a fresh press of `side`'s fire key.
///
/// Only key-down events count, so holding the key fires once.
pub fn is_fire_press(event: &InputEvent, side: Side) -> bool {
    matches!(event, InputEvent::KeyDown(key) if *key == Bindings::for_side(side).fire)
}

/// Number of fire presses for `side` in this batch of events.
///
/// Each press is a separate shot, so a slow tick that drains two presses
/// fires twice (still subject to the cap).
pub fn fire_presses(events: &[InputEvent], side: Side) -> u8 {
    let count = events.iter().filter(|e| is_fire_press(e, side)).count();
    u8::try_from(count).unwrap_or(u8::MAX)
}
