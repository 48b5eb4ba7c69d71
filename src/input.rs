//! Keyboard state behind the per-tick input snapshot
//!
//! The platform layer feeds raw press/release events into a
//! `KeyboardState`; once per tick the game polls it through `InputSource`
//! and builds a `TickInput`.

use crate::sim::TickInput;

/// Every key the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Left paddle up/down
    W,
    S,
    /// Right paddle up/down
    ArrowUp,
    ArrowDown,
    /// Serve (held)
    Space,
    /// Full reset (edge)
    R,
    /// Fullscreen toggle (edge)
    F,
}

impl Key {
    pub const ALL: [Key; 7] = [
        Key::W,
        Key::S,
        Key::ArrowUp,
        Key::ArrowDown,
        Key::Space,
        Key::R,
        Key::F,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Key state queries the game needs from its host
pub trait InputSource {
    /// Key is currently held down
    fn is_held(&self, key: Key) -> bool;
    /// Key went down since the last tick (not repeats while held)
    fn just_pressed(&self, key: Key) -> bool;
}

impl TickInput {
    /// Snapshot the keys for one tick
    pub fn poll(source: &impl InputSource) -> Self {
        Self {
            left_up: source.is_held(Key::W),
            left_down: source.is_held(Key::S),
            right_up: source.is_held(Key::ArrowUp),
            right_down: source.is_held(Key::ArrowDown),
            serve: source.is_held(Key::Space),
            reset: source.just_pressed(Key::R),
            toggle_fullscreen: source.just_pressed(Key::F),
        }
    }
}

/// Held/edge tracking for the game's keys
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: [bool; Key::ALL.len()],
    pressed: [bool; Key::ALL.len()],
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down. OS auto-repeat while already held is not a new press.
    pub fn press(&mut self, key: Key) {
        let i = key.index();
        if !self.held[i] {
            self.pressed[i] = true;
        }
        self.held[i] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    /// Forget everything held, e.g. when the window loses focus and release
    /// events will never arrive
    pub fn release_all(&mut self) {
        self.held = [false; Key::ALL.len()];
        self.pressed = [false; Key::ALL.len()];
    }

    /// Clear one-shot presses after a tick has consumed them
    pub fn end_tick(&mut self) {
        self.pressed = [false; Key::ALL.len()];
    }
}

impl InputSource for KeyboardState {
    fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    fn just_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }
}
