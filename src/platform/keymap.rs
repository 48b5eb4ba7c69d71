//! Physical key codes to game keys
//!
//! Physical codes keep WASD-style bindings in place on non-QWERTY layouts.

use winit::keyboard::KeyCode;

use crate::input::Key;

pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::ArrowUp => Some(Key::ArrowUp),
        KeyCode::ArrowDown => Some(Key::ArrowDown),
        KeyCode::Space => Some(Key::Space),
        KeyCode::KeyR => Some(Key::R),
        KeyCode::KeyF => Some(Key::F),
        _ => None,
    }
}
