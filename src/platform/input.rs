//! Keyboard state shared between the host's event handlers and the simulation

use serde::{Deserialize, Serialize};

/// Game-relevant keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Fin slap
    Space,
    /// Bubble attack
    D,
}

impl Key {
    /// Map a host key code (DOM `KeyboardEvent.code` or key name)
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "Space" | " " => Some(Key::Space),
            "KeyD" | "d" | "D" => Some(Key::D),
            _ => None,
        }
    }
}

/// Held state of every game key. The simulation never writes to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub space: bool,
    pub d: bool,
}

impl Keyboard {
    pub fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Left => self.left = pressed,
            Key::Right => self.right = pressed,
            Key::Up => self.up = pressed,
            Key::Down => self.down = pressed,
            Key::Space => self.space = pressed,
            Key::D => self.d = pressed,
        }
    }

    /// Apply a host key event; unknown codes are ignored.
    /// Returns whether the code mapped to a game key.
    pub fn handle_code(&mut self, code: &str, pressed: bool) -> bool {
        match Key::from_code(code) {
            Some(key) => {
                self.set(key, pressed);
                true
            }
            None => false,
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Up => self.up,
            Key::Down => self.down,
            Key::Space => self.space,
            Key::D => self.d,
        }
    }

    /// Any arrow key held
    pub fn is_moving(&self) -> bool {
        self.left || self.right || self.up || self.down
    }

    pub fn reset(&mut self) {
        *self = Keyboard::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mapping() {
        let mut keyboard = Keyboard::default();
        assert!(keyboard.handle_code("ArrowRight", true));
        assert!(keyboard.handle_code("Space", true));
        assert!(keyboard.handle_code("KeyD", true));
        assert!(!keyboard.handle_code("KeyQ", true));
        assert!(keyboard.right && keyboard.space && keyboard.d);
        assert!(keyboard.is_moving());

        keyboard.handle_code("ArrowRight", false);
        assert!(!keyboard.is_pressed(Key::Right));
        assert!(!keyboard.is_moving());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut keyboard = Keyboard::default();
        for key in [Key::Left, Key::Right, Key::Up, Key::Down, Key::Space, Key::D] {
            keyboard.set(key, true);
        }
        keyboard.reset();
        assert_eq!(keyboard, Keyboard::default());
    }
}
