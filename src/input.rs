//! Keyboard state shared between the DOM listeners and the tick.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
    Fire,
}

impl Key {
    /// Map a `KeyboardEvent.key` value. Anything else is not a game key.
    pub fn from_dom(key: &str) -> Option<Key> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Jump),
            " " => Some(Key::Fire),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Key::Left => 1,
            Key::Right => 1 << 1,
            Key::Jump => 1 << 2,
            Key::Fire => 1 << 3,
        }
    }
}

/// Set of currently held keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys(u8);

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for tests and replays.
    pub fn with(keys: &[Key]) -> Self {
        let mut held = Self::new();
        for &k in keys {
            held.press(k);
        }
        held
    }

    pub fn press(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(Key::from_dom("ArrowDown"), None);
        assert_eq!(Key::from_dom("a"), None);
        assert_eq!(Key::from_dom(""), None);
        assert_eq!(Key::from_dom(" "), Some(Key::Fire));
    }

    #[test]
    fn press_and_release() {
        let mut held = HeldKeys::new();
        held.press(Key::Left);
        held.press(Key::Jump);
        assert!(held.is_held(Key::Left));
        assert!(held.is_held(Key::Jump));
        assert!(!held.is_held(Key::Right));
        held.release(Key::Left);
        assert!(!held.is_held(Key::Left));
        assert!(held.is_held(Key::Jump));
        held.clear();
        assert_eq!(held, HeldKeys::new());
    }
}
