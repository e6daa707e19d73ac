//! Mapping physical keys to logical game actions
//!
//! Physical keys map to logical actions rather than directly to behavior,
//! so controls can be rebound at runtime.

use rustc_hash::FxHashMap;
use winit::keyboard::KeyCode;

use crate::input::Input;

/// Logical actions the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the left paddle up
    LeftPaddleUp,
    /// Move the left paddle down
    LeftPaddleDown,
    /// Move the right paddle up
    RightPaddleUp,
    /// Move the right paddle down
    RightPaddleDown,
    /// Fly the camera forward
    CameraForward,
    /// Fly the camera backward
    CameraBackward,
    /// Close the game
    Quit,
}

/// Maps physical keys to logical actions
#[derive(Debug, Clone)]
pub struct InputMapper {
    /// Key to action bindings
    bindings: FxHashMap<KeyCode, Action>,
}

impl InputMapper {
    /// Create an empty input mapper
    pub fn new() -> Self {
        Self {
            bindings: FxHashMap::default(),
        }
    }

    /// Create a mapper with the default bindings: W/S and Up/Down drive the
    /// paddles, D/A flies the camera, Escape quits.
    pub fn with_defaults() -> Self {
        let mut mapper = Self::new();
        mapper.bind(KeyCode::KeyW, Action::LeftPaddleUp);
        mapper.bind(KeyCode::KeyS, Action::LeftPaddleDown);
        mapper.bind(KeyCode::ArrowUp, Action::RightPaddleUp);
        mapper.bind(KeyCode::ArrowDown, Action::RightPaddleDown);
        mapper.bind(KeyCode::KeyD, Action::CameraForward);
        mapper.bind(KeyCode::KeyA, Action::CameraBackward);
        mapper.bind(KeyCode::Escape, Action::Quit);
        mapper
    }

    /// Bind a key to an action, replacing any previous binding for the key
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.bindings.insert(key, action);
    }

    /// Remove a key binding, returning the action it was bound to
    pub fn unbind(&mut self, key: KeyCode) -> Option<Action> {
        self.bindings.remove(&key)
    }

    /// Look up the action bound to a key
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Keys currently bound to an action
    pub fn keys_for(&self, action: Action) -> Vec<KeyCode> {
        self.bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect()
    }

    /// Check if any key bound to `action` is currently held
    pub fn is_pressed(&self, input: &Input, action: Action) -> bool {
        self.bindings
            .iter()
            .any(|(key, a)| *a == action && input.is_key_pressed(*key))
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::ElementState;

    #[test]
    fn test_default_bindings() {
        let mapper = InputMapper::with_defaults();
        assert_eq!(mapper.action_for(KeyCode::KeyW), Some(Action::LeftPaddleUp));
        assert_eq!(
            mapper.action_for(KeyCode::ArrowDown),
            Some(Action::RightPaddleDown)
        );
        assert_eq!(mapper.action_for(KeyCode::KeyD), Some(Action::CameraForward));
        assert_eq!(mapper.action_for(KeyCode::Escape), Some(Action::Quit));
        assert_eq!(mapper.action_for(KeyCode::Space), None);
    }

    #[test]
    fn test_rebinding_replaces() {
        let mut mapper = InputMapper::with_defaults();
        mapper.bind(KeyCode::KeyW, Action::Quit);
        assert_eq!(mapper.action_for(KeyCode::KeyW), Some(Action::Quit));
        assert!(mapper.keys_for(Action::LeftPaddleUp).is_empty());
    }

    #[test]
    fn test_unbind() {
        let mut mapper = InputMapper::with_defaults();
        assert_eq!(mapper.unbind(KeyCode::KeyA), Some(Action::CameraBackward));
        assert_eq!(mapper.action_for(KeyCode::KeyA), None);
        assert_eq!(mapper.unbind(KeyCode::KeyA), None);
    }

    #[test]
    fn test_is_pressed_through_bindings() {
        let mapper = InputMapper::with_defaults();
        let mut input = Input::new();
        assert!(!mapper.is_pressed(&input, Action::LeftPaddleUp));

        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        assert!(mapper.is_pressed(&input, Action::LeftPaddleUp));
        assert!(!mapper.is_pressed(&input, Action::LeftPaddleDown));
    }

    #[test]
    fn test_multiple_keys_for_one_action() {
        let mut mapper = InputMapper::with_defaults();
        mapper.bind(KeyCode::KeyI, Action::RightPaddleUp);

        let mut keys = mapper.keys_for(Action::RightPaddleUp);
        keys.sort_by_key(|k| format!("{k:?}"));
        assert_eq!(keys.len(), 2);

        let mut input = Input::new();
        input.process_keyboard(KeyCode::KeyI, ElementState::Pressed);
        assert!(mapper.is_pressed(&input, Action::RightPaddleUp));
    }
}
