//! Raw input state fed by winit events

use glam::Vec2;
use std::collections::HashSet;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Keyboard and mouse state for the current tick
#[derive(Debug)]
pub struct Input {
    /// Currently pressed keys
    pressed_keys: HashSet<KeyCode>,
    /// Keys that were just pressed this frame
    just_pressed_keys: HashSet<KeyCode>,
    /// Keys that were just released this frame
    just_released_keys: HashSet<KeyCode>,
    /// Current cursor position
    mouse_position: Vec2,
    /// Cursor movement accumulated this frame
    mouse_delta: Vec2,
    /// Scroll wheel delta accumulated this frame
    scroll_delta: Vec2,
    /// No cursor event seen yet; the first one carries no usable delta
    first_mouse: bool,
}

impl Input {
    /// Create a new input manager
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            just_pressed_keys: HashSet::new(),
            just_released_keys: HashSet::new(),
            mouse_position: Vec2::ZERO,
            mouse_delta: Vec2::ZERO,
            scroll_delta: Vec2::ZERO,
            first_mouse: true,
        }
    }

    /// Call at the end of each frame to clear per-frame state
    pub fn update(&mut self) {
        self.just_pressed_keys.clear();
        self.just_released_keys.clear();
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
    }

    /// Process a keyboard event
    pub fn process_keyboard(&mut self, key_code: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.pressed_keys.contains(&key_code) {
                    self.just_pressed_keys.insert(key_code);
                }
                self.pressed_keys.insert(key_code);
            }
            ElementState::Released => {
                self.pressed_keys.remove(&key_code);
                self.just_released_keys.insert(key_code);
            }
        }
    }

    /// Process cursor movement
    pub fn process_mouse_motion(&mut self, position: Vec2) {
        if self.first_mouse {
            self.mouse_position = position;
            self.first_mouse = false;
            return;
        }
        self.mouse_delta += position - self.mouse_position;
        self.mouse_position = position;
    }

    /// Process scroll wheel
    pub fn process_scroll(&mut self, delta: Vec2) {
        self.scroll_delta += delta;
    }

    /// Check if a key is currently pressed
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Check if a key was just pressed this frame
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed_keys.contains(&key)
    }

    /// Check if a key was just released this frame
    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        self.just_released_keys.contains(&key)
    }

    /// Get current cursor position
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Get cursor movement accumulated this frame
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Get scroll wheel delta accumulated this frame
    pub fn scroll_delta(&self) -> Vec2 {
        self.scroll_delta
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_press_and_release() {
        let mut input = Input::new();

        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        assert!(input.is_key_pressed(KeyCode::KeyW));
        assert!(input.is_key_just_pressed(KeyCode::KeyW));

        // Holding across a frame boundary is no longer "just pressed"
        input.update();
        assert!(input.is_key_pressed(KeyCode::KeyW));
        assert!(!input.is_key_just_pressed(KeyCode::KeyW));

        input.process_keyboard(KeyCode::KeyW, ElementState::Released);
        assert!(!input.is_key_pressed(KeyCode::KeyW));
        assert!(input.is_key_just_released(KeyCode::KeyW));
    }

    #[test]
    fn test_repeat_press_is_not_just_pressed_again() {
        let mut input = Input::new();
        input.process_keyboard(KeyCode::KeyS, ElementState::Pressed);
        input.update();
        input.process_keyboard(KeyCode::KeyS, ElementState::Pressed);
        assert!(!input.is_key_just_pressed(KeyCode::KeyS));
    }

    #[test]
    fn test_first_mouse_motion_has_no_delta() {
        let mut input = Input::new();
        input.process_mouse_motion(Vec2::new(400.0, 300.0));
        assert_eq!(input.mouse_delta(), Vec2::ZERO);

        input.process_mouse_motion(Vec2::new(410.0, 295.0));
        assert_eq!(input.mouse_delta(), Vec2::new(10.0, -5.0));
        assert_eq!(input.mouse_position(), Vec2::new(410.0, 295.0));
    }

    #[test]
    fn test_mouse_delta_accumulates_within_frame() {
        let mut input = Input::new();
        input.process_mouse_motion(Vec2::ZERO);
        input.process_mouse_motion(Vec2::new(3.0, 0.0));
        input.process_mouse_motion(Vec2::new(5.0, 2.0));
        assert_eq!(input.mouse_delta(), Vec2::new(5.0, 2.0));

        input.update();
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn test_scroll_accumulates_and_clears() {
        let mut input = Input::new();
        input.process_scroll(Vec2::new(0.0, 1.0));
        input.process_scroll(Vec2::new(0.0, 2.0));
        assert_eq!(input.scroll_delta(), Vec2::new(0.0, 3.0));

        input.update();
        assert_eq!(input.scroll_delta(), Vec2::ZERO);
    }
}
