//! Ball motion and wall reflection

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle the ball must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower-left corner
    pub min: Vec2,
    /// Upper-right corner
    pub max: Vec2,
}

impl Bounds {
    /// Create bounds from the four wall coordinates
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    /// Check if a point is inside or on the bounds
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Arena width
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Arena height
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(-10.0, -8.0, 10.0, 8.0)
    }
}

/// Position and velocity of a moving entity, advanced once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Position in arena space
    pub position: Vec2,
    /// Velocity in units per second
    pub velocity: Vec2,
}

impl MotionState {
    /// Create a motion state with the given position and velocity
    pub const fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Integrate position by `velocity * elapsed_seconds`.
    ///
    /// A zero elapsed time leaves the state untouched.
    pub fn advance(&mut self, elapsed_seconds: f32) {
        self.position += self.velocity * elapsed_seconds;
    }

    /// Bounce off any crossed wall.
    ///
    /// Each axis is handled independently: a position past a wall is clamped
    /// to that wall and the velocity component on that axis is negated. Only
    /// the nearest violated wall per axis is considered; there is no swept
    /// collision against the opposite wall within the same tick.
    pub fn reflect(&mut self, bounds: Bounds) {
        if self.position.x > bounds.max.x {
            self.position.x = bounds.max.x;
            self.velocity.x = -self.velocity.x;
        }
        if self.position.x < bounds.min.x {
            self.position.x = bounds.min.x;
            self.velocity.x = -self.velocity.x;
        }

        if self.position.y > bounds.max.y {
            self.position.y = bounds.max.y;
            self.velocity.y = -self.velocity.y;
        }
        if self.position.y < bounds.min.y {
            self.position.y = bounds.min.y;
            self.velocity.y = -self.velocity.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_integrates_velocity() {
        let mut state = MotionState::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        state.advance(1.5);
        assert_eq!(state.position, Vec2::new(15.0, 15.0));
        assert_eq!(state.velocity, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_zero_elapsed_is_noop() {
        let mut state = MotionState::new(Vec2::new(3.0, -2.0), Vec2::new(-4.0, 7.0));
        let before = state;
        state.advance(0.0);
        assert_eq!(state, before);
    }

    #[test]
    fn test_reflect_clamps_and_negates() {
        // The concrete bounce scenario: a diagonal overshoot past both the
        // right and top walls.
        let mut state = MotionState::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        state.advance(1.5);
        state.reflect(Bounds::new(-10.0, -8.0, 10.0, 8.0));
        assert_eq!(state.position, Vec2::new(10.0, 8.0));
        assert_eq!(state.velocity, Vec2::new(-10.0, -10.0));
    }

    #[test]
    fn test_boundary_exactness() {
        let epsilon = 1e-4;
        let mut state = MotionState::new(Vec2::new(10.0 + epsilon, 0.0), Vec2::new(5.0, 0.0));
        state.reflect(Bounds::default());
        assert_eq!(state.position.x, 10.0);
        assert_eq!(state.velocity.x, -5.0);
    }

    #[test]
    fn test_reflect_preserves_speed_magnitude() {
        let bounds = Bounds::default();
        let mut state = MotionState::new(Vec2::new(12.0, -9.5), Vec2::new(3.0, -4.0));
        state.reflect(bounds);
        assert_eq!(state.velocity.x.abs(), 3.0);
        assert_eq!(state.velocity.y.abs(), 4.0);
        assert_eq!(state.velocity.x.signum(), -1.0);
        assert_eq!(state.velocity.y.signum(), 1.0);
    }

    #[test]
    fn test_small_steps_stay_inside_bounds() {
        let bounds = Bounds::default();
        let mut state = MotionState::new(Vec2::new(9.9, -7.9), Vec2::new(10.0, -10.0));
        for _ in 0..1000 {
            state.advance(0.016);
            state.reflect(bounds);
            assert!(bounds.contains(state.position));
        }
    }

    #[test]
    fn test_interior_position_untouched() {
        let mut state = MotionState::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0));
        let before = state;
        state.reflect(Bounds::default());
        assert_eq!(state, before);
    }

    #[test]
    fn test_overshoot_clamps_to_nearest_wall_only() {
        // An extreme tick that crosses the right wall far enough to pass the
        // left wall too still clamps to the right wall. No swept collision.
        let bounds = Bounds::default();
        let mut state = MotionState::new(Vec2::ZERO, Vec2::new(100.0, 0.0));
        state.advance(1.0);
        assert_eq!(state.position.x, 100.0);
        state.reflect(bounds);
        assert_eq!(state.position.x, 10.0);
        assert_eq!(state.velocity.x, -100.0);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new(0.0, 0.0, 4.0, 2.0);
        assert!(bounds.contains(Vec2::new(2.0, 1.0)));
        assert!(bounds.contains(Vec2::new(0.0, 0.0)));
        assert!(bounds.contains(Vec2::new(4.0, 2.0)));
        assert!(!bounds.contains(Vec2::new(4.1, 1.0)));
        assert!(!bounds.contains(Vec2::new(2.0, -0.1)));
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 2.0);
    }
}
