//! Game state owned by the frame-loop driver

use glam::Vec2;

use crate::game::config::GameConfig;
use crate::game::motion::{Bounds, MotionState};

/// Vertical offset of one paddle.
///
/// The offset is not clamped against the arena, and paddles do not interact
/// with the ball.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Paddle {
    /// Distance from the arena centre line
    pub offset: f32,
}

impl Paddle {
    /// Apply one discrete movement step; positive moves up
    pub fn step(&mut self, amount: f32) {
        self.offset += amount;
    }
}

/// Paddle movement keys held during one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

/// All mutable game state.
///
/// Owned by the driver and passed by reference to the update operations;
/// nothing here is process-global.
#[derive(Debug)]
pub struct GameState {
    /// The ball's position and velocity
    pub ball: MotionState,
    /// Left paddle offset
    pub left_paddle: Paddle,
    /// Right paddle offset
    pub right_paddle: Paddle,
    /// Walls the ball bounces off
    pub bounds: Bounds,
    paddle_step: f32,
}

impl GameState {
    /// Create a game state with the ball at the centre
    pub fn new(bounds: Bounds, ball_velocity: Vec2, paddle_step: f32) -> Self {
        Self {
            ball: MotionState::new(Vec2::ZERO, ball_velocity),
            left_paddle: Paddle::default(),
            right_paddle: Paddle::default(),
            bounds,
            paddle_step,
        }
    }

    /// Create a game state from a configuration
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.bounds, config.ball_velocity, config.paddle_step)
    }

    /// Step each paddle once for every movement key held this tick
    pub fn apply_paddle_input(&mut self, input: PaddleInput) {
        if input.left_up {
            self.left_paddle.step(self.paddle_step);
        }
        if input.left_down {
            self.left_paddle.step(-self.paddle_step);
        }
        if input.right_up {
            self.right_paddle.step(self.paddle_step);
        }
        if input.right_down {
            self.right_paddle.step(-self.paddle_step);
        }
    }

    /// Advance the ball and bounce it off the arena walls
    pub fn tick(&mut self, elapsed_seconds: f32) {
        self.ball.advance(elapsed_seconds);
        self.ball.reflect(self.bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> GameState {
        GameState::new(Bounds::default(), Vec2::new(10.0, 10.0), 0.25)
    }

    #[test]
    fn test_paddle_step_up_then_down() {
        let mut state = test_state();
        assert_eq!(state.left_paddle.offset, 0.0);

        state.apply_paddle_input(PaddleInput {
            left_up: true,
            ..Default::default()
        });
        assert_eq!(state.left_paddle.offset, 0.25);

        state.apply_paddle_input(PaddleInput {
            left_down: true,
            ..Default::default()
        });
        assert_eq!(state.left_paddle.offset, 0.0);
    }

    #[test]
    fn test_paddles_are_independent() {
        let mut state = test_state();
        state.apply_paddle_input(PaddleInput {
            left_up: true,
            right_down: true,
            ..Default::default()
        });
        assert_eq!(state.left_paddle.offset, 0.25);
        assert_eq!(state.right_paddle.offset, -0.25);
    }

    #[test]
    fn test_paddle_offset_is_unclamped() {
        let mut state = test_state();
        for _ in 0..100 {
            state.apply_paddle_input(PaddleInput {
                left_up: true,
                ..Default::default()
            });
        }
        assert_eq!(state.left_paddle.offset, 25.0);
    }

    #[test]
    fn test_tick_advances_and_reflects() {
        let mut state = test_state();
        state.tick(1.5);
        assert_eq!(state.ball.position, Vec2::new(10.0, 8.0));
        assert_eq!(state.ball.velocity, Vec2::new(-10.0, -10.0));
    }

    #[test]
    fn test_paddles_never_touch_the_ball() {
        // A paddle parked in the ball's path changes nothing about its motion.
        let mut state = test_state();
        state.left_paddle.offset = 0.0;
        state.right_paddle.offset = 0.0;
        state.tick(0.5);
        assert_eq!(state.ball.position, Vec2::new(5.0, 5.0));
        assert_eq!(state.ball.velocity, Vec2::new(10.0, 10.0));
    }
}
