//! Game logic module
//!
//! Ball motion, wall reflection, paddle state, and configuration.

mod config;
mod motion;
mod state;

pub use config::{ConfigError, GameConfig};
pub use motion::{Bounds, MotionState};
pub use state::{GameState, Paddle, PaddleInput};
