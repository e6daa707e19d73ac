//! Game configuration
//!
//! Loaded from a RON file at startup, with source defaults when the file is
//! absent or unreadable.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::game::motion::Bounds;

/// Tunable game parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window title
    pub title: String,
    /// Initial window width
    pub width: u32,
    /// Initial window height
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
    /// Walls the ball bounces off
    pub bounds: Bounds,
    /// Ball velocity at startup, units per second
    pub ball_velocity: Vec2,
    /// Uniform scale applied to the ball model
    pub ball_scale: f32,
    /// Uniform scale applied to the paddle models
    pub paddle_scale: f32,
    /// Horizontal distance of each paddle from the arena centre
    pub paddle_x: f32,
    /// Distance a paddle moves per input step
    pub paddle_step: f32,
    /// Path to the ball model (Wavefront OBJ)
    pub ball_mesh: String,
    /// Path to the paddle model (Wavefront OBJ)
    pub paddle_mesh: String,
    /// Optional diffuse texture applied to both models
    pub texture: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: String::from("Pong"),
            width: 800,
            height: 600,
            vsync: true,
            bounds: Bounds::default(),
            ball_velocity: Vec2::new(10.0, 10.0),
            ball_scale: 0.2,
            paddle_scale: 0.5,
            paddle_x: 10.0,
            paddle_step: 0.25,
            ball_mesh: String::from("res/objects/pong/ball.obj"),
            paddle_mesh: String::from("res/objects/pong/paddle.obj"),
            texture: None,
        }
    }
}

impl GameConfig {
    /// Load a configuration from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        let config: GameConfig =
            ron::from_str(&content).map_err(|e| ConfigError::DeserializeError(e.to_string()))?;
        Ok(config)
    }

    /// Load `path` when it exists, falling back to defaults otherwise.
    ///
    /// A malformed file is logged and ignored rather than aborting startup.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_ron(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config at {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

/// Errors that can occur while loading a configuration
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error
    IoError(String),
    /// Deserialization error
    DeserializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::DeserializeError(e) => write!(f, "Deserialization error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_source_settings() {
        let config = GameConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.bounds, Bounds::new(-10.0, -8.0, 10.0, 8.0));
        assert_eq!(config.ball_velocity, Vec2::new(10.0, 10.0));
        assert_eq!(config.paddle_step, 0.25);
        assert_eq!(config.paddle_x, 10.0);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = GameConfig::default();
        config.title = String::from("Test Arena");
        config.ball_velocity = Vec2::new(4.0, -3.0);

        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        let loaded: GameConfig = ron::from_str(&ron_str).unwrap();
        assert_eq!(loaded.title, "Test Arena");
        assert_eq!(loaded.ball_velocity, Vec2::new(4.0, -3.0));
        assert_eq!(loaded.bounds, config.bounds);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let loaded: GameConfig = ron::from_str("(title: \"Partial\")").unwrap();
        assert_eq!(loaded.title, "Partial");
        assert_eq!(loaded.width, 800);
        assert_eq!(loaded.paddle_step, 0.25);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = GameConfig::load_or_default("does/not/exist.ron");
        assert_eq!(config.title, "Pong");
    }
}
