//! A 3D Pong game built in Rust
//!
//! This crate provides:
//! - 3D rendering with wgpu
//! - A winit-driven frame loop with a `Game` trait
//! - Ball motion and wall reflection
//! - Input handling with rebindable actions
//! - Wavefront OBJ model loading

pub mod assets;
pub mod core;
pub mod game;
pub mod input;
pub mod renderer;

// Re-exports for convenience
pub use glam;
pub use wgpu;
pub use winit;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::assets::{AssetHandle, MeshStore, ObjError};
    pub use crate::core::{Engine, EngineConfig, EngineContext, EngineError, FrameStats, Game, Time};
    pub use crate::game::{Bounds, GameConfig, GameState, MotionState, Paddle, PaddleInput};
    pub use crate::input::{Action, Input, InputMapper};
    pub use crate::renderer::{Camera, Light, Material, Mesh, RenderFrame, Renderer, Texture, Vertex};
    pub use glam::{Mat4, Vec2, Vec3};
    pub use winit::keyboard::KeyCode;
}
