//! Rendering module
//!
//! 3D rendering with wgpu: a single lit forward pipeline, a free-fly
//! camera, and mesh/material/texture resources.

mod camera;
mod context;
mod material;
mod mesh;
mod texture;

pub use camera::Camera;
pub use context::{Light, ModelUniform, RenderFrame, Renderer, RendererError};
pub use material::{Material, MaterialUniform};
pub use mesh::{Mesh, Vertex};
pub use texture::{Texture, TextureError};
