//! Mesh loading and caching
//!
//! Loads OBJ meshes, uploads them to the GPU, and hands out shared handles
//! with path-based deduplication.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::assets::handle::AssetHandle;
use crate::assets::obj::{self, ObjError};
use crate::renderer::{Mesh, Renderer};

/// Centralized storage for loaded meshes
#[derive(Default)]
pub struct MeshStore {
    /// Path to handle mapping for deduplication
    meshes: HashMap<PathBuf, AssetHandle<Mesh>>,
}

impl MeshStore {
    /// Create an empty mesh store
    pub fn new() -> Self {
        Self {
            meshes: HashMap::new(),
        }
    }

    /// Load an OBJ mesh and upload it to the GPU.
    ///
    /// Loading the same path again returns the existing handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(
        &mut self,
        renderer: &Renderer,
        path: impl AsRef<Path>,
    ) -> Result<AssetHandle<Mesh>, ObjError> {
        let path = path.as_ref();
        if let Some(handle) = self.meshes.get(path) {
            return Ok(handle.clone());
        }

        let mut mesh = obj::load_obj(path)?;
        renderer.upload_mesh(&mut mesh);
        log::info!(
            "Loaded {} ({} vertices, {} indices)",
            path.display(),
            mesh.vertices.len(),
            mesh.indices.len()
        );

        let handle = AssetHandle::new(mesh);
        self.meshes.insert(path.to_path_buf(), handle.clone());
        Ok(handle)
    }

    /// Upload an already-built mesh and wrap it in a handle.
    ///
    /// Used for the built-in primitives that stand in for models that
    /// failed to load; these are not path-keyed.
    pub fn insert(&mut self, renderer: &Renderer, mut mesh: Mesh) -> AssetHandle<Mesh> {
        renderer.upload_mesh(&mut mesh);
        AssetHandle::new(mesh)
    }

    /// Get a previously loaded mesh by path
    pub fn get(&self, path: impl AsRef<Path>) -> Option<AssetHandle<Mesh>> {
        self.meshes.get(path.as_ref()).cloned()
    }

    /// Get the number of path-keyed meshes
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}
