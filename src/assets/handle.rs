//! Asset handle implementation
//!
//! Provides opaque, cheaply clonable handles for referencing shared assets.

use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique asset IDs
static NEXT_ASSET_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a new unique asset ID
fn next_id() -> u64 {
    NEXT_ASSET_ID.fetch_add(1, Ordering::Relaxed)
}

/// A handle to an asset of type `T`.
///
/// Assets are kept alive as long as at least one handle exists. Handles to
/// the same asset compare equal.
#[derive(Debug)]
pub struct AssetHandle<T> {
    /// Unique identifier for this asset
    id: u64,
    /// Reference-counted pointer to the asset
    inner: Arc<T>,
}

impl<T> AssetHandle<T> {
    /// Create a new asset handle wrapping the given value
    pub fn new(value: T) -> Self {
        Self {
            id: next_id(),
            inner: Arc::new(value),
        }
    }

    /// Get the unique ID of this asset
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Get a reference to the underlying asset
    pub fn get(&self) -> &T {
        &self.inner
    }
}

impl<T> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for AssetHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for AssetHandle<T> {}

impl<T> Hash for AssetHandle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> std::ops::Deref for AssetHandle<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_creation() {
        let handle = AssetHandle::new(42_i32);
        assert_eq!(*handle.get(), 42);
    }

    #[test]
    fn test_handle_clone_shares_identity() {
        let handle1 = AssetHandle::new("mesh".to_string());
        let handle2 = handle1.clone();
        assert_eq!(handle1.id(), handle2.id());
        assert_eq!(handle1, handle2);
    }

    #[test]
    fn test_distinct_assets_have_distinct_ids() {
        let handle1 = AssetHandle::new(1_u32);
        let handle2 = AssetHandle::new(1_u32);
        assert_ne!(handle1.id(), handle2.id());
        assert_ne!(handle1, handle2);
    }
}
