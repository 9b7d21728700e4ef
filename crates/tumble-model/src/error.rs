//! Error types for scene binding.

use thiserror::Error;

/// Errors reported when binding bodies into a scene.
///
/// Only the binding surface is checked; the stepping hot loop never
/// returns errors.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("body index {id} out of range ({nbodies} bodies)")]
    BodyOutOfRange { id: usize, nbodies: usize },

    #[error("triangle {tri} references vertex {vert}, but only {nverts} positions were given")]
    TriangleOutOfRange {
        tri: usize,
        vert: usize,
        nverts: usize,
    },
}
