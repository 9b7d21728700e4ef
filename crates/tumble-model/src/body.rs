//! Rigid bodies.

use tumble_math::{Frame, Mat3, Vec3};

/// A rigid body: pose, velocities, density, and an owned triangle mesh.
///
/// The fields below the geometry are caches owned by the simulator:
/// `init_simulation` fills the local ones once, `advance_simulation`
/// refreshes the world ones every step. Mutating them by hand between
/// steps has no lasting effect.
#[derive(Debug, Clone)]
pub struct Body {
    /// Rigid transform from body space to world space.
    pub frame: Frame,
    /// Linear velocity (world frame).
    pub lin_vel: Vec3,
    /// Angular velocity (world frame).
    pub ang_vel: Vec3,
    /// Density; zero marks the body as static.
    pub density: f64,
    /// Whether the body participates in dynamics (`density > 0`).
    pub simulated: bool,

    /// Triangle vertex-index triples.
    pub triangles: Vec<[usize; 3]>,
    /// Vertex positions in body space.
    pub positions: Vec<Vec3>,

    /// Mass (density times mesh volume).
    pub mass: f64,
    /// Inverse mass; zero for static bodies.
    pub mass_inv: f64,
    /// Centroid in body space.
    pub centroid_local: Vec3,
    /// Centroid in world space.
    pub centroid_world: Vec3,
    /// Inertia tensor about the centroid, body space.
    pub inertia_local: Mat3,
    /// Inverse of `inertia_local`.
    pub inertia_inv_local: Mat3,
    /// Inverse inertia tensor in world space; zero for static bodies.
    pub inertia_inv_world: Mat3,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            frame: Frame::identity(),
            lin_vel: Vec3::zeros(),
            ang_vel: Vec3::zeros(),
            density: 1.0,
            simulated: true,
            triangles: Vec::new(),
            positions: Vec::new(),
            mass: 1.0,
            mass_inv: 1.0,
            centroid_local: Vec3::zeros(),
            centroid_world: Vec3::zeros(),
            inertia_local: Mat3::identity(),
            inertia_inv_local: Mat3::identity(),
            inertia_inv_world: Mat3::identity(),
        }
    }
}

impl Body {
    /// Whether the body carries collision geometry.
    #[inline]
    pub fn has_triangles(&self) -> bool {
        !self.triangles.is_empty()
    }
}
