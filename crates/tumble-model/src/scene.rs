//! The owning simulation container.

use crate::body::Body;
use crate::broad_phase::BroadPhase;
use crate::contact::Contact;
use crate::error::SceneError;
use tumble_math::{Frame, Vec3};

/// A rigid-body scene: the body table, global parameters, the broad-phase
/// binding, and the last step's contact list.
///
/// Parameter defaults: gravity `(0, -9.82, 0)`, linear and angular drag
/// `0.01` per step, `20` solver iterations, vertex-overlap radius `0.25`.
pub struct Scene {
    /// Dense body table; body ids index into it.
    pub bodies: Vec<Body>,

    /// Gravitational acceleration.
    pub gravity: Vec3,
    /// Fraction of linear velocity removed each step.
    pub lin_drag: f64,
    /// Fraction of angular velocity removed each step.
    pub ang_drag: f64,
    /// Impulse-solver iteration count.
    pub iterations: usize,
    /// Maximum vertex-to-triangle distance for overlap witnesses.
    pub overlap_max_radius: f64,

    /// The caller-owned spatial index. Stepping without one integrates
    /// with an empty contact set.
    pub broad_phase: Option<Box<dyn BroadPhase>>,

    /// Contacts from the last step, retained for inspection.
    pub collisions: Vec<Contact>,
}

impl Scene {
    /// Scene with `nbodies` default bodies: density 1, simulated, identity
    /// frame, zero velocities, no geometry.
    pub fn new(nbodies: usize) -> Self {
        Self {
            bodies: vec![Body::default(); nbodies],
            gravity: Vec3::new(0.0, -9.82, 0.0),
            lin_drag: 0.01,
            ang_drag: 0.01,
            iterations: 20,
            overlap_max_radius: 0.25,
            broad_phase: None,
            collisions: Vec::new(),
        }
    }

    /// Bind pose, velocities, density, and geometry for body `id`.
    ///
    /// The body simulates iff `density > 0`. Triangle indices are checked
    /// against the position array; the mesh itself (closedness,
    /// orientation) is taken on faith.
    #[allow(clippy::too_many_arguments)]
    pub fn set_body(
        &mut self,
        id: usize,
        frame: Frame,
        lin_vel: Vec3,
        ang_vel: Vec3,
        density: f64,
        triangles: Vec<[usize; 3]>,
        positions: Vec<Vec3>,
    ) -> Result<(), SceneError> {
        if id >= self.bodies.len() {
            return Err(SceneError::BodyOutOfRange {
                id,
                nbodies: self.bodies.len(),
            });
        }
        for (tri, t) in triangles.iter().enumerate() {
            if let Some(&vert) = t.iter().find(|&&v| v >= positions.len()) {
                return Err(SceneError::TriangleOutOfRange {
                    tri,
                    vert,
                    nverts: positions.len(),
                });
            }
        }

        let body = &mut self.bodies[id];
        body.frame = frame;
        body.lin_vel = lin_vel;
        body.ang_vel = ang_vel;
        body.density = density;
        body.simulated = density > 0.0;
        body.triangles = triangles;
        body.positions = positions;
        Ok(())
    }

    /// The frame of body `id`.
    #[inline]
    pub fn body_frame(&self, id: usize) -> Frame {
        self.bodies[id].frame
    }

    /// Overwrite the frame of body `id`.
    #[inline]
    pub fn set_body_frame(&mut self, id: usize, frame: Frame) {
        self.bodies[id].frame = frame;
    }

    /// Linear and angular velocity of body `id`.
    #[inline]
    pub fn body_velocity(&self, id: usize) -> (Vec3, Vec3) {
        let body = &self.bodies[id];
        (body.lin_vel, body.ang_vel)
    }

    /// Overwrite the velocities of body `id`.
    #[inline]
    pub fn set_body_velocity(&mut self, id: usize, lin_vel: Vec3, ang_vel: Vec3) {
        let body = &mut self.bodies[id];
        body.lin_vel = lin_vel;
        body.ang_vel = ang_vel;
    }

    /// Bind the caller-owned spatial index.
    pub fn set_broad_phase(&mut self, broad_phase: Box<dyn BroadPhase>) {
        self.broad_phase = Some(broad_phase);
    }
}
