//! Contact records.

use tumble_math::{Frame, Vec3};

/// A contact between two bodies, expressed in a shared contact frame.
///
/// The frame's origin is the witness vertex's world position; its z basis
/// vector is the contact normal, pointing outward from the first body's
/// surface; the x and y basis vectors span the tangent plane. Local
/// impulse components are ordered (tangent x, tangent y, normal z).
#[derive(Debug, Clone)]
pub struct Contact {
    /// The (triangle body, vertex body) pair, in that order.
    pub bodies: (usize, usize),
    /// Contact frame.
    pub frame: Frame,
    /// Penetration depth reported by the overlap witness.
    pub depth: f64,
    /// Accumulated impulse, world frame.
    pub impulse: Vec3,
    /// Accumulated impulse, contact frame.
    pub local_impulse: Vec3,
    /// Effective inverse mass along each contact-frame axis.
    pub meff_inv: Vec3,
    /// Relative velocity at the contact point before solving. Observability
    /// only; the solver never reads it back.
    pub vel_before: Vec3,
    /// Relative velocity at the contact point after solving.
    pub vel_after: Vec3,
}

impl Contact {
    /// Fresh contact with zeroed impulses and velocities.
    pub fn new(bodies: (usize, usize), frame: Frame, depth: f64) -> Self {
        Self {
            bodies,
            frame,
            depth,
            impulse: Vec3::zeros(),
            local_impulse: Vec3::zeros(),
            meff_inv: Vec3::zeros(),
            vel_before: Vec3::zeros(),
            vel_after: Vec3::zeros(),
        }
    }

    /// The contact normal (z basis vector of the contact frame).
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.frame.axis(2)
    }
}
