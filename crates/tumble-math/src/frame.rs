//! Rigid frames: an orthonormal rotation plus a translation.

use crate::{Mat3, Vec3};

/// A rigid transform in world space.
///
/// The rotation columns are the frame's basis vectors; `pos` is its origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Orthonormal rotation.
    pub rot: Mat3,
    /// Translation.
    pub pos: Vec3,
}

impl Frame {
    /// Identity frame at the origin.
    #[inline]
    pub fn identity() -> Self {
        Self {
            rot: Mat3::identity(),
            pos: Vec3::zeros(),
        }
    }

    /// Frame from rotation and translation.
    #[inline]
    pub fn new(rot: Mat3, pos: Vec3) -> Self {
        Self { rot, pos }
    }

    /// Frame at `pos` translated only.
    #[inline]
    pub fn from_translation(pos: Vec3) -> Self {
        Self {
            rot: Mat3::identity(),
            pos,
        }
    }

    /// Frame at `pos` whose z basis vector is `z` (need not be unit length).
    ///
    /// The two tangent basis vectors are chosen by a deterministic
    /// orthonormal completion.
    pub fn from_z(pos: Vec3, z: Vec3) -> Self {
        let z = z.normalize();
        let up = if z.y.abs() < 0.9 { Vec3::y() } else { Vec3::x() };
        let x = up.cross(&z).normalize();
        let y = z.cross(&x);
        Self {
            rot: Mat3::from_columns(&[x, y, z]),
            pos,
        }
    }

    /// The k-th basis vector (column of the rotation).
    #[inline]
    pub fn axis(&self, k: usize) -> Vec3 {
        self.rot.column(k).into_owned()
    }

    /// Transform a point from this frame to world space.
    #[inline]
    pub fn transform_point(&self, p: &Vec3) -> Vec3 {
        self.rot * p + self.pos
    }

    /// Transform a direction from this frame to world space.
    #[inline]
    pub fn transform_dir(&self, d: &Vec3) -> Vec3 {
        self.rot * d
    }

    /// Restore orthonormality of the rotation by modified Gram-Schmidt.
    ///
    /// Repeated axis-angle composition lets the columns drift; this snaps
    /// them back to an orthonormal right-handed basis.
    pub fn orthonormalize(&mut self) {
        let x = self.axis(0).normalize();
        let mut y = self.axis(1);
        y = (y - x * x.dot(&y)).normalize();
        let z = x.cross(&y);
        self.rot = Mat3::from_columns(&[x, y, z]);
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::identity()
    }
}
