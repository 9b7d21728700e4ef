//! Math primitives for the tumble rigid-body engine.
//!
//! Thin aliases over nalgebra plus the small set of geometric helpers the
//! simulator needs: rigid frames, axis-angle rotations, triangle normals,
//! barycentric interpolation, and signed tetrahedron volumes.

mod frame;

pub use frame::Frame;

use nalgebra as na;

/// 3D vector.
pub type Vec3 = na::Vector3<f64>;
/// 3x3 matrix.
pub type Mat3 = na::Matrix3<f64>;

/// Rotation matrix about `axis` (need not be unit length) by `angle` radians.
#[inline]
pub fn rotation_from_axis_angle(axis: &Vec3, angle: f64) -> Mat3 {
    na::Rotation3::from_axis_angle(&na::Unit::new_normalize(*axis), angle).into_inner()
}

/// Unit normal of the triangle (v0, v1, v2), counterclockwise orientation.
#[inline]
pub fn triangle_normal(v0: &Vec3, v1: &Vec3, v2: &Vec3) -> Vec3 {
    (v1 - v0).cross(&(v2 - v0)).normalize()
}

/// Point at barycentric weights `w` inside the triangle (v0, v1, v2).
#[inline]
pub fn interpolate_triangle(v0: &Vec3, v1: &Vec3, v2: &Vec3, w: &[f64; 3]) -> Vec3 {
    v0 * w[0] + v1 * w[1] + v2 * w[2]
}

/// Signed volume of the tetrahedron (a, b, c, d).
///
/// Positive when (b - a, c - a, d - a) form a right-handed basis.
#[inline]
pub fn tetrahedron_volume(a: &Vec3, b: &Vec3, c: &Vec3, d: &Vec3) -> f64 {
    (b - a).dot(&(c - a).cross(&(d - a))) / 6.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_tetrahedron_volume() {
        let v = tetrahedron_volume(
            &Vec3::zeros(),
            &Vec3::x(),
            &Vec3::y(),
            &Vec3::z(),
        );
        assert_relative_eq!(v, 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn tetrahedron_volume_sign_flips_with_orientation() {
        let v_pos = tetrahedron_volume(&Vec3::zeros(), &Vec3::x(), &Vec3::y(), &Vec3::z());
        let v_neg = tetrahedron_volume(&Vec3::zeros(), &Vec3::y(), &Vec3::x(), &Vec3::z());
        assert_relative_eq!(v_pos, -v_neg, epsilon = 1e-12);
    }

    #[test]
    fn triangle_normal_is_ccw() {
        let n = triangle_normal(&Vec3::zeros(), &Vec3::x(), &Vec3::y());
        assert_relative_eq!(n, Vec3::z(), epsilon = 1e-12);
    }

    #[test]
    fn barycentric_interpolation_hits_vertices() {
        let (v0, v1, v2) = (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, 3.0));
        assert_relative_eq!(interpolate_triangle(&v0, &v1, &v2, &[1.0, 0.0, 0.0]), v0);
        assert_relative_eq!(interpolate_triangle(&v0, &v1, &v2, &[0.0, 0.0, 1.0]), v2);
        let mid = interpolate_triangle(&v0, &v1, &v2, &[1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]);
        assert_relative_eq!(mid, (v0 + v1 + v2) / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn axis_angle_quarter_turn() {
        let r = rotation_from_axis_angle(&Vec3::z(), std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(r * Vec3::x(), Vec3::y(), epsilon = 1e-12);
    }
}
