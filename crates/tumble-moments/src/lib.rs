//! Closed-form mass properties of meshed solids.
//!
//! A closed triangle mesh is treated as a boundary: every triangle spans a
//! signed tetrahedron with its apex at the origin, and volume, centroid and
//! inertia accumulate over those tetrahedra. Orientation matters: triangles
//! must wind counterclockwise seen from outside. An explicit tetrahedral
//! mesh is supported through [`compute_moments_tetra`].
//!
//! Inverted or non-closed meshes yield zero or negative volume and a
//! meaningless tensor; no attempt is made to detect this.
//!
//! The per-tetrahedron inertia is the exact formula of F. Tonon, "Explicit
//! Exact Formulas for the 3-D Tetrahedron Inertia Tensor in Terms of its
//! Vertex Coordinates", Journal of Mathematics and Statistics 1 (1), 2004.

use tumble_math::{tetrahedron_volume, Mat3, Vec3};

/// Inertia tensor of the tetrahedron (v0, v1, v2, v3) about `center`,
/// weighted by the tetrahedron's signed volume.
fn tetra_inertia(v0: &Vec3, v1: &Vec3, v2: &Vec3, v3: &Vec3, center: &Vec3) -> Mat3 {
    let volume = tetrahedron_volume(v0, v1, v2, v3);
    let r = [v0 - center, v1 - center, v2 - center, v3 - center];

    // diag holds the x^2, y^2, z^2 integrals, offd the xy, xz, yz ones
    let mut diag = [0.0; 3];
    for (j, d) in diag.iter_mut().enumerate() {
        let mut sum = 0.0;
        for i in 0..4 {
            for k in i..4 {
                sum += r[i][j] * r[k][j];
            }
        }
        *d = sum * 6.0 * volume / 60.0;
    }
    let mut offd = [0.0; 3];
    for (j, o) in offd.iter_mut().enumerate() {
        let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);
        let mut sum = 0.0;
        for i in 0..4 {
            for k in 0..4 {
                let w = if i == k { 2.0 } else { 1.0 };
                sum += w * r[i][j1] * r[k][j2];
            }
        }
        *o = sum * 6.0 * volume / 120.0;
    }

    Mat3::new(
        diag[1] + diag[2],
        -offd[2],
        -offd[1],
        -offd[2],
        diag[0] + diag[2],
        -offd[0],
        -offd[1],
        -offd[0],
        diag[0] + diag[1],
    )
}

/// Volume, centroid, and inertia tensor of a closed triangle mesh.
///
/// The returned tensor is normalized by volume; the inertia of a body of
/// mass m built from this mesh is m times it.
pub fn compute_moments(triangles: &[[usize; 3]], positions: &[Vec3]) -> (f64, Vec3, Mat3) {
    let origin = Vec3::zeros();

    let mut volume = 0.0;
    let mut center = Vec3::zeros();
    for t in triangles {
        let (v0, v1, v2) = (&positions[t[0]], &positions[t[1]], &positions[t[2]]);
        let tvolume = tetrahedron_volume(&origin, v0, v1, v2);
        volume += tvolume;
        center += (origin + v0 + v1 + v2) * (tvolume / 4.0);
    }
    center /= volume;

    let mut inertia = Mat3::zeros();
    for t in triangles {
        let (v0, v1, v2) = (&positions[t[0]], &positions[t[1]], &positions[t[2]]);
        inertia += tetra_inertia(&origin, v0, v1, v2, &center);
    }
    inertia /= volume;

    (volume, center, inertia)
}

/// Volume, centroid, and inertia tensor of an explicit tetrahedral mesh.
///
/// Same contract as [`compute_moments`], with each tetrahedron taken
/// directly instead of being spanned from the origin.
pub fn compute_moments_tetra(tetra: &[[usize; 4]], positions: &[Vec3]) -> (f64, Vec3, Mat3) {
    let mut volume = 0.0;
    let mut center = Vec3::zeros();
    for t in tetra {
        let (v0, v1, v2, v3) = (
            &positions[t[0]],
            &positions[t[1]],
            &positions[t[2]],
            &positions[t[3]],
        );
        let tvolume = tetrahedron_volume(v0, v1, v2, v3);
        volume += tvolume;
        center += (v0 + v1 + v2 + v3) * (tvolume / 4.0);
    }
    center /= volume;

    let mut inertia = Mat3::zeros();
    for t in tetra {
        let (v0, v1, v2, v3) = (
            &positions[t[0]],
            &positions[t[1]],
            &positions[t[2]],
            &positions[t[3]],
        );
        inertia += tetra_inertia(v0, v1, v2, v3, &center);
    }
    inertia /= volume;

    (volume, center, inertia)
}
