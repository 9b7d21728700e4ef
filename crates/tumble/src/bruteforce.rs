//! All-pairs reference broad phase.
//!
//! Answers every overlap query by exhaustive scan: candidate pairs are all
//! body index pairs, and closest-triangle queries walk every triangle of
//! the target body. O(V * T) per pair per step, fine for tests, demos,
//! and small scenes; real applications should bind a proper spatial index
//! (BVH, grid) through [`BroadPhase`] instead.

use tumble_math::Vec3;
use tumble_model::{Body, BroadPhase, OverlapPoint, ShapePair, VertOverlap};

/// Stateless all-pairs [`BroadPhase`] implementation.
pub struct BruteForce;

/// Closest point on the triangle (a, b, c) to `p`, with its barycentric
/// weights. Voronoi-region walk, Ericson's formulation.
fn closest_point_triangle(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3) -> (Vec3, [f64; 3]) {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return (*a, [1.0, 0.0, 0.0]);
    }

    let bp = p - b;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= 0.0 && d4 <= d3 {
        return (*b, [0.0, 1.0, 0.0]);
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return (a + ab * v, [1.0 - v, v, 0.0]);
    }

    let cp = p - c;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= 0.0 && d5 <= d6 {
        return (*c, [0.0, 0.0, 1.0]);
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return (a + ac * w, [1.0 - w, 0.0, w]);
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return (b + (c - b) * w, [0.0, 1.0 - w, w]);
    }

    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    (a + ab * v + ac * w, [1.0 - v - w, v, w])
}

/// Closest triangle of `body` (id `sid`) to the world-space `point`.
fn closest_triangle(body: &Body, sid: usize, point: &Vec3, max_dist: f64) -> Option<OverlapPoint> {
    let mut best: Option<OverlapPoint> = None;
    for (eid, t) in body.triangles.iter().enumerate() {
        let v0 = body.frame.transform_point(&body.positions[t[0]]);
        let v1 = body.frame.transform_point(&body.positions[t[1]]);
        let v2 = body.frame.transform_point(&body.positions[t[2]]);
        let (closest, bary) = closest_point_triangle(point, &v0, &v1, &v2);
        let dist = (point - closest).norm();
        if dist > max_dist {
            continue;
        }
        if best.map_or(true, |b| dist < b.dist) {
            best = Some(OverlapPoint {
                dist,
                sid,
                eid,
                bary,
            });
        }
    }
    best
}

impl BroadPhase for BruteForce {
    fn overlap_shapes(&mut self, bodies: &[Body], pairs: &mut Vec<ShapePair>) {
        for a in 0..bodies.len() {
            for b in (a + 1)..bodies.len() {
                pairs.push((a, b));
            }
        }
    }

    fn overlap_shape(
        &mut self,
        bodies: &[Body],
        sid: usize,
        point: &Vec3,
        max_dist: f64,
    ) -> Option<OverlapPoint> {
        closest_triangle(&bodies[sid], sid, point, max_dist)
    }

    fn overlap_verts(
        &mut self,
        bodies: &[Body],
        sid_tri: usize,
        sid_vtx: usize,
        max_dist: f64,
        out: &mut Vec<VertOverlap>,
    ) {
        let tri_body = &bodies[sid_tri];
        let vtx_body = &bodies[sid_vtx];
        for (vert, pos) in vtx_body.positions.iter().enumerate() {
            let p = vtx_body.frame.transform_point(pos);
            if let Some(point) = closest_triangle(tri_body, sid_tri, &p, max_dist) {
                out.push(VertOverlap { point, vert });
            }
        }
    }

    fn refit(&mut self, _bodies: &[Body]) {
        // nothing cached; every query rescans
    }
}
