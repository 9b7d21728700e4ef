//! The capability trait through which the engine consumes an external
//! spatial index.
//!
//! The engine performs no broad- or near-phase queries of its own; a
//! caller-owned implementation of [`BroadPhase`] answers them. The trait
//! object is also the callback context: any acceleration structure state
//! lives inside the implementor, which is free to rebuild it when
//! [`BroadPhase::refit`] reports that bodies moved.

use crate::body::Body;
use tumble_math::Vec3;

/// Candidate body pair produced by [`BroadPhase::overlap_shapes`].
pub type ShapePair = (usize, usize);

/// Closest-element witness returned by overlap queries.
#[derive(Debug, Clone, Copy)]
pub struct OverlapPoint {
    /// Distance from the query point to the closest point on the element.
    pub dist: f64,
    /// Body the element belongs to.
    pub sid: usize,
    /// Triangle index within that body.
    pub eid: usize,
    /// Barycentric coordinates of the closest point on the triangle.
    pub bary: [f64; 3],
}

/// A vertex-into-triangle witness: the closest triangle of one body for a
/// vertex of another.
#[derive(Debug, Clone, Copy)]
pub struct VertOverlap {
    /// Closest triangle and where on it.
    pub point: OverlapPoint,
    /// Vertex index within the vertex body.
    pub vert: usize,
}

/// Spatial-index capabilities the engine needs per step.
///
/// `overlap_shapes` may over-approximate freely; the collision builder
/// filters pairs itself. `overlap_verts` is the hot query; `overlap_shape`
/// backs the per-vertex alternative contact path and interactive picking.
pub trait BroadPhase {
    /// Enumerate candidate body pairs whose shapes might overlap.
    fn overlap_shapes(&mut self, bodies: &[Body], pairs: &mut Vec<ShapePair>);

    /// Closest element of body `sid` to the world-space `point`, within
    /// `max_dist`.
    fn overlap_shape(
        &mut self,
        bodies: &[Body],
        sid: usize,
        point: &Vec3,
        max_dist: f64,
    ) -> Option<OverlapPoint>;

    /// For every vertex of body `sid_vtx` within `max_dist` of a triangle
    /// of body `sid_tri`, append the closest-triangle witness to `out`.
    fn overlap_verts(
        &mut self,
        bodies: &[Body],
        sid_tri: usize,
        sid_vtx: usize,
        max_dist: f64,
        out: &mut Vec<VertOverlap>,
    );

    /// Called after integration so the index can re-sync to the new poses.
    fn refit(&mut self, bodies: &[Body]);
}
