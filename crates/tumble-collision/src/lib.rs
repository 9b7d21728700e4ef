//! Contact generation.
//!
//! Contacts are built from vertex-into-triangle witnesses rather than
//! convex pair queries: every vertex of one body that lies within the
//! overlap radius of a triangle of the other becomes a candidate contact.
//! This trades tessellation density for concavity support (any closed
//! triangle mesh works, convex or not) and tends to be more stable than
//! GJK-style contact points on coarse meshes.
//!
//! A witness survives only if the direction from the closest triangle
//! point to the vertex opposes the triangle's outward normal, i.e. the
//! vertex sits behind the surface. Witnesses from grazing vertices on the
//! front face are rejected.

use tumble_math::{interpolate_triangle, triangle_normal, Frame, Vec3};
use tumble_model::{Body, BroadPhase, Contact, OverlapPoint, ShapePair, VertOverlap};

/// Front-face rejection threshold for the normal-versus-offset test.
const REJECT_EPS: f64 = -0.01;

/// Build this step's contact list from broad-phase candidates.
///
/// Each candidate pair with at least one simulated body and triangle
/// geometry on both sides is probed twice, with the triangle and vertex
/// roles swapped, so both surfaces contribute witnesses. `contacts` is
/// cleared first and reused across steps.
pub fn build_contacts(
    broad_phase: &mut dyn BroadPhase,
    bodies: &[Body],
    max_radius: f64,
    contacts: &mut Vec<Contact>,
) {
    let mut pairs: Vec<ShapePair> = Vec::new();
    broad_phase.overlap_shapes(bodies, &mut pairs);

    contacts.clear();
    let mut witnesses: Vec<VertOverlap> = Vec::new();
    for &(a, b) in &pairs {
        if !bodies[a].simulated && !bodies[b].simulated {
            continue;
        }
        if !bodies[a].has_triangles() || !bodies[b].has_triangles() {
            continue;
        }
        pair_contacts(broad_phase, bodies, (a, b), max_radius, &mut witnesses, contacts);
        pair_contacts(broad_phase, bodies, (b, a), max_radius, &mut witnesses, contacts);
    }
}

/// Contacts of one ordered (triangle body, vertex body) pair.
fn pair_contacts(
    broad_phase: &mut dyn BroadPhase,
    bodies: &[Body],
    (sid_tri, sid_vtx): ShapePair,
    max_radius: f64,
    witnesses: &mut Vec<VertOverlap>,
    contacts: &mut Vec<Contact>,
) {
    witnesses.clear();
    broad_phase.overlap_verts(bodies, sid_tri, sid_vtx, max_radius, witnesses);

    let tri_body = &bodies[sid_tri];
    let vtx_body = &bodies[sid_vtx];
    for witness in witnesses.iter() {
        let p = vtx_body
            .frame
            .transform_point(&vtx_body.positions[witness.vert]);
        if let Some(contact) = witness_contact(tri_body, &witness.point, (sid_tri, sid_vtx), p) {
            contacts.push(contact);
        }
    }
}

/// Alternative contact path: query the closest element per world-space
/// vertex instead of batching. Produces the same records as
/// [`build_contacts`] for one ordered pair; kept for spatial indexes that
/// only answer point queries.
pub fn build_contacts_pointwise(
    broad_phase: &mut dyn BroadPhase,
    bodies: &[Body],
    (sid_tri, sid_vtx): ShapePair,
    max_radius: f64,
    contacts: &mut Vec<Contact>,
) {
    let tri_body = &bodies[sid_tri];
    let vtx_body = &bodies[sid_vtx];
    for pos in &vtx_body.positions {
        let p = vtx_body.frame.transform_point(pos);
        let Some(point) = broad_phase.overlap_shape(bodies, sid_tri, &p, max_radius) else {
            continue;
        };
        if let Some(contact) = witness_contact(tri_body, &point, (sid_tri, sid_vtx), p) {
            contacts.push(contact);
        }
    }
}

/// Turn one witness into a contact, or reject it.
fn witness_contact(
    tri_body: &Body,
    point: &OverlapPoint,
    bodies: ShapePair,
    p: Vec3,
) -> Option<Contact> {
    let t = tri_body.triangles[point.eid];
    let (v0, v1, v2) = (
        &tri_body.positions[t[0]],
        &tri_body.positions[t[1]],
        &tri_body.positions[t[2]],
    );
    let tp = tri_body
        .frame
        .transform_point(&interpolate_triangle(v0, v1, v2, &point.bary));
    let n = tri_body.frame.transform_dir(&triangle_normal(v0, v1, v2));

    // vertex in front of the surface: not a contact
    let offset = (p - tp).normalize();
    if n.dot(&offset) > REJECT_EPS {
        return None;
    }

    Some(Contact::new(bodies, Frame::from_z(p, n), point.dist))
}
