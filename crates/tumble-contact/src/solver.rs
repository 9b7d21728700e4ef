//! Projected Gauss-Seidel impulse solver.
//!
//! Contacts are resolved by sequential impulses: for a fixed number of
//! iterations, each contact in list order computes the impulse that
//! cancels the relative velocity at the contact point along the contact
//! frame's axes, accumulates it, and clamps the accumulated value: the
//! normal component to be non-negative, the tangential components into
//! the Coulomb friction cone. Contacts enter and leave the active set
//! implicitly through the clamp, so convergence degrades gracefully with
//! the iteration budget and each iteration stays O(contacts).
//!
//! There is no warm start across steps; accumulated impulses are zeroed
//! every call.

use tumble_math::{Mat3, Vec3};
use tumble_model::{Body, Contact};

/// Isotropic Coulomb friction coefficient. No static/kinetic distinction.
const FRICTION: f64 = 0.6;

/// Baumgarte position-correction gain. Held at zero: accumulated
/// penetration is not pushed out, only further approach is resisted.
/// A gain around 0.8 turns the depth term back on.
const BAUMGARTE: f64 = 0.0;

/// Apply impulse `j` to a body at `rel_pos` from its world centroid.
///
/// Static bodies are left untouched; their zero inverse mass and inertia
/// would degenerate to the same outcome, the guard just keeps it explicit.
#[inline]
pub fn apply_rel_impulse(body: &mut Body, j: &Vec3, rel_pos: &Vec3) {
    if !body.simulated {
        return;
    }
    body.lin_vel += j * body.mass_inv;
    body.ang_vel += body.inertia_inv_world * rel_pos.cross(j);
}

#[inline]
fn muldot(v: &Vec3, m: &Mat3) -> f64 {
    v.dot(&(m * v))
}

/// Velocity of body `b` relative to body `a` at the contact point.
fn relative_velocity(bodies: &[Body], contact: &Contact) -> Vec3 {
    let (a, b) = contact.bodies;
    let r1 = contact.frame.pos - bodies[a].centroid_world;
    let r2 = contact.frame.pos - bodies[b].centroid_world;
    let v1 = bodies[a].lin_vel + bodies[a].ang_vel.cross(&r1);
    let v2 = bodies[b].lin_vel + bodies[b].ang_vel.cross(&r2);
    v2 - v1
}

/// Resolve the contact list against the body table.
///
/// Runs `iterations` Gauss-Seidel sweeps in contact-list order. Each
/// contact's accumulated impulse and effective inverse masses are
/// recomputed from scratch; `vel_before` and `vel_after` are filled in
/// around the sweeps for inspection.
pub fn solve_contacts(bodies: &mut [Body], contacts: &mut [Contact], iterations: usize, dt: f64) {
    // effective inverse mass along each contact axis:
    // 1 / (m_a^-1 + m_b^-1 + (r_a x e)^T I_a^-1 (r_a x e) + (r_b x e)^T I_b^-1 (r_b x e))
    for contact in contacts.iter_mut() {
        contact.local_impulse = Vec3::zeros();
        contact.impulse = Vec3::zeros();
        let (a, b) = contact.bodies;
        let r1 = contact.frame.pos - bodies[a].centroid_world;
        let r2 = contact.frame.pos - bodies[b].centroid_world;
        let mut meff_inv = Vec3::zeros();
        for k in 0..3 {
            let e = contact.frame.axis(k);
            meff_inv[k] = 1.0
                / (bodies[a].mass_inv
                    + bodies[b].mass_inv
                    + muldot(&r1.cross(&e), &bodies[a].inertia_inv_world)
                    + muldot(&r2.cross(&e), &bodies[b].inertia_inv_world));
        }
        contact.meff_inv = meff_inv;
    }

    for contact in contacts.iter_mut() {
        contact.vel_before = relative_velocity(bodies, contact);
    }

    for _ in 0..iterations {
        for contact in contacts.iter_mut() {
            let (a, b) = contact.bodies;
            let r1 = contact.frame.pos - bodies[a].centroid_world;
            let r2 = contact.frame.pos - bodies[b].centroid_world;
            let vr = relative_velocity(bodies, contact);

            // back out the previously applied impulse; the clamped total
            // goes back on below
            apply_rel_impulse(&mut bodies[a], &contact.impulse, &r1);
            apply_rel_impulse(&mut bodies[b], &(-contact.impulse), &r2);

            let bias = contact.depth * BAUMGARTE / dt;
            let delta = Vec3::new(
                -vr.dot(&contact.frame.axis(0)),
                -vr.dot(&contact.frame.axis(1)),
                -vr.dot(&contact.frame.axis(2)) + bias,
            );

            let mut li = contact.local_impulse + contact.meff_inv.component_mul(&delta);
            li.z = li.z.max(0.0);
            li.x = li.x.max(-li.z * FRICTION).min(li.z * FRICTION);
            li.y = li
                .y
                .max(-li.z * FRICTION)
                .min(li.z * FRICTION - bias * FRICTION);
            contact.local_impulse = li;

            contact.impulse = contact.frame.axis(2) * li.z
                + contact.frame.axis(0) * li.x
                + contact.frame.axis(1) * li.y;
            apply_rel_impulse(&mut bodies[a], &(-contact.impulse), &r1);
            apply_rel_impulse(&mut bodies[b], &contact.impulse, &r2);
        }
    }

    for contact in contacts.iter_mut() {
        contact.vel_after = relative_velocity(bodies, contact);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tumble_math::Frame;

    /// A geometry-less unit-mass body for driving the solver directly.
    fn point_body(pos: Vec3, vel: Vec3) -> Body {
        let mut body = Body::default();
        body.centroid_world = pos;
        body.lin_vel = vel;
        // unit sphere-ish inertia so angular terms stay well conditioned
        body.inertia_inv_world = Mat3::identity();
        body
    }

    fn static_body(pos: Vec3) -> Body {
        let mut body = point_body(pos, Vec3::zeros());
        body.density = 0.0;
        body.simulated = false;
        body.mass = 0.0;
        body.mass_inv = 0.0;
        body.inertia_inv_local = Mat3::zeros();
        body.inertia_inv_world = Mat3::zeros();
        body
    }

    /// Head-on contact along +y between body 0 (below) and body 1 (above),
    /// contact point between the centroids.
    fn head_on(closing_speed: f64) -> (Vec<Body>, Vec<Contact>) {
        let bodies = vec![
            point_body(Vec3::new(0.0, -0.5, 0.0), Vec3::new(0.0, closing_speed, 0.0)),
            point_body(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, -closing_speed, 0.0)),
        ];
        let contact = Contact::new((0, 1), Frame::from_z(Vec3::zeros(), Vec3::y()), 0.01);
        (bodies, vec![contact])
    }

    #[test]
    fn head_on_collision_cancels_approach() {
        let (mut bodies, mut contacts) = head_on(1.0);
        solve_contacts(&mut bodies, &mut contacts, 20, 1.0 / 60.0);

        // approach velocity along the normal is gone, not reversed
        let vn_after = contacts[0].vel_after.dot(&Vec3::y());
        assert_relative_eq!(vn_after, 0.0, epsilon = 1e-9);
        assert!(contacts[0].vel_before.dot(&Vec3::y()) < 0.0);

        // momentum is exchanged symmetrically
        let total = bodies[0].lin_vel + bodies[1].lin_vel;
        assert_relative_eq!(total, Vec3::zeros(), epsilon = 1e-12);
    }

    #[test]
    fn separating_contact_gets_no_impulse() {
        let (mut bodies, mut contacts) = head_on(-1.0);
        solve_contacts(&mut bodies, &mut contacts, 20, 1.0 / 60.0);

        // normal impulse is clamped at zero; the bodies keep separating
        assert_relative_eq!(contacts[0].local_impulse, Vec3::zeros(), epsilon = 1e-12);
        assert_relative_eq!(bodies[0].lin_vel, Vec3::new(0.0, -1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn static_body_never_moves() {
        let mut bodies = vec![
            static_body(Vec3::new(0.0, -0.5, 0.0)),
            point_body(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, -1.0, 0.0)),
        ];
        let mut contacts = vec![Contact::new(
            (0, 1),
            Frame::from_z(Vec3::zeros(), Vec3::y()),
            0.01,
        )];
        solve_contacts(&mut bodies, &mut contacts, 20, 1.0 / 60.0);

        assert_eq!(bodies[0].lin_vel, Vec3::zeros());
        assert_eq!(bodies[0].ang_vel, Vec3::zeros());
        // the dynamic body is stopped by the static one
        assert_relative_eq!(bodies[1].lin_vel.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn friction_stays_inside_the_cone() {
        // dynamic body sliding across a static floor while pressed into it
        let mut bodies = vec![
            static_body(Vec3::new(0.0, -0.5, 0.0)),
            point_body(Vec3::new(0.0, 0.5, 0.0), Vec3::new(3.0, -1.0, 0.0)),
        ];
        let mut contacts = vec![Contact::new(
            (0, 1),
            Frame::from_z(Vec3::zeros(), Vec3::y()),
            0.01,
        )];
        solve_contacts(&mut bodies, &mut contacts, 20, 1.0 / 60.0);

        let li = contacts[0].local_impulse;
        assert!(li.z > 0.0);
        assert!(li.x.abs() <= li.z * 0.6 + 1e-12);
        assert!(li.y.abs() <= li.z * 0.6 + 1e-12);
        // sliding is slowed but friction cannot absorb all of it in one hit
        assert!(bodies[1].lin_vel.x < 3.0);
        assert!(bodies[1].lin_vel.x > 0.0);
    }

    #[test]
    fn energy_does_not_grow() {
        let (mut bodies, mut contacts) = head_on(2.0);
        let ke = |bodies: &[Body]| -> f64 {
            bodies
                .iter()
                .map(|b| {
                    0.5 * b.mass * b.lin_vel.norm_squared()
                        + 0.5 * b.ang_vel.dot(&(b.inertia_local * b.ang_vel))
                })
                .sum()
        };
        let before = ke(&bodies);
        solve_contacts(&mut bodies, &mut contacts, 20, 1.0 / 60.0);
        let after = ke(&bodies);
        assert!(after <= before + 1e-9);
    }
}
