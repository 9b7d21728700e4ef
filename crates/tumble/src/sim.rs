//! The fixed-timestep integrator.
//!
//! `advance_simulation` is one monolithic, single-threaded tick. Per step:
//! refresh world-space mass properties, build contacts, inject gravity,
//! solve impulses, apply drag, advance poses, and let the caller's spatial
//! index refit. The advance keeps the invariant
//! `world position = centroid + rotation * local centroid offset`.

use tumble_collision::build_contacts;
use tumble_contact::solve_contacts;
use tumble_math::{rotation_from_axis_angle, Mat3, Vec3};
use tumble_model::Scene;
use tumble_moments::compute_moments;

/// Compute and cache mass properties for every body.
///
/// Call once after geometry is bound and before the first
/// [`advance_simulation`]. Simulated bodies get mass, centroid, and
/// inertia from their mesh; static bodies (and simulated bodies without
/// geometry) get zeroed masses and inverse inertias so every solver
/// formula degenerates to the immovable limit.
pub fn init_simulation(scene: &mut Scene) {
    for body in &mut scene.bodies {
        if body.simulated && body.has_triangles() {
            let (volume, centroid, inertia) = compute_moments(&body.triangles, &body.positions);
            body.mass = body.density * volume;
            body.mass_inv = 1.0 / body.mass;
            body.centroid_local = centroid;
            body.centroid_world = body.frame.transform_point(&centroid);
            body.inertia_local = inertia * body.mass;
            body.inertia_inv_local = body
                .inertia_local
                .try_inverse()
                .unwrap_or_else(Mat3::zeros);
        } else {
            body.mass = 0.0;
            body.mass_inv = 0.0;
            body.centroid_local = Vec3::zeros();
            body.centroid_world = Vec3::zeros();
            body.inertia_local = Mat3::zeros();
            body.inertia_inv_local = Mat3::zeros();
            body.inertia_inv_world = Mat3::zeros();
        }
    }
}

fn finite(v: &Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

/// Advance the simulation by one step of `dt` seconds.
pub fn advance_simulation(scene: &mut Scene, dt: f64) {
    // world-space centroid and inverse inertia for this step
    for body in &mut scene.bodies {
        if !body.simulated {
            continue;
        }
        body.centroid_world = body.frame.transform_point(&body.centroid_local);
        body.inertia_inv_world = body.frame.rot * body.inertia_inv_local * body.frame.rot.transpose();
    }

    // contacts; without a broad phase the step integrates contact-free
    let mut contacts = std::mem::take(&mut scene.collisions);
    match scene.broad_phase.as_deref_mut() {
        Some(broad_phase) => build_contacts(
            broad_phase,
            &scene.bodies,
            scene.overlap_max_radius,
            &mut contacts,
        ),
        None => contacts.clear(),
    }

    // gravity enters as a velocity impulse before the solve
    let gravity_impulse = scene.gravity * dt;
    for body in &mut scene.bodies {
        if body.simulated {
            body.lin_vel += gravity_impulse;
        }
    }

    solve_contacts(&mut scene.bodies, &mut contacts, scene.iterations, dt);
    scene.collisions = contacts;

    // one-step exponential damping
    for body in &mut scene.bodies {
        if !body.simulated {
            continue;
        }
        body.lin_vel *= 1.0 - scene.lin_drag;
        body.ang_vel *= 1.0 - scene.ang_drag;
    }

    // advance poses about the centroid
    for (bid, body) in scene.bodies.iter_mut().enumerate() {
        if !body.simulated {
            continue;
        }

        if !finite(&body.frame.pos) || !finite(&body.lin_vel) || !finite(&body.ang_vel) {
            log::warn!("non-finite state on body {bid}; continuing unrecovered");
        }

        let mut centroid = body.frame.rot * body.centroid_local + body.frame.pos;
        centroid += body.lin_vel * dt;
        let angle = body.ang_vel.norm() * dt;
        if angle != 0.0 {
            let axis = body.ang_vel.normalize();
            body.frame.rot = rotation_from_axis_angle(&axis, angle) * body.frame.rot;
            body.frame.orthonormalize();
        }
        body.frame.pos = centroid - body.frame.rot * body.centroid_local;
    }

    // let the caller's spatial index catch up with the new poses
    if let Some(broad_phase) = scene.broad_phase.as_deref_mut() {
        broad_phase.refit(&scene.bodies);
    }
}
