//! tumble — fixed-timestep rigid-body dynamics.
//!
//! Simulates a population of triangle-mesh rigid bodies under gravity:
//! mass properties come from a closed-form tetrahedral decomposition of
//! each mesh, contacts from vertex-into-triangle overlap witnesses (convex
//! and concave geometry alike), and collision response from a projected
//! Gauss-Seidel sequential-impulse solver with Coulomb friction.
//!
//! The engine is pure simulation. Rendering, asset construction, and the
//! spatial index are the caller's: overlap queries arrive through the
//! [`BroadPhase`] trait, and anything can implement it, from a full BVH
//! down to the bundled all-pairs [`BruteForce`] reference for small scenes.
//!
//! # Example
//!
//! ```no_run
//! use tumble::{advance_simulation, init_simulation, BruteForce, Frame, Scene, Vec3};
//!
//! # let (triangles, positions) = (Vec::new(), Vec::new());
//! let mut scene = Scene::new(1);
//! scene
//!     .set_body(
//!         0,
//!         Frame::from_translation(Vec3::new(0.0, 10.0, 0.0)),
//!         Vec3::zeros(),
//!         Vec3::zeros(),
//!         1.0,
//!         triangles,
//!         positions,
//!     )
//!     .unwrap();
//! scene.set_broad_phase(Box::new(BruteForce));
//!
//! init_simulation(&mut scene);
//! for _ in 0..600 {
//!     advance_simulation(&mut scene, 1.0 / 60.0);
//! }
//! ```

mod bruteforce;
mod sim;

pub use bruteforce::BruteForce;
pub use sim::{advance_simulation, init_simulation};

pub use tumble_collision::{self, build_contacts, build_contacts_pointwise};
pub use tumble_contact::{self, apply_rel_impulse, solve_contacts};
pub use tumble_math::{self, Frame, Mat3, Vec3};
pub use tumble_model::{
    self, Body, BroadPhase, Contact, OverlapPoint, Scene, SceneError, ShapePair, VertOverlap,
};
pub use tumble_moments::{self, compute_moments, compute_moments_tetra};
