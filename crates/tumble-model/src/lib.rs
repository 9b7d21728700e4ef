//! Body, contact, and scene types for the tumble rigid-body engine.
//!
//! `Scene` is the owning container: a dense table of bodies, the global
//! simulation parameters, and the broad-phase binding. `Body` carries pose,
//! velocities, the owned triangle mesh, and the mass properties the
//! simulator caches. `Contact` is the per-step record the collision builder
//! emits and the impulse solver consumes.

pub mod body;
pub mod broad_phase;
pub mod contact;
pub mod error;
pub mod scene;

pub use body::Body;
pub use broad_phase::{BroadPhase, OverlapPoint, ShapePair, VertOverlap};
pub use contact::Contact;
pub use error::SceneError;
pub use scene::Scene;
