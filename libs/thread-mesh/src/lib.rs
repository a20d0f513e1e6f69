//! # Thread Mesh
//!
//! Watertight screw-thread solids for an external boolean/rendering kernel.
//!
//! ## Architecture
//!
//! ```text
//! ThreadParams/AugerParams → profile (RingStack) → stitch (Mesh)
//! ```
//!
//! Two components compose the core:
//!
//! - **Profile generation** samples a thread form into an ordered stack of
//!   point loops along a right-handed helix, covering conventional, tapered,
//!   and auger variants plus terminal tip shaping.
//! - **Stitching** (`close_points`) triangulates any ring stack — thread or
//!   not — into a single closed, orientable manifold.
//!
//! Both are pure, deterministic transformations with no shared state, so
//! independent solids can be generated in parallel without synchronization.
//! The resulting [`Mesh`] is owned by the caller and is meant to be handed to
//! an external solid-modeling kernel for boolean composition.
//!
//! ## Usage
//!
//! ```rust
//! use thread_mesh::{screw_thread, ThreadParams};
//!
//! // M8 x 20 bolt shaft thread, pitch from the standards table
//! let mesh = screw_thread(&ThreadParams::new(8.0), 20.0)?;
//! assert!(mesh.validate());
//! # Ok::<(), thread_mesh::MeshError>(())
//! ```

pub mod error;
pub mod mesh;
pub mod profile;
pub mod stitch;

pub use error::MeshError;
pub use mesh::Mesh;
pub use profile::{
    auger_rings, auger_thread, screw_thread, thread_rings, AugerParams, ThreadKind, ThreadParams,
};
pub use stitch::{close_points, Ring, RingStack};

#[cfg(test)]
mod tests;
