//! `ggasteroids::mathcore` module is a core that implements all math functionality for the simulation.
//!
//! # Prelude
//! `ggasteroids::mathcore` prelude can be imported with `use ggasteroids::mathcore::prelude::*`.
//!
//! # Model
//! Vectors represent positions, velocities and penetration depths.
//! Transformations of objects are expressed as 4x4 matrices,
//! which are composed per object on every frame by [`transforms::TransformComposer`].
//! Collisions are detected on bounding geometry (axis-aligned boxes or spheres),
//! so rotation of objects never affects collision results.
//!

// submodules and public re-exports
mod ext;
pub use ext::*;

pub mod collisions;
pub mod floats;
pub mod matrices;
pub mod transforms;
pub mod vectors;

// prelude
pub mod prelude;
