//! `ggscene::mathcore` module is a core that implements all math functionality for engine.
//!
//! # Prelude
//! `ggscene::mathcore` prelude can be imported with `use ggscene::mathcore::prelude::*`.
//!
//! # Model
//! Vectors represent positions, scales and directions.
//! Every game object owns [`Transform`](transforms::Transform) which places it on a plane,
//! and [`Collider`](collisions::Collider) describes its shape relative to that transform.
//! Collision between two colliders is checked by geometry that is specific to their shapes.
//!

// submodules and public re-exports
mod ext;
pub use ext::*;

pub mod collisions;
pub mod floats;
pub mod shapes;
pub mod transforms;
pub mod vectors;

// prelude
pub mod prelude;
