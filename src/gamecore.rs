//! `ggscene::gamecore` module is a core that implements game objects, scenes and
//! collision lifecycle, and supplies several game making essentials for the `ggscene`.
//!
//! # Prelude
//! `ggscene::gamecore` prelude can be imported with `use ggscene::gamecore::prelude::*`.
//!
//! # Model
//! [`Scene`](scenes::Scene) owns [`GameObject`](gameobjects::GameObject)s in a generational arena
//! and hands out [`GameObjectId`](identifiers::GameObjectId)s, which are the only way
//! to refer to registered objects. Ids of removed objects become stale and stop resolving.
//!

// submodules and public re-exports
pub mod gameobjects;
pub mod identifiers;
pub mod pools;
pub mod scenes;
pub mod storages;

// prelude
pub mod prelude;
