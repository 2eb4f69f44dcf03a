//! `ggscene::datacore` module is a core that supplies structs and functions
//! that are needed to persist engine data.
//!
//! # Prelude
//! `ggscene::datacore` prelude can be imported with `use ggscene::datacore::prelude::*`.
//!
//! # Usage
//! [`FromFile`](assets::FromFile) and [`ToFile`](assets::ToFile) traits store any serializable data
//! in CBOR format; [`SceneSettings`](settings::SceneSettings) is the configuration that scenes are built with.
//!
//! This module is similar to `mathcore` in that sense that both are 'helpers' for game engine
//! implementation.
//!

// submodules and public re-exports
pub mod assets;
pub mod settings;

// prelude
pub mod prelude;
