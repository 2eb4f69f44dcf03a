//! Prelude module: `gamecore::prelude` re-exports all `ggscene::gamecore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use ggscene::gamecore::prelude::*;
//! ```
//!

// re-exports
pub use crate::gamecore::gameobjects::*;
pub use crate::gamecore::identifiers::*;
pub use crate::gamecore::pools::*;
pub use crate::gamecore::scenes::*;
pub use crate::gamecore::storages::*;
