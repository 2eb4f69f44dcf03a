//! Prelude module: `datacore::prelude` re-exports all `ggscene::datacore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use ggscene::datacore::prelude::*;
//! ```
//!

// re-exports
pub use crate::datacore::assets::*;
pub use crate::datacore::settings::*;
