//! `ggscene::graphicscore` module is a core that provides interfaces for rendering
//! and visualization for engine.
//!
//! Rendering itself is out of `ggscene` scope: scenes only pass [`Canvas`](drawing::Canvas)
//! through to game objects and draw collider overlays on it.
//!

// submodules and public re-exports
pub mod debug;
pub mod drawing;
