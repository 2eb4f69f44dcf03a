//! `datacore::settings` submodule implements [`SceneSettings`] - configuration of a scene
//! that can be stored to and restored from file.
//!

use crate::{graphicscore::debug::DEFAULT_CIRCLE_SEGMENTS, mathcore::Color};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags!(
    /// [`DebugDrawFlags`] bitflag struct lists diagnostic overlays that scene draws after game objects.
    ///
    #[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct DebugDrawFlags : u32 {
        /// Nothing is drawn.
        ///
        const NONE = 0;
        /// Collider outlines (rectangles, circles and polygon edges).
        ///
        const COLLIDERS = 1 << 0;
        /// Axis-aligned bounds of every collider, which are used for mixed-type collision checks.
        ///
        const BOUNDS = 1 << 1;
    }
);

/// [`SceneSettings`] struct holds configuration of a scene.
///
/// # Example
/// ```rust
/// # use ggscene::datacore::{assets::{FromFile, ToFile}, settings::{DebugDrawFlags, SceneSettings}};
/// let mut settings: SceneSettings = SceneSettings::default();
/// settings.set_debug_draw_enabled(true);
///
/// let bytes: Vec<u8> = settings.to_bytes().expect("Settings are serializable");
/// let restored: SceneSettings = SceneSettings::from_bytes(&bytes).expect("Data was just written");
/// assert!(restored.debug_draw.contains(DebugDrawFlags::COLLIDERS));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct SceneSettings {
    /// Enabled diagnostic overlays.
    ///
    pub debug_draw: DebugDrawFlags,
    /// Color of diagnostic overlays.
    ///
    pub debug_color: Color,
    /// Amount of segments that approximate circle collider outline.
    ///
    pub circle_segments: u32,
}
impl SceneSettings {
    /// Returns whether collider outlines are drawn.
    ///
    pub fn is_debug_draw_enabled(&self) -> bool {
        self.debug_draw.contains(DebugDrawFlags::COLLIDERS)
    }
    /// Enables or disables drawing of collider outlines.
    ///
    pub fn set_debug_draw_enabled(&mut self, enabled: bool) {
        self.debug_draw.set(DebugDrawFlags::COLLIDERS, enabled);
    }
}
impl Default for SceneSettings {
    fn default() -> Self {
        SceneSettings {
            debug_draw: DebugDrawFlags::NONE,
            debug_color: Color::RED,
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DebugDrawFlags, SceneSettings};
    use crate::{
        datacore::assets::{FromFile, ToFile},
        mathcore::Color,
    };

    #[test]
    fn debug_draw_toggle() {
        let mut settings: SceneSettings = SceneSettings::default();
        assert!(!settings.is_debug_draw_enabled());
        assert_eq!(settings.circle_segments, 32);

        settings.debug_draw = DebugDrawFlags::BOUNDS;
        settings.set_debug_draw_enabled(true);
        assert!(settings.is_debug_draw_enabled());
        assert!(settings.debug_draw.contains(DebugDrawFlags::BOUNDS));

        settings.set_debug_draw_enabled(false);
        assert_eq!(settings.debug_draw, DebugDrawFlags::BOUNDS);
    }

    #[test]
    fn persistence() {
        let directory = tempfile::tempdir().expect("Temporary directory should be available");
        let path = directory.path().join("scene.cfg");

        let settings: SceneSettings = SceneSettings {
            debug_draw: DebugDrawFlags::COLLIDERS | DebugDrawFlags::BOUNDS,
            debug_color: Color::GREEN,
            circle_segments: 12,
        };
        settings.to_file(&path).expect("File should be writable");
        assert_eq!(
            SceneSettings::from_file(&path).expect("File was just written"),
            settings
        );
    }
}
