//! `mathcore::ext` hidden submodule supplies helper structs and functions that are
//! used throughout `ggscene` crate.
//!

use serde::{Deserialize, Serialize};

/// Normalizes angle in degrees to [0.0; 360.0).
///
/// If given value is not finite, 0.0 is returned.
///
/// # Example
/// ```rust
/// # use ggscene::mathcore::normalize_degrees;
/// assert_eq!(normalize_degrees(405.0), 45.0);
/// assert_eq!(normalize_degrees(-45.0), 315.0);
/// assert_eq!(normalize_degrees(360.0), 0.0);
/// assert_eq!(normalize_degrees(f32::NAN), 0.0);
/// ```
///
pub fn normalize_degrees(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let normalized: f32 = degrees.rem_euclid(360.0);
    // `rem_euclid` can round up to the modulus itself for tiny negative inputs.
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// [`Color`] struct represents RGBA model of color.
///
/// # Examples
/// ```rust
/// # use ggscene::mathcore::Color;
/// let color: Color = Color { r: 1, g: 2, b: 3, a: 4 };
/// assert_eq!(Color::RED, Color { r: 255, g: 0, b: 0, a: 255 });
/// assert_eq!(Color::GREEN, Color { r: 0, g: 255, b: 0, a: 255 });
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component of color.
    ///
    pub r: u8,

    /// Green component of color.
    ///
    pub g: u8,

    /// Blue component of color.
    ///
    pub b: u8,

    /// Alpha channel value of color.
    ///
    pub a: u8,
}
impl Color {
    /// Color that corresponds to white.
    ///
    pub const WHITE: Self = Color::opaque(255, 255, 255);
    /// Color that corresponds to black.
    ///
    pub const BLACK: Self = Color::opaque(0, 0, 0);
    /// Color that corresponds to red.
    ///
    /// This is the color in which collider overlays are drawn by default.
    ///
    pub const RED: Self = Color::opaque(255, 0, 0);
    /// Color that corresponds to green.
    ///
    pub const GREEN: Self = Color::opaque(0, 255, 0);
    /// Color that corresponds to blue.
    ///
    pub const BLUE: Self = Color::opaque(0, 0, 255);
    /// Color that corresponds to yellow.
    ///
    pub const YELLOW: Self = Color::opaque(255, 255, 0);

    /// Constructs color with full alpha.
    ///
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }
}
impl Default for Color {
    fn default() -> Self {
        Color::RED
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_degrees;

    #[test]
    fn degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-405.0), 315.0);
        assert_eq!(normalize_degrees(f32::INFINITY), 0.0);
        assert!(normalize_degrees(-1e-10) < 360.0);
    }
}
