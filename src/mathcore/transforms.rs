//! `mathcore::transforms` submodule implements [`Transform`] - position, scale and rotation
//! of a game object on a plane.
//!
//! Transformation of local point into world space is performed in the following order:
//! scaling, rotation (counterclockwise in y-up coordinates, although on screen it would appear
//! as clockwise since y-axis is directed down), translation.
//!

use crate::mathcore::{
    floats::FloatOperations,
    normalize_degrees,
    vectors::{Point, Vector2},
};
use serde::{Deserialize, Serialize};

/// [`Transform`] struct holds position, scale and rotation (in degrees) of an object.
///
/// Every game object exclusively owns its own transform.
///
/// # Example
/// ```rust
/// # use ggscene::mathcore::{transforms::Transform, vectors::Vector2};
/// let mut transform: Transform = Transform::default();
/// transform.translate(Vector2::new(2.0, 3.0));
/// transform.rotate(45.0);
/// transform.rotate(360.0);
/// assert_eq!(transform.position, Vector2::new(2.0, 3.0));
/// assert_eq!(transform.rotation, 45.0);
/// assert_eq!(transform.scale, Vector2::one());
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    /// Position of an object (center of its collider).
    ///
    pub position: Vector2,
    /// Scale of an object along both axes.
    ///
    pub scale: Vector2,
    /// Rotation of an object in degrees.
    ///
    /// [`Transform::rotate`] keeps this value in [0.0; 360.0), direct assignment is not normalized.
    ///
    pub rotation: f32,
}
impl Transform {
    /// Constructs transform from its parts.
    ///
    pub fn new(position: Vector2, scale: Vector2, rotation: f32) -> Self {
        Transform {
            position,
            scale,
            rotation,
        }
    }
    /// Constructs transform with given position, default scale and zero rotation.
    ///
    pub fn from_position(position: Vector2) -> Self {
        Transform {
            position,
            ..Default::default()
        }
    }

    /// Returns position of an object.
    ///
    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves object by given vector.
    ///
    pub fn translate(&mut self, translation: Vector2) {
        self.position += translation;
    }
    /// Rotates object by given angle (in degrees) and normalizes resulting rotation to [0.0; 360.0).
    ///
    pub fn rotate(&mut self, degrees: f32) {
        self.rotation = normalize_degrees(self.rotation + degrees);
    }
    /// Sets new scale.
    ///
    pub fn set_scale(&mut self, scale: Vector2) {
        self.scale = scale;
    }

    /// Returns unit vector that points in the direction of current rotation.
    ///
    /// Trigonometric noise is corrected, so axis-aligned directions have exact zero components.
    ///
    /// # Example
    /// ```rust
    /// # use ggscene::mathcore::{transforms::Transform, vectors::Vector2};
    /// let mut transform: Transform = Transform::default();
    /// assert_eq!(transform.forward(), Vector2::new(1.0, 0.0));
    /// transform.rotation = 90.0;
    /// assert_eq!(transform.forward(), Vector2::new(0.0, 1.0));
    /// ```
    ///
    pub fn forward(&self) -> Vector2 {
        let (sin, cos): (f32, f32) = self.rotation.to_radians().sin_cos();
        Vector2::from([cos, sin].correct_to(3))
    }
    /// Returns unit vector that is perpendicular to [`Transform::forward`] (rotated by 90 degrees).
    ///
    pub fn right(&self) -> Vector2 {
        let (sin, cos): (f32, f32) = (self.rotation + 90.0).to_radians().sin_cos();
        Vector2::from([cos, sin].correct_to(3))
    }

    /// Transforms point from local space of an object into world space.
    ///
    /// # Example
    /// ```rust
    /// # use ggscene::mathcore::{transforms::Transform, vectors::Vector2};
    /// let transform: Transform = Transform::new(Vector2::new(10.0, 0.0), Vector2::new(2.0, 2.0), 90.0);
    /// assert_eq!(transform.apply_to(Vector2::new(1.0, 0.0)), Vector2::new(10.0, 2.0));
    /// ```
    ///
    pub fn apply_to(&self, point: Point) -> Point {
        let scaled: Vector2 = point.scale(self.scale);
        let (sin, cos): (f32, f32) = self.rotation.to_radians().sin_cos();
        let rotated: Vector2 = Vector2::new(
            scaled.x * cos - scaled.y * sin,
            scaled.x * sin + scaled.y * cos,
        );
        rotated + self.position
    }

    /// Returns whether every component of transform is finite.
    ///
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.scale.is_finite() && self.rotation.is_finite()
    }
}
impl Default for Transform {
    fn default() -> Self {
        Transform {
            position: Vector2::zero(),
            scale: Vector2::one(),
            rotation: 0.0,
        }
    }
}
