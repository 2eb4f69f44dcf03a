//! `mathcore::vectors` submodule implements two-dimensional vectors on a plane which can be used to represent
//! positions, scales, directions and polygon vertices.
//!

use crate::mathcore::floats::almost_equal;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// [`impl_vector_operations`] macro implements operation traits for [`Vector2`] by forwarding them
/// to the chaining in-place methods.
///
/// Every binary operator copies the left operand, applies the in-place method and returns the copy,
/// so operators and in-place methods can never disagree (e.g. on division by zero).
///
macro_rules! impl_vector_operations {
    ($rhs:ty, ($(($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $in_place:ident),)+)) => {$(
        impl $trait<$rhs> for Vector2 {
            type Output = Self;

            fn $method(mut self, rhs: $rhs) -> Self::Output {
                let _ = self.$in_place(rhs);
                self
            }
        }
        impl $assign_trait<$rhs> for Vector2 {
            fn $assign_method(&mut self, rhs: $rhs) {
                let _ = self.$in_place(rhs);
            }
        }
    )+}
}

/// [`Vector2`] struct represents two-dimensional vector and two-dimensional point with `f32` coordinates on a plane.
///
/// Arithmetic operators have value semantics, while `*_in_place` methods mutate
/// vector and return mutable reference to it, which allows chaining.
///
/// # Example
/// ```rust
/// # use ggscene::mathcore::vectors::Vector2;
/// let mut vector: Vector2 = Vector2::new(1.0, 2.0);
/// let _ = vector.add_in_place(Vector2::new(3.0, 4.0)).mul_in_place(2.0);
/// assert_eq!(vector, Vector2::new(8.0, 12.0));
/// assert_eq!(vector / 4.0, Vector2::new(2.0, 3.0));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct Vector2 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,
}
impl Vector2 {
    /// Constructs vector from its components.
    ///
    pub const fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }
    /// Initializes vector with zeroes.
    ///
    pub const fn zero() -> Self {
        Vector2::new(0.0, 0.0)
    }
    /// Initializes vector with ones.
    ///
    pub const fn one() -> Self {
        Vector2::new(1.0, 1.0)
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 2] {
        [self.x, self.y]
    }
    /// Returns whether both components are finite.
    ///
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Adds other vector to this one.
    ///
    pub fn add_in_place(&mut self, other: Vector2) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }
    /// Subtracts other vector from this one.
    ///
    pub fn sub_in_place(&mut self, other: Vector2) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }
    /// Multiplies both components by scalar.
    ///
    pub fn mul_in_place(&mut self, scalar: f32) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self
    }
    /// Divides both components by scalar.
    ///
    /// Division by exactly zero leaves vector unchanged.
    ///
    /// # Example
    /// ```rust
    /// # use ggscene::mathcore::vectors::Vector2;
    /// let mut vector: Vector2 = Vector2::new(4.0, 6.0);
    /// let _ = vector.div_in_place(0.0);
    /// assert_eq!(vector, Vector2::new(4.0, 6.0));
    /// ```
    ///
    pub fn div_in_place(&mut self, scalar: f32) -> &mut Self {
        if scalar != 0.0 {
            self.x /= scalar;
            self.y /= scalar;
        }
        self
    }

    /// Returns squared magnitude of a vector.
    ///
    pub fn sqr_magnitude(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }
    /// Returns magnitude of a vector (vector length).
    ///
    pub fn magnitude(&self) -> f32 {
        self.sqr_magnitude().sqrt()
    }
    /// Returns new vector that is normalized.
    ///
    /// Zero vector is returned as is.
    ///
    pub fn normalized(self) -> Self {
        self / self.magnitude()
    }

    /// Performs dot product operation on two vectors.
    ///
    pub fn dot_product(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }
    /// Returns scalar that represents cross product of two-dimensional vectors.
    ///
    pub fn cross_product(self, other: Self) -> f32 {
        (self.x * other.y) - (self.y * other.x)
    }

    /// Multiplies two vectors component-wise.
    ///
    pub fn scale(self, other: Self) -> Self {
        Vector2::new(self.x * other.x, self.y * other.y)
    }
    /// Rotates vector counterclockwise (in y-up coordinates) by given amount of degrees.
    ///
    pub fn rotated(self, degrees: f32) -> Self {
        let (sin, cos): (f32, f32) = degrees.to_radians().sin_cos();
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}
impl_vector_operations!(Vector2, ((Add, add, AddAssign, add_assign, add_in_place),
                                  (Sub, sub, SubAssign, sub_assign, sub_in_place),));
impl_vector_operations!(f32, ((Mul, mul, MulAssign, mul_assign, mul_in_place),
                              (Div, div, DivAssign, div_assign, div_in_place),));
impl Mul<Vector2> for f32 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Self::Output {
        rhs * self
    }
}
impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}
impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.x, other.x) && almost_equal(self.y, other.y)
    }
}
impl From<[f32; 2]> for Vector2 {
    fn from(arr: [f32; 2]) -> Self {
        Vector2::new(arr[0], arr[1])
    }
}
impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vector2::new(x, y)
    }
}

/// Type alias for [`Vector2`].
///
pub type Point = Vector2;
/// Type alias for [`Vector2`].
///
pub type Vertex = Point;

#[cfg(test)]
mod tests {
    use super::Vector2;

    #[test]
    fn arithmetic() {
        let mut vec1: Vector2 = Vector2::new(1.0, 2.0);
        vec1 += Vector2::new(3.0, 4.0);
        assert_eq!(vec1.elements(), [4.0, 6.0]);

        let mut vec2: Vector2 = Vector2::new(5.0, 7.0);
        vec2 -= Vector2::new(2.0, 3.0);
        assert_eq!(vec2.elements(), [3.0, 4.0]);

        let mut vec3: Vector2 = Vector2::new(2.0, 3.0);
        vec3 *= 2.0;
        assert_eq!(vec3.elements(), [4.0, 6.0]);
        vec3 /= 2.0;
        assert_eq!(vec3.elements(), [2.0, 3.0]);

        assert_eq!(vec1 + vec2, Vector2::new(7.0, 10.0));
        assert_eq!(vec1 - vec2, Vector2::new(1.0, 2.0));
        assert_eq!(vec2 * 2.0, Vector2::new(6.0, 8.0));
        assert_eq!(2.0 * vec2, Vector2::new(6.0, 8.0));
        assert_eq!(-vec2, Vector2::new(-3.0, -4.0));
        assert_eq!(vec1.scale(vec2), Vector2::new(12.0, 24.0));
    }

    #[test]
    fn chaining() {
        let mut vec: Vector2 = Vector2::zero();
        let _ = vec
            .add_in_place(Vector2::new(6.0, 9.0))
            .sub_in_place(Vector2::one())
            .div_in_place(0.0)
            .div_in_place(2.0);
        assert_eq!(vec, Vector2::new(2.5, 4.0));
    }

    #[test]
    fn divide_by_zero() {
        let mut vec: Vector2 = Vector2::new(4.0, 6.0);
        vec /= 0.0;
        assert_eq!(vec.elements(), [4.0, 6.0]);
        assert_eq!((vec / 0.0).elements(), [4.0, 6.0]);
        assert!((vec / -0.0).is_finite());
    }

    #[test]
    fn magnitude_and_normalization() {
        let vec: Vector2 = Vector2::new(3.0, 4.0);
        assert_eq!(vec.magnitude(), 5.0);
        assert_eq!(vec.sqr_magnitude(), 25.0);
        assert_eq!(vec.normalized().elements(), [0.6, 0.8]);
        assert!((vec.normalized().magnitude() - 1.0).abs() < 0.0001);

        assert_eq!(Vector2::zero().normalized().elements(), [0.0, 0.0]);
    }

    #[test]
    fn products_and_rotation() {
        assert_eq!(Vector2::new(3.0, 4.0).dot_product(Vector2::new(5.0, 3.0)), 27.0);
        assert_eq!(Vector2::new(-3.0, 2.0).cross_product(Vector2::new(1.0, 2.0)), -8.0);
        assert_eq!(Vector2::new(1.0, 0.0).rotated(90.0), Vector2::new(0.0, 1.0));
        assert_eq!(Vector2::new(0.0, 2.0).rotated(180.0), Vector2::new(0.0, -2.0));
    }
}
