//! `mathcore::floats` submodule implements several consts, functions and traits that help in
//! work with `f32` values produced by transform and collision math.
//!
//! [`almost_equal`] function and [`EPSILON`] const deal with floating point equality.
//!
//! [`FloatOperations`] trait cleans up distortions that trigonometry leaves behind
//! (e.g. `cos(90°)` being `-4.371139e-8` instead of `0.0`).
//!

/// Relative tolerance that is used in floating point equality.
///
pub const EPSILON: f32 = 0.00001;
/// Absolute tolerance that is used when one of the compared values is zero.
///
/// Relative comparison degenerates near zero, so values such as `-4.371139e-8` (result of
/// `cos(PI / 2)`) are compared against this bound instead.
///
pub const ABSOLUTE_EPSILON: f32 = 0.000001;

/// Implements floating point equality for `ggscene` crate.
///
/// It is used for implementing `PartialEq` on types that are based on float.
///
/// # Example
/// ```rust
/// # use ggscene::mathcore::floats::almost_equal;
/// assert!(almost_equal(0.15 + 0.15, 0.1 + 0.2));
/// assert!(almost_equal((90.0_f32).to_radians().cos(), 0.0));
/// assert!(!almost_equal(1.0, 1.001));
/// ```
///
pub fn almost_equal(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }

    let diff: f32 = (a - b).abs();
    if diff < ABSOLUTE_EPSILON {
        return true;
    }
    let norm: f32 = (a.abs() + b.abs()).min(f32::MAX);
    diff < norm * EPSILON
}

/// Threshold below which fractional part is considered to be zero.
///
pub const CLOSE_TO_ZERO: f32 = 0.0001;
/// Threshold above which fractional part is considered to be one.
///
pub const CLOSE_TO_ONE: f32 = 0.9999;

/// [`FloatOperations`] trait defines `correct_to` and `round_up_to` functions that work
/// with floating point values.
///
pub trait FloatOperations {
    /// Corrects distortions that may be caused by float operations.
    ///
    /// `-0.0` becomes `0.0`, fractional parts that are smaller than [`CLOSE_TO_ZERO`] or
    /// greater than [`CLOSE_TO_ONE`] (after shifting by `digits`) are rounded away.
    ///
    fn correct_to(self, digits: i32) -> Self;

    /// Rounds to given amount of digits after floating point.
    ///
    /// Passing negative number shifts floating point to the left.
    ///
    fn round_up_to(self, digits: i32) -> Self;
}
impl FloatOperations for f32 {
    /// # Example
    /// ```rust
    /// # use ggscene::mathcore::floats::FloatOperations;
    /// assert_eq!(-0.0_f32.correct_to(0), 0.0);
    /// assert_eq!(0.00009_f32.correct_to(0), 0.0);
    /// assert_eq!(0.99999_f32.correct_to(0), 1.0);
    /// assert_eq!(0.200009_f32.correct_to(1), 0.2);
    /// ```
    ///
    fn correct_to(self, digits: i32) -> Self {
        let mul: f32 = 10_f32.powi(digits);
        let n: f32 = self * mul;

        let fract: f32 = n.abs().fract();
        let corrected: f32 = if (CLOSE_TO_ZERO..=CLOSE_TO_ONE).contains(&fract) {
            n / mul
        } else {
            n.round() / mul
        };
        if corrected == 0.0 {
            0.0
        } else {
            corrected
        }
    }

    /// # Example
    /// ```rust
    /// # use ggscene::mathcore::floats::FloatOperations;
    /// assert_eq!(12.345_f32.round_up_to(2), 12.35);
    /// assert_eq!(12.345_f32.round_up_to(-1), 10.0);
    /// ```
    ///
    fn round_up_to(self, digits: i32) -> Self {
        let mul: f32 = 10_f32.powi(digits);
        (self * mul).round() / mul
    }
}
impl<T: FloatOperations, const N: usize> FloatOperations for [T; N] {
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }

    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}
