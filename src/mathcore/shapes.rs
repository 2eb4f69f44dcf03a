//! `mathcore::shapes` submodule implements [`Rect`] - axis-aligned rectangle that
//! is used as bounding box of colliders, and [`Segment`] - primitive that debug drawing is built from.
//!

use crate::mathcore::vectors::{Point, Vector2};
use serde::{Deserialize, Serialize};

/// [`Segment`] struct represents two-dimensional line segment.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    /// First point of segment.
    ///
    pub point1: Point,
    /// Second point of segment.
    ///
    pub point2: Point,
}
impl Segment {
    /// Returns length of a segment.
    ///
    pub fn length(&self) -> f32 {
        self.slope().magnitude()
    }
    /// Returns slope of a segment (`point2 - point1`).
    ///
    pub fn slope(&self) -> Vector2 {
        self.point2 - self.point1
    }
}
impl From<[Point; 2]> for Segment {
    fn from(points: [Point; 2]) -> Self {
        Segment {
            point1: points[0],
            point2: points[1],
        }
    }
}

/// [`Rect`] struct represents axis-aligned rectangle that is described by its top-left corner
/// (smallest coordinates) and its size.
///
/// Rectangle with non-positive width or height is considered empty.
///
/// # Example
/// ```rust
/// # use ggscene::mathcore::{shapes::Rect, vectors::Point};
/// let rect: Rect = Rect::from_center(Point::new(0.0, 0.0), 100.0, 50.0);
/// assert_eq!((rect.left(), rect.right()), (-50.0, 50.0));
/// assert_eq!((rect.top(), rect.bottom()), (-25.0, 25.0));
/// assert!(!rect.is_empty());
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    /// X coordinate of left side.
    ///
    pub x: f32,
    /// Y coordinate of top side.
    ///
    pub y: f32,
    /// Width of rectangle.
    ///
    pub width: f32,
    /// Height of rectangle.
    ///
    pub height: f32,
}
impl Rect {
    /// Constructs rectangle from its top-left corner and size.
    ///
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
    /// Constructs rectangle that is centered at given point.
    ///
    pub fn from_center(center: Point, width: f32, height: f32) -> Self {
        Rect::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    /// Returns x coordinate of left side.
    ///
    pub fn left(&self) -> f32 {
        self.x
    }
    /// Returns x coordinate of right side.
    ///
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
    /// Returns y coordinate of top side.
    ///
    pub fn top(&self) -> f32 {
        self.y
    }
    /// Returns y coordinate of bottom side.
    ///
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
    /// Returns center point.
    ///
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
    /// Returns corners in clockwise order (on screen) starting from top-left one.
    ///
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
            Point::new(self.right(), self.bottom()),
            Point::new(self.left(), self.bottom()),
        ]
    }
    /// Returns size as vector.
    ///
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    /// Returns whether rectangle has no area (or its size is not a number).
    ///
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Returns intersection of two rectangles if it has nonzero area.
    ///
    /// # Example
    /// ```rust
    /// # use ggscene::mathcore::shapes::Rect;
    /// let rect1: Rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// let rect2: Rect = Rect::new(5.0, 5.0, 10.0, 10.0);
    /// assert_eq!(rect1.intersection(&rect2), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
    /// assert_eq!(rect1.intersection(&Rect::new(10.0, 0.0, 10.0, 10.0)), None);
    /// ```
    ///
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if self.is_empty() || other.is_empty() {
            return None;
        }

        let left: f32 = self.left().max(other.left());
        let right: f32 = self.right().min(other.right());
        let top: f32 = self.top().max(other.top());
        let bottom: f32 = self.bottom().min(other.bottom());

        let intersection: Rect = Rect::new(left, top, right - left, bottom - top);
        if intersection.is_empty() {
            None
        } else {
            Some(intersection)
        }
    }
    /// Returns whether two rectangles overlap with nonzero area.
    ///
    /// Rectangles that only touch by edges do not intersect.
    ///
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }
}
