//! `mathcore::collisions` submodule implements [`Collider`] - shape descriptor that is attached to
//! game objects and is able to perform exact pairwise intersection tests.
//!
//! # Model
//! Collider never stores transform - transform of both participants is passed on every check,
//! so the same collider can be shared by several objects.
//!
//! Pairs of colliders of the same type are checked by exact algorithms:
//! * boxes are checked by intersection of their axis-aligned bounds;
//! * circles are checked by distance between their centers;
//! * polygons are checked by separating axis theorem.
//!
//! ### Note
//! Any pair of colliders of different types is approximated by intersection of their
//! axis-aligned bounding boxes, so circle that touches polygon's bounding box corner
//! is reported as colliding with that polygon.
//! This approximation is a known limitation.
//!

use crate::mathcore::{
    shapes::Rect,
    transforms::Transform,
    vectors::{Vector2, Vertex},
};
use serde::{Deserialize, Serialize};

/// [`ColliderType`] enum lists shapes that [`Collider`] is able to describe.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColliderType {
    /// Axis-aligned rectangle (rotation is ignored).
    ///
    Box,
    /// Circle whose diameter is the collider's width (`scale.y` is ignored, ellipses are not modelled).
    ///
    Circle,
    /// Convex polygon whose vertices are given in local space in a consistent winding order.
    ///
    Polygon,
}

/// [`Collider`] struct describes collision shape of an object.
///
/// For [`ColliderType::Box`] and [`ColliderType::Circle`] `width` and `height` define untransformed extents.
/// For [`ColliderType::Polygon`] they are derived once (at construction) as bounding extent of raw points;
/// those values are only used when polygon is checked against a collider of another type.
///
/// # Example
/// ```rust
/// # use ggscene::mathcore::{collisions::Collider, transforms::Transform, vectors::Vector2};
/// let box1: Collider = Collider::rectangle(100.0, 100.0);
/// let box2: Collider = Collider::rectangle(100.0, 100.0);
///
/// let transform1: Transform = Transform::from_position(Vector2::new(0.0, 0.0));
/// let mut transform2: Transform = Transform::from_position(Vector2::new(99.0, 0.0));
/// assert!(box1.check_collision(&box2, &transform1, &transform2));
///
/// transform2.position.x = 100.0;
/// assert!(!box1.check_collision(&box2, &transform1, &transform2));
/// ```
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Collider {
    /// Type of collider.
    ///
    collider_type: ColliderType,
    /// Untransformed width (diameter for circle).
    ///
    width: f32,
    /// Untransformed height.
    ///
    height: f32,
    /// Local-space vertices of polygon (empty for other types).
    ///
    points: Vec<Vertex>,
}
impl Collider {
    /// Constructs collider of given type with given extents.
    ///
    /// Polygon constructed that way has no vertices and never intersects other polygons;
    /// use [`Collider::polygon`] instead.
    ///
    pub fn new(collider_type: ColliderType, width: f32, height: f32) -> Self {
        Collider {
            collider_type,
            width,
            height,
            points: Vec::new(),
        }
    }
    /// Constructs box collider.
    ///
    pub fn rectangle(width: f32, height: f32) -> Self {
        Collider::new(ColliderType::Box, width, height)
    }
    /// Constructs circle collider with given diameter.
    ///
    pub fn circle(diameter: f32) -> Self {
        Collider::new(ColliderType::Circle, diameter, diameter)
    }
    /// Constructs polygon collider from local-space vertices.
    ///
    /// Width and height are derived from bounding extent of given points
    /// (empty list results in zero-sized polygon).
    ///
    /// # Example
    /// ```rust
    /// # use ggscene::mathcore::{collisions::Collider, vectors::Vertex};
    /// let triangle: Collider = Collider::polygon(vec![
    ///     Vertex::new(-10.0, 0.0),
    ///     Vertex::new(30.0, 0.0),
    ///     Vertex::new(0.0, 20.0),
    /// ]);
    /// assert_eq!((triangle.width(), triangle.height()), (40.0, 20.0));
    /// ```
    ///
    pub fn polygon(points: Vec<Vertex>) -> Self {
        let (width, height): (f32, f32) = match points.first() {
            Some(first) => {
                let (min, max): (Vector2, Vector2) =
                    points.iter().fold((*first, *first), |(min, max), point| {
                        (
                            Vector2::new(min.x.min(point.x), min.y.min(point.y)),
                            Vector2::new(max.x.max(point.x), max.y.max(point.y)),
                        )
                    });
                (max.x - min.x, max.y - min.y)
            }
            None => (0.0, 0.0),
        };
        Collider {
            collider_type: ColliderType::Polygon,
            width,
            height,
            points,
        }
    }

    /// Returns type of collider.
    ///
    pub fn collider_type(&self) -> ColliderType {
        self.collider_type
    }
    /// Returns untransformed width.
    ///
    pub fn width(&self) -> f32 {
        self.width
    }
    /// Returns untransformed height.
    ///
    pub fn height(&self) -> f32 {
        self.height
    }
    /// Returns local-space vertices of polygon.
    ///
    pub fn points(&self) -> &[Vertex] {
        &self.points
    }

    /// Returns whether collider extents are finite and non-negative and all vertices are finite.
    ///
    pub fn is_valid(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
            && self.points.iter().all(Vector2::is_finite)
    }

    /// Returns axis-aligned bounds: extents scaled by `transform.scale` and centered at `transform.position`.
    ///
    /// Rotation is not taken into account.
    ///
    pub fn bounds(&self, transform: &Transform) -> Rect {
        Rect::from_center(
            transform.position,
            self.width * transform.scale.x,
            self.height * transform.scale.y,
        )
    }
    /// Returns radius of collider when it is treated as circle.
    ///
    pub fn radius(&self, transform: &Transform) -> f32 {
        self.width * transform.scale.x / 2.0
    }
    /// Returns polygon vertices transformed into world space (scaled, rotated, translated).
    ///
    pub fn transformed_points(&self, transform: &Transform) -> Vec<Vertex> {
        self.points
            .iter()
            .map(|point| transform.apply_to(*point))
            .collect()
    }

    /// Returns whether this collider intersects other collider.
    ///
    /// Colliders of the same type use exact tests; any mixed pair is approximated by
    /// intersection of bounding boxes.
    ///
    pub fn check_collision(
        &self,
        other: &Collider,
        this_transform: &Transform,
        other_transform: &Transform,
    ) -> bool {
        match (self.collider_type, other.collider_type) {
            (ColliderType::Circle, ColliderType::Circle) => {
                self.check_circle_collision(other, this_transform, other_transform)
            }
            (ColliderType::Polygon, ColliderType::Polygon) => {
                self.check_polygon_collision(other, this_transform, other_transform)
            }
            _ => self.check_box_collision(other, this_transform, other_transform),
        }
    }

    /// Checks intersection of axis-aligned bounds.
    ///
    fn check_box_collision(
        &self,
        other: &Collider,
        this_transform: &Transform,
        other_transform: &Transform,
    ) -> bool {
        self.bounds(this_transform)
            .intersects(&other.bounds(other_transform))
    }
    /// Checks that distance between centers is strictly less than sum of radii.
    ///
    fn check_circle_collision(
        &self,
        other: &Collider,
        this_transform: &Transform,
        other_transform: &Transform,
    ) -> bool {
        let distance: f32 = (this_transform.position - other_transform.position).magnitude();
        distance < self.radius(this_transform) + other.radius(other_transform)
    }
    /// Checks polygon intersection by separating axis theorem (edges of both polygons are tested).
    ///
    fn check_polygon_collision(
        &self,
        other: &Collider,
        this_transform: &Transform,
        other_transform: &Transform,
    ) -> bool {
        let vertices1: Vec<Vertex> = self.transformed_points(this_transform);
        let vertices2: Vec<Vertex> = other.transformed_points(other_transform);
        if vertices1.is_empty() || vertices2.is_empty() {
            return false;
        }

        !has_separating_axis(&vertices1, &vertices2) && !has_separating_axis(&vertices2, &vertices1)
    }
}

/// Implements iterative algorithm of finding axis projection boundaries.
///
fn axis_projection_boundaries(axis: Vector2, vertices: &[Vertex]) -> (f32, f32) {
    let (mut min, mut max): (f32, f32) = (f32::INFINITY, f32::NEG_INFINITY);
    for vertex in vertices {
        let q: f32 = axis.dot_product(*vertex);
        (min, max) = (min.min(q), max.max(q));
    }
    (min, max)
}
/// Returns whether any edge normal of `owner` separates projections of `owner` and `other`.
///
/// Zero-length edges produce null axis which cannot separate anything, so they are skipped.
///
fn has_separating_axis(owner: &[Vertex], other: &[Vertex]) -> bool {
    for (i, a) in owner.iter().enumerate() {
        let b: Vertex = owner[(i + 1) % owner.len()];
        let edge: Vector2 = b - *a;
        if edge.sqr_magnitude() == 0.0 {
            continue;
        }
        let normal: Vector2 = Vector2::new(-edge.y, edge.x);

        let (min1, max1): (f32, f32) = axis_projection_boundaries(normal, owner);
        let (min2, max2): (f32, f32) = axis_projection_boundaries(normal, other);
        if max1 < min2 || max2 < min1 {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{Collider, ColliderType};
    use crate::mathcore::{
        shapes::Rect,
        transforms::Transform,
        vectors::{Vector2, Vertex},
    };

    fn at(x: f32, y: f32) -> Transform {
        Transform::from_position(Vector2::new(x, y))
    }
    fn square(half: f32) -> Collider {
        Collider::polygon(vec![
            Vertex::new(-half, -half),
            Vertex::new(half, -half),
            Vertex::new(half, half),
            Vertex::new(-half, half),
        ])
    }

    #[test]
    fn box_collider() {
        let box1: Collider = Collider::rectangle(100.0, 50.0);
        assert_eq!(box1.collider_type(), ColliderType::Box);
        assert_eq!(
            box1.bounds(&Transform::default()),
            Rect::new(-50.0, -25.0, 100.0, 50.0)
        );

        let box1: Collider = Collider::rectangle(100.0, 100.0);
        let box2: Collider = Collider::rectangle(100.0, 100.0);
        assert!(box1.check_collision(&box2, &at(0.0, 0.0), &at(50.0, 50.0)));
        assert!(!box1.check_collision(&box2, &at(0.0, 0.0), &at(150.0, 150.0)));
        assert!(!box1.check_collision(&box2, &at(0.0, 0.0), &at(100.0, 0.0)));
        assert!(box1.check_collision(&box2, &at(0.0, 0.0), &at(99.0, 0.0)));
    }

    #[test]
    fn box_collider_with_scale() {
        let box1: Collider = Collider::rectangle(100.0, 100.0);
        let box2: Collider = Collider::rectangle(100.0, 100.0);

        let mut transform1: Transform = at(0.0, 0.0);
        transform1.scale = Vector2::new(0.5, 0.5);
        assert!(!box1.check_collision(&box2, &transform1, &at(75.0, 0.0)));
        assert!(box1.check_collision(&box2, &transform1, &at(25.0, 0.0)));
    }

    #[test]
    fn box_symmetry() {
        let box1: Collider = Collider::rectangle(30.0, 70.0);
        let box2: Collider = Collider::rectangle(55.0, 10.0);
        for (x, y) in [(0.0, 0.0), (42.0, 0.0), (42.5, 40.0), (10.0, -39.0), (-43.0, 5.0)] {
            let (t1, t2): (Transform, Transform) = (at(0.0, 0.0), at(x, y));
            assert_eq!(
                box1.check_collision(&box2, &t1, &t2),
                box2.check_collision(&box1, &t2, &t1)
            );
        }
    }

    #[test]
    fn circle_collider() {
        let circle1: Collider = Collider::circle(100.0);
        let circle2: Collider = Collider::circle(100.0);
        assert!(circle1.check_collision(&circle2, &at(0.0, 0.0), &at(50.0, 0.0)));
        assert!(circle1.check_collision(&circle2, &at(0.0, 0.0), &at(99.0, 0.0)));
        assert!(!circle1.check_collision(&circle2, &at(0.0, 0.0), &at(100.0, 0.0)));
        assert!(!circle1.check_collision(&circle2, &at(0.0, 0.0), &at(150.0, 0.0)));

        // diagonal distance is ~98.99, which would miss if bounds were used
        assert!(circle1.check_collision(&circle2, &at(0.0, 0.0), &at(70.0, 70.0)));
        assert!(!circle1.check_collision(&circle2, &at(0.0, 0.0), &at(71.0, 71.0)));
    }

    #[test]
    fn circle_ignores_vertical_scale() {
        let circle: Collider = Collider::circle(100.0);
        let mut squashed: Transform = at(0.0, 0.0);
        squashed.scale = Vector2::new(1.0, 0.1);
        assert!(circle.check_collision(&circle, &squashed, &at(0.0, 90.0)));
    }

    #[test]
    fn polygon_collider() {
        let poly1: Collider = square(50.0);
        assert_eq!(poly1.collider_type(), ColliderType::Polygon);
        assert_eq!(poly1.points().len(), 4);
        assert_eq!(poly1.points()[2], Vertex::new(50.0, 50.0));
        assert_eq!((poly1.width(), poly1.height()), (100.0, 100.0));

        let poly2: Collider = square(50.0);
        assert!(poly1.check_collision(&poly2, &at(0.0, 0.0), &at(25.0, 25.0)));
        assert!(!poly1.check_collision(&poly2, &at(0.0, 0.0), &at(150.0, 150.0)));
    }

    #[test]
    fn polygon_rotation() {
        let poly: Collider = square(50.0);
        let mut rotated: Transform = at(0.0, 0.0);
        rotated.rotation = 45.0;

        // Rotated square reaches ~70.7 along x axis.
        assert!(poly.check_collision(&poly, &rotated, &at(115.0, 0.0)));
        assert!(!poly.check_collision(&poly, &at(0.0, 0.0), &at(115.0, 0.0)));

        // Corner of the diamond misses the square along diagonal.
        assert!(!poly.check_collision(&poly, &rotated, &at(110.0, 110.0)));
    }

    #[test]
    fn polygon_needs_both_directions() {
        use super::has_separating_axis;

        // Edge normals of the diamond overlap the square, only the square's own edges separate them.
        let poly: Collider = square(50.0);
        let mut diamond: Transform = at(0.0, 0.0);
        diamond.rotation = 45.0;
        let other: Transform = at(125.0, 0.0);

        let vertices1: Vec<Vertex> = poly.transformed_points(&diamond);
        let vertices2: Vec<Vertex> = poly.transformed_points(&other);
        assert!(!has_separating_axis(&vertices1, &vertices2));
        assert!(has_separating_axis(&vertices2, &vertices1));

        assert!(!poly.check_collision(&poly, &diamond, &other));
        assert!(!poly.check_collision(&poly, &other, &diamond));
    }

    #[test]
    fn degenerate_polygons() {
        let empty: Collider = Collider::polygon(Vec::new());
        assert_eq!((empty.width(), empty.height()), (0.0, 0.0));
        assert!(!empty.check_collision(&square(50.0), &at(0.0, 0.0), &at(0.0, 0.0)));
        assert!(!square(50.0).check_collision(&empty, &at(0.0, 0.0), &at(0.0, 0.0)));
        assert!(!empty.check_collision(&empty, &at(0.0, 0.0), &at(0.0, 0.0)));

        let with_duplicate: Collider = Collider::polygon(vec![
            Vertex::new(-50.0, -50.0),
            Vertex::new(50.0, -50.0),
            Vertex::new(50.0, -50.0),
            Vertex::new(50.0, 50.0),
            Vertex::new(-50.0, 50.0),
        ]);
        assert!(with_duplicate.check_collision(&square(50.0), &at(0.0, 0.0), &at(60.0, 0.0)));
        assert!(!with_duplicate.check_collision(&square(50.0), &at(0.0, 0.0), &at(101.0, 0.0)));
    }

    #[test]
    fn mixed_types_use_bounds() {
        let circle: Collider = Collider::circle(100.0);
        let poly: Collider = square(50.0);
        let boxed: Collider = Collider::rectangle(100.0, 100.0);

        // Circles are 98.99 apart along diagonal, but bounds approximation is used for mixed pair.
        assert!(circle.check_collision(&boxed, &at(0.0, 0.0), &at(99.0, 99.0)));
        assert!(poly.check_collision(&circle, &at(0.0, 0.0), &at(99.0, 99.0)));
        assert!(!poly.check_collision(&circle, &at(0.0, 0.0), &at(100.0, 0.0)));
    }

    #[test]
    fn validity() {
        assert!(Collider::rectangle(1.0, 2.0).is_valid());
        assert!(!Collider::rectangle(-1.0, 2.0).is_valid());
        assert!(!Collider::circle(f32::NAN).is_valid());
        assert!(!Collider::polygon(vec![Vertex::new(f32::INFINITY, 0.0)]).is_valid());
    }
}
