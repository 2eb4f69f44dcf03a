//! `graphicscore::debug` submodule implements diagnostic drawing of colliders.
//!
//! Box colliders are drawn as outline of their bounds, circles are approximated by
//! closed chain of segments and polygons are drawn as their transformed edge list.
//!

use crate::{
    graphicscore::drawing::{Canvas, DrawError},
    mathcore::{
        collisions::{Collider, ColliderType},
        shapes::Segment,
        transforms::Transform,
        vectors::{Point, Vector2, Vertex},
        Color,
    },
};
use std::f32::consts::TAU;

/// Amount of segments that approximate circle collider outline by default.
///
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 32;

impl Collider {
    /// Draws collider outline with [`Color::RED`] and [`DEFAULT_CIRCLE_SEGMENTS`].
    ///
    /// # Example
    /// ```rust
    /// # use ggscene::graphicscore::drawing::CommandCanvas;
    /// # use ggscene::mathcore::{collisions::Collider, transforms::Transform};
    /// let mut canvas: CommandCanvas = CommandCanvas::new();
    /// Collider::circle(10.0)
    ///     .render_debug(&mut canvas, &Transform::default())
    ///     .expect("Command canvas never fails");
    /// assert_eq!(canvas.segments().count(), 32);
    /// ```
    ///
    pub fn render_debug(
        &self,
        canvas: &mut dyn Canvas,
        transform: &Transform,
    ) -> Result<(), DrawError> {
        self.render_debug_with(canvas, transform, Color::RED, DEFAULT_CIRCLE_SEGMENTS)
    }

    /// Draws collider outline with given color; circles are approximated by `circle_segments` segments.
    ///
    /// Previous draw color of the canvas is restored afterwards, even if drawing fails.
    ///
    pub fn render_debug_with(
        &self,
        canvas: &mut dyn Canvas,
        transform: &Transform,
        color: Color,
        circle_segments: u32,
    ) -> Result<(), DrawError> {
        let previous: Color = canvas.draw_color();
        canvas.set_draw_color(color);
        let result: Result<(), DrawError> = match self.collider_type() {
            ColliderType::Box => canvas.draw_rect(self.bounds(transform)),
            ColliderType::Circle => {
                draw_circle(canvas, transform.position, self.radius(transform), circle_segments)
            }
            ColliderType::Polygon => {
                let vertices: Vec<Vertex> = self.transformed_points(transform);
                canvas.draw_polygon(&vertices)
            }
        };
        canvas.set_draw_color(previous);
        result
    }
}

/// Approximates circle by closed chain of segments.
///
fn draw_circle(
    canvas: &mut dyn Canvas,
    center: Point,
    radius: f32,
    segments: u32,
) -> Result<(), DrawError> {
    let segments: u32 = segments.max(3);
    let step: f32 = TAU / segments as f32;
    let point_at = |i: u32| -> Point {
        let (sin, cos): (f32, f32) = (i as f32 * step).sin_cos();
        center + Vector2::new(cos, sin) * radius
    };

    for i in 0..segments {
        canvas.draw_segment(Segment::from([point_at(i), point_at(i + 1)]))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        graphicscore::drawing::{Canvas, CommandCanvas, DrawCommand},
        mathcore::{
            collisions::Collider,
            shapes::Rect,
            transforms::Transform,
            vectors::{Vector2, Vertex},
            Color,
        },
    };

    #[test]
    fn box_outline() {
        let mut canvas: CommandCanvas = CommandCanvas::new();
        let transform: Transform =
            Transform::new(Vector2::new(10.0, 10.0), Vector2::new(2.0, 1.0), 30.0);
        Collider::rectangle(10.0, 10.0)
            .render_debug_with(&mut canvas, &transform, Color::YELLOW, 8)
            .expect("Command canvas never fails");

        assert_eq!(
            canvas.commands().to_vec(),
            vec![DrawCommand::Rect(Rect::new(0.0, 5.0, 20.0, 10.0), Color::YELLOW)]
        );
        assert_eq!(canvas.draw_color(), Color::RED);
    }

    #[test]
    fn circle_outline() {
        let mut canvas: CommandCanvas = CommandCanvas::new();
        let transform: Transform = Transform::from_position(Vector2::new(5.0, 5.0));
        Collider::circle(20.0)
            .render_debug_with(&mut canvas, &transform, Color::GREEN, 16)
            .expect("Command canvas never fails");

        assert_eq!(canvas.segments().count(), 16);
        for segment in canvas.segments() {
            assert!(((segment.point1 - transform.position).magnitude() - 10.0).abs() < 0.001);
        }
        let first: Vector2 = canvas.segments().next().expect("Circle was drawn").point1;
        let last: Vector2 = canvas.segments().last().expect("Circle was drawn").point2;
        assert_eq!(first, last);
    }

    #[test]
    fn polygon_outline() {
        let mut canvas: CommandCanvas = CommandCanvas::new();
        let triangle: Collider = Collider::polygon(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.0),
            Vertex::new(0.0, 1.0),
        ]);
        let transform: Transform =
            Transform::new(Vector2::new(1.0, 1.0), Vector2::new(2.0, 2.0), 0.0);
        triangle
            .render_debug(&mut canvas, &transform)
            .expect("Command canvas never fails");

        let points: Vec<Vector2> = canvas.segments().map(|segment| segment.point1).collect();
        assert_eq!(
            points,
            vec![
                Vector2::new(1.0, 1.0),
                Vector2::new(3.0, 1.0),
                Vector2::new(1.0, 3.0)
            ]
        );
    }
}
