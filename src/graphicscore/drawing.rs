//! `graphicscore::drawing` submodule defines [`Canvas`] trait - rendering collaborator that
//! scenes, game objects and sprites draw on, and [`Sprite`] trait - visual representation of a game object.
//!
//! `ggscene` never interprets what canvas does with drawn primitives; it only emits them.
//! [`CommandCanvas`] records emitted primitives, which is useful for headless runs and tests.
//! With `sdl2` feature enabled, [`Canvas`] is also implemented for `sdl2::render::Canvas`.
//!

use crate::mathcore::{
    shapes::{Rect, Segment},
    transforms::Transform,
    vectors::Point,
    Color,
};
use std::fmt;
use thiserror::Error;

/// [`DrawError`] enum lists errors that can be reported by rendering backend.
///
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DrawError {
    /// Backend refused to draw primitive.
    ///
    #[error("rendering backend failed: {0}")]
    Backend(String),
}

/// [`Canvas`] trait defines drawing methods that should be implemented on any canvas.
///
/// Every canvas allows drawing graphical primitives (segments, rectangles and polygons) with selected color.
///
/// # Example
/// ```rust
/// # use ggscene::graphicscore::drawing::{Canvas, CommandCanvas};
/// # use ggscene::mathcore::{Color, vectors::Point};
/// let mut canvas: CommandCanvas = CommandCanvas::new();
/// canvas.set_draw_color(Color::GREEN);
/// canvas.draw_polygon(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)])
///     .expect("Command canvas never fails");
/// assert_eq!(canvas.segments().count(), 3);
/// assert_eq!(canvas.draw_color(), Color::GREEN);
/// ```
///
pub trait Canvas {
    /// Sets new drawing color to the canvas.
    ///
    /// This will affect color of graphical primitives that are drawn after this call.
    ///
    fn set_draw_color(&mut self, color: Color);
    /// Returns color that is currently used for drawing.
    ///
    fn draw_color(&self) -> Color;

    /// Draws segment on the canvas.
    ///
    fn draw_segment(&mut self, segment: Segment) -> Result<(), DrawError>;
    /// Draws outline of axis-aligned rectangle on the canvas.
    ///
    fn draw_rect(&mut self, rect: Rect) -> Result<(), DrawError> {
        self.draw_polygon(&rect.corners())
    }
    /// Draws closed polygon outline (last vertex is connected to the first one).
    ///
    fn draw_polygon(&mut self, polygon: &[Point]) -> Result<(), DrawError> {
        let length: usize = polygon.len();
        for i in 0..length {
            self.draw_segment(Segment::from([polygon[i], polygon[(i + 1) % length]]))?;
        }
        Ok(())
    }
}

/// [`Sprite`] trait defines visual representation that can be attached to a game object.
///
/// Sprite is shared between game objects, so rendering only borrows it;
/// transform of the object that is rendered is passed on every call.
///
pub trait Sprite: fmt::Debug {
    /// Draws sprite at given transform.
    ///
    fn render(&self, canvas: &mut dyn Canvas, transform: &Transform) -> Result<(), DrawError>;
}

/// [`DrawCommand`] enum lists primitives that [`CommandCanvas`] records.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Segment drawn with color.
    ///
    Segment(Segment, Color),
    /// Rectangle outline drawn with color.
    ///
    Rect(Rect, Color),
}

/// [`CommandCanvas`] struct is a headless canvas that records every drawn primitive.
///
#[derive(Clone, Debug, Default)]
pub struct CommandCanvas {
    /// Color that is currently used for drawing.
    ///
    color: Color,
    /// Recorded primitives.
    ///
    commands: Vec<DrawCommand>,
}
impl CommandCanvas {
    /// Constructs empty canvas that draws with [`Color::RED`].
    ///
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded commands in order of drawing.
    ///
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
    /// Returns iterator over recorded segments.
    ///
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Segment(segment, _) => Some(segment),
            DrawCommand::Rect(..) => None,
        })
    }
    /// Returns iterator over recorded rectangles.
    ///
    pub fn rects(&self) -> impl Iterator<Item = &Rect> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect(rect, _) => Some(rect),
            DrawCommand::Segment(..) => None,
        })
    }
    /// Forgets all recorded commands.
    ///
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}
impl Canvas for CommandCanvas {
    fn set_draw_color(&mut self, color: Color) {
        self.color = color;
    }
    fn draw_color(&self) -> Color {
        self.color
    }

    fn draw_segment(&mut self, segment: Segment) -> Result<(), DrawError> {
        self.commands.push(DrawCommand::Segment(segment, self.color));
        Ok(())
    }
    fn draw_rect(&mut self, rect: Rect) -> Result<(), DrawError> {
        self.commands.push(DrawCommand::Rect(rect, self.color));
        Ok(())
    }
}

#[cfg(feature = "sdl2")]
mod sdl {
    use super::{Canvas, DrawError};
    use crate::mathcore::{
        shapes::{Rect, Segment},
        Color,
    };
    use sdl2::{
        pixels::Color as SdlColor,
        rect::FRect as SdlFRect,
        render::{Canvas as SdlCanvas, RenderTarget},
    };

    // All functions that are providing gate between `ggscene` and `sdl2` stay private to this module.
    impl<T: RenderTarget> Canvas for SdlCanvas<T> {
        fn set_draw_color(&mut self, color: Color) {
            SdlCanvas::set_draw_color(self, SdlColor::RGBA(color.r, color.g, color.b, color.a));
        }
        fn draw_color(&self) -> Color {
            let (r, g, b, a): (u8, u8, u8, u8) = SdlCanvas::draw_color(self).rgba();
            Color { r, g, b, a }
        }

        fn draw_segment(&mut self, segment: Segment) -> Result<(), DrawError> {
            self.draw_fline(
                (segment.point1.x, segment.point1.y),
                (segment.point2.x, segment.point2.y),
            )
            .map_err(DrawError::Backend)
        }
        fn draw_rect(&mut self, rect: Rect) -> Result<(), DrawError> {
            self.draw_frect(SdlFRect::new(rect.x, rect.y, rect.width, rect.height))
                .map_err(DrawError::Backend)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Canvas, CommandCanvas, DrawCommand};
    use crate::mathcore::{
        shapes::{Rect, Segment},
        vectors::Point,
        Color,
    };

    #[test]
    fn command_canvas() {
        let mut canvas: CommandCanvas = CommandCanvas::new();
        assert_eq!(canvas.draw_color(), Color::RED);

        canvas
            .draw_rect(Rect::new(0.0, 0.0, 1.0, 1.0))
            .expect("Command canvas never fails");
        canvas.set_draw_color(Color::BLUE);
        canvas
            .draw_segment(Segment::from([Point::zero(), Point::one()]))
            .expect("Command canvas never fails");

        assert_eq!(
            canvas.commands().to_vec(),
            vec![
                DrawCommand::Rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED),
                DrawCommand::Segment(Segment::from([Point::zero(), Point::one()]), Color::BLUE),
            ]
        );
        assert_eq!(canvas.rects().count(), 1);

        canvas.clear();
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn polygon_is_closed() {
        let mut canvas: CommandCanvas = CommandCanvas::new();
        let square: [Point; 4] = Rect::new(0.0, 0.0, 2.0, 2.0).corners();
        canvas
            .draw_polygon(&square)
            .expect("Command canvas never fails");

        let last: &Segment = canvas.segments().last().expect("Four segments were drawn");
        assert_eq!(*last, Segment::from([Point::new(0.0, 2.0), Point::new(0.0, 0.0)]));

        canvas.clear();
        canvas.draw_polygon(&[]).expect("Command canvas never fails");
        assert_eq!(canvas.segments().count(), 0);
    }
}
