//! Common rendering contracts shared between renderer backends.
//!
//! The editor core draws through the [`DrawSurface`] trait and never talks
//! to a concrete backend. [`RecordedScene`] is the headless implementation
//! used by tests: it captures every drawing call as a [`DrawOp`] in
//! submission order.

use deduct_ui_graphics::{Color, Point, Rect};

/// Minimal drawing surface required by the editor: filled rectangles,
/// lines, and anchored text in a shared 2D pixel coordinate space.
///
/// Surface lifetime, resizing, and device pixel ratio are the backend's
/// business; the editor only issues drawing calls.
pub trait DrawSurface {
    /// Resets the surface for a fresh frame.
    fn clear(&mut self);

    /// Fills a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws a one-pixel line between two points.
    fn line(&mut self, from: Point, to: Point, color: Color);

    /// Draws text with its baseline starting at `anchor`.
    fn text(&mut self, value: &str, anchor: Point, color: Color);
}

/// A single recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Rect {
        rect: Rect,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
    },
    Text {
        value: String,
        anchor: Point,
        color: Color,
    },
}

/// Headless [`DrawSurface`] that records operations for assertions.
///
/// `clear` drops previously recorded operations, so after a frame the scene
/// holds exactly that frame's drawing calls in submission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedScene {
    operations: Vec<DrawOp>,
}

impl RecordedScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations in submission order.
    pub fn operations(&self) -> &[DrawOp] {
        &self.operations
    }

    /// Consumes the scene and yields the owned operations.
    pub fn into_operations(self) -> Vec<DrawOp> {
        self.operations
    }

    /// Iterates over recorded rectangle fills.
    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Color)> {
        self.operations.iter().filter_map(|op| match op {
            DrawOp::Rect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    /// Iterates over recorded line draws.
    pub fn lines(&self) -> impl Iterator<Item = (&Point, &Point)> {
        self.operations.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, .. } => Some((from, to)),
            _ => None,
        })
    }

    /// Iterates over recorded text draws.
    pub fn texts(&self) -> impl Iterator<Item = (&str, &Point)> {
        self.operations.iter().filter_map(|op| match op {
            DrawOp::Text { value, anchor, .. } => Some((value.as_str(), anchor)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordedScene {
    fn clear(&mut self) {
        self.operations.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.operations.push(DrawOp::Rect { rect, color });
    }

    fn line(&mut self, from: Point, to: Point, color: Color) {
        self.operations.push(DrawOp::Line { from, to, color });
    }

    fn text(&mut self, value: &str, anchor: Point, color: Color) {
        self.operations.push(DrawOp::Text {
            value: value.to_string(),
            anchor,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_operations_in_submission_order() {
        let mut scene = RecordedScene::new();
        scene.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        scene.text("∧I", Point::new(5.0, 5.0), Color::BLACK);
        scene.line(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Color::BLACK);
        assert_eq!(scene.operations().len(), 3);
        assert!(matches!(scene.operations()[0], DrawOp::Rect { .. }));
        assert!(matches!(scene.operations()[1], DrawOp::Text { .. }));
        assert!(matches!(scene.operations()[2], DrawOp::Line { .. }));
    }

    #[test]
    fn clear_starts_a_fresh_frame() {
        let mut scene = RecordedScene::new();
        scene.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        scene.clear();
        assert!(scene.operations().is_empty());
    }
}
