//! Layout constants and shared geometry helpers.
//!
//! Every distance on the canvas derives from this handful of constants; the
//! block layout algorithm recomputes all positions from its anchor using
//! them, which is what makes relayout idempotent.

use deduct_ui_graphics::Point;

/// Fixed width of an unfilled placeholder.
pub const SLOT_WIDTH: f32 = 20.0;
/// Fixed height of a placeholder row.
pub const SLOT_HEIGHT: f32 = 20.0;
/// Horizontal gap between sibling input placeholders.
pub const PREMISE_GAP: f32 = 40.0;
/// Vertical gap between a placeholder row and the inference edge.
pub const EDGE_GAP: f32 = 4.0;
/// Horizontal gap between the inference edge and the rule label.
pub const LABEL_GAP: f32 = 4.0;
/// Margin added around a block when selecting or hit-testing it.
pub const SELECT_MARGIN: f32 = 4.0;
/// Advertised width of the rule label text.
pub const LABEL_WIDTH: f32 = 36.0;
/// Label font size; the label baseline is derived from it.
pub const FONT_SIZE: f32 = 20.0;
/// Length of the corner bracket strokes of the selection box.
pub const BRACKET_LENGTH: f32 = 10.0;

/// Vertical rise of an input placeholder that holds a nested block, so the
/// nested proof line stacks above the current one.
pub const NESTED_RISE: f32 = SLOT_HEIGHT + 2.0 * EDGE_GAP;

/// Anchor position of a block whose geometric center tracks the pointer.
pub fn drag_anchor(pointer: Point, width: f32) -> Point {
    Point::new(pointer.x - width / 2.0, pointer.y - SLOT_HEIGHT - EDGE_GAP)
}
