use deduct_ui_graphics::Point;

/// The kind of a normalized pointer or touch event.
///
/// Mouse and touch streams are kept apart because the editor's interaction
/// state machines treat them differently: mouse selection persists after
/// release, touch selection clears as soon as the gesture ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Up,
    Move,
    TouchStart,
    TouchEnd,
    TouchCancel,
    TouchMove,
}

impl PointerEventKind {
    /// Returns true for events originating from a touch screen.
    pub fn is_touch(self) -> bool {
        matches!(
            self,
            PointerEventKind::TouchStart
                | PointerEventKind::TouchEnd
                | PointerEventKind::TouchCancel
                | PointerEventKind::TouchMove
        )
    }

    /// Returns true for events that end a press or gesture.
    pub fn ends_gesture(self) -> bool {
        matches!(
            self,
            PointerEventKind::Up | PointerEventKind::TouchEnd | PointerEventKind::TouchCancel
        )
    }
}

/// A pointer or touch event in canvas pixel coordinates.
///
/// For multi-touch input only the first active touch point is represented;
/// the platform layer drops the rest before events reach the editor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self { kind, position }
    }

    pub fn at(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self::new(kind, Point::new(x, y))
    }
}
