//! Translates winit window events into the normalized pointer stream the
//! editor consumes.

use deduct_foundation::{PointerEvent, PointerEventKind};
use deduct_ui_graphics::Point;
use winit::dpi::PhysicalPosition;
use winit::event::TouchPhase;

/// Scale-factor-aware event translation for desktop windows.
///
/// Touch input is reduced to a single logical pointer: the first active
/// touch id wins and every other touch point is dropped until it ends.
pub struct DesktopWinitPlatform {
    scale_factor: f64,
    active_touch: Option<u64>,
}

impl DesktopWinitPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            active_touch: None,
        }
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    /// Converts a physical window position into logical canvas coordinates.
    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point {
            x: (position.x / self.scale_factor) as f32,
            y: (position.y / self.scale_factor) as f32,
        }
    }

    /// Builds a normalized mouse event at the given physical position.
    pub fn pointer_event(
        &self,
        kind: PointerEventKind,
        position: PhysicalPosition<f64>,
    ) -> PointerEvent {
        PointerEvent::new(kind, self.pointer_position(position))
    }

    /// Builds a normalized touch event, or `None` when the touch point is
    /// not the tracked first touch.
    pub fn touch_event(
        &mut self,
        phase: TouchPhase,
        id: u64,
        location: PhysicalPosition<f64>,
    ) -> Option<PointerEvent> {
        let kind = match phase {
            TouchPhase::Started => {
                if self.active_touch.is_some() {
                    return None;
                }
                self.active_touch = Some(id);
                PointerEventKind::TouchStart
            }
            TouchPhase::Moved => {
                if self.active_touch != Some(id) {
                    return None;
                }
                PointerEventKind::TouchMove
            }
            TouchPhase::Ended => {
                if self.active_touch != Some(id) {
                    return None;
                }
                self.active_touch = None;
                PointerEventKind::TouchEnd
            }
            TouchPhase::Cancelled => {
                if self.active_touch != Some(id) {
                    return None;
                }
                self.active_touch = None;
                PointerEventKind::TouchCancel
            }
        };
        Some(PointerEvent::new(kind, self.pointer_position(location)))
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}
