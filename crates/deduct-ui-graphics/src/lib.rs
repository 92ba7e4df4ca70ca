//! Pure math/data for drawing & units in the Deduct proof canvas.
//!
//! This crate contains the geometry primitives and color definitions shared
//! by the editor core and the renderer backends. Everything here is plain
//! data in canvas pixel space; no drawing happens in this crate.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
}
