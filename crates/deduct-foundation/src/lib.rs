//! Foundation elements for the Deduct proof canvas: normalized input events.
//!
//! Platform crates translate their raw windowing events into the types
//! defined here; the editor core consumes only this normalized stream.

pub mod input;

pub use input::*;

pub mod prelude {
    pub use crate::input::{PointerEvent, PointerEventKind};
}
