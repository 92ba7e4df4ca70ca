//! Framebuffer renderer backend.
//!
//! Rasterizes the editor's drawing calls straight into an RGBA byte buffer,
//! typically the frame handed out by the `pixels` swapchain in the desktop
//! app. No GPU work happens here; rules are rectangles, one-pixel lines,
//! and a tiny embedded glyph set for the rule-label alphabet.

mod glyphs;
mod surface;

pub use surface::FrameSurface;
