//! Application shell for the Deduct proof canvas.
//!
//! The shell sits between a platform crate (which feeds it normalized
//! pointer events) and a renderer backend (which it draws frames into).
//! It owns the editor and enforces the frame contract: events are applied
//! synchronously as they arrive, and each frame re-runs layout before
//! rendering, so a rendered frame always reflects the latest applied
//! geometry.

use deduct_editor::{RuleEditor, SeedRule};
use deduct_foundation::PointerEvent;
use deduct_render_common::DrawSurface;

/// Drives the editor through per-frame update/render passes.
pub struct AppShell {
    editor: RuleEditor,
    viewport: (f32, f32),
    buffer_size: (u32, u32),
    frame_count: u64,
}

impl AppShell {
    /// Builds a shell whose editor is pre-populated with `seeds`; parsing
    /// seed text (the fallible step) is the host's job.
    pub fn new(seeds: &[SeedRule]) -> Self {
        Self {
            editor: RuleEditor::with_seeds(seeds),
            viewport: (800.0, 600.0),
            buffer_size: (800, 600),
            frame_count: 0,
        }
    }

    pub fn editor(&self) -> &RuleEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut RuleEditor {
        &mut self.editor
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    pub fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.buffer_size = (width, height);
    }

    pub fn buffer_size(&self) -> (u32, u32) {
        self.buffer_size
    }

    /// Applies one normalized input event synchronously through the whole
    /// editor → block → placeholder tree. All mutation happens inside this
    /// call; there is no deferred work.
    pub fn dispatch(&mut self, event: PointerEvent) {
        log::trace!("dispatch {:?} at ({}, {})", event.kind, event.position.x, event.position.y);
        self.editor.handle_event(&event);
    }

    /// Runs one frame: relayout, then clear and redraw the surface.
    pub fn frame(&mut self, surface: &mut dyn DrawSurface) {
        self.editor.update();
        surface.clear();
        self.editor.render(surface);
        self.frame_count += 1;
    }

    /// Number of frames rendered since construction.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Source of frame ticks for [`run_loop`].
///
/// A real host yields once per display refresh and returns `false` when the
/// session ends; tests use [`CountedTicker`] to run an exact number of
/// frames.
pub trait FrameTicker {
    /// Blocks (or not) until the next frame should run; `false` stops the
    /// loop.
    fn tick(&mut self) -> bool;
}

/// Ticker that allows a fixed number of frames.
pub struct CountedTicker {
    remaining: u64,
}

impl CountedTicker {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl FrameTicker for CountedTicker {
    fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Repeats {frame, yield} until the ticker stops.
///
/// The loop never terminates on its own during normal operation; ending the
/// session is the ticker's decision.
pub fn run_loop(shell: &mut AppShell, surface: &mut dyn DrawSurface, ticker: &mut dyn FrameTicker) {
    while ticker.tick() {
        shell.frame(surface);
    }
    log::debug!("frame loop stopped after {} frames", shell.frame_count());
}
