use deduct_render_common::DrawSurface;
use deduct_ui_graphics::{Color, Point, Rect};

use crate::glyphs::{self, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Integer upscale applied to the 5×7 glyph bitmaps.
const GLYPH_SCALE: i32 = 2;

/// A [`DrawSurface`] over a borrowed RGBA framebuffer.
///
/// Wrap the buffer once per redraw, let the shell draw the frame, then hand
/// the buffer back to the swapchain. All drawing clips at the buffer edge.
pub struct FrameSurface<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameSurface<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        if frame.len() < (width as usize) * (height as usize) * 4 {
            log::warn!(
                "framebuffer of {} bytes is smaller than {}x{} RGBA",
                frame.len(),
                width,
                height
            );
        }
        Self {
            frame,
            width,
            height,
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let index = (y as usize * self.width as usize + x as usize) * 4;
        if let Some(pixel) = self.frame.get_mut(index..index + 4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    fn draw_glyph(&mut self, rows: &[u8; GLYPH_HEIGHT], left: i32, top: i32, rgba: [u8; 4]) {
        for (row_index, row) in rows.iter().enumerate() {
            for column in 0..GLYPH_WIDTH {
                if row & (1 << (GLYPH_WIDTH - 1 - column)) == 0 {
                    continue;
                }
                for dy in 0..GLYPH_SCALE {
                    for dx in 0..GLYPH_SCALE {
                        self.set_pixel(
                            left + column as i32 * GLYPH_SCALE + dx,
                            top + row_index as i32 * GLYPH_SCALE + dy,
                            rgba,
                        );
                    }
                }
            }
        }
    }
}

impl DrawSurface for FrameSurface<'_> {
    fn clear(&mut self) {
        let white = Color::WHITE.to_rgba8();
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&white);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rgba = color.to_rgba8();
        let left = rect.x.round() as i32;
        let top = rect.y.round() as i32;
        let right = (rect.x + rect.width).round() as i32;
        let bottom = (rect.y + rect.height).round() as i32;
        for y in top.max(0)..bottom.min(self.height as i32) {
            for x in left.max(0)..right.min(self.width as i32) {
                self.set_pixel(x, y, rgba);
            }
        }
    }

    fn line(&mut self, from: Point, to: Point, color: Color) {
        let rgba = color.to_rgba8();
        let mut x0 = from.x.round() as i32;
        let mut y0 = from.y.round() as i32;
        let x1 = to.x.round() as i32;
        let y1 = to.y.round() as i32;
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let step_x = if x0 < x1 { 1 } else { -1 };
        let step_y = if y0 < y1 { 1 } else { -1 };
        let mut error = dx + dy;
        loop {
            self.set_pixel(x0, y0, rgba);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x0 += step_x;
            }
            if doubled <= dx {
                error += dx;
                y0 += step_y;
            }
        }
    }

    fn text(&mut self, value: &str, anchor: Point, color: Color) {
        let rgba = color.to_rgba8();
        let mut pen = anchor.x.round() as i32;
        let top = anchor.y.round() as i32 - GLYPH_HEIGHT as i32 * GLYPH_SCALE;
        for c in value.chars() {
            let rows = glyphs::glyph(c).unwrap_or(&glyphs::FALLBACK);
            self.draw_glyph(rows, pen, top, rgba);
            pen += (GLYPH_WIDTH as i32 + 1) * GLYPH_SCALE;
        }
    }
}
