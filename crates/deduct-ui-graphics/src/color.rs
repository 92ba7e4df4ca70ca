//! Color definitions.

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);

    /// Builds an opaque color from 8-bit channel values.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Color(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            1.0,
        )
    }

    /// Converts to 8-bit RGBA, clamping each channel.
    pub fn to_rgba8(self) -> [u8; 4] {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.0), channel(self.1), channel(self.2), channel(self.3)]
    }
}
