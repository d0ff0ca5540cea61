//! 8-bit quantization of float colors for texture upload.

use crate::color::Rgb;

/// Pack colors into `R, G, B, R, G, B, …` bytes.
///
/// Each channel is scaled by 255, clamped to `[0, 255]` and rounded half
/// away from zero.
pub fn quantize(colors: &[Rgb]) -> Vec<u8> {
    colors.iter().flat_map(|color| color.to_rgb8()).collect()
}

impl Rgb {
    /// Quantize this color to three bytes.
    pub fn to_rgb8(self) -> [u8; 3] {
        [channel_to_u8(self.r), channel_to_u8(self.g), channel_to_u8(self.b)]
    }
}

fn channel_to_u8(value: f32) -> u8 {
    // NaN survives the clamp and casts to 0.
    (value * 255.0).clamp(0.0, 255.0).round() as u8
}
