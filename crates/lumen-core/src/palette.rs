//! Palette gradients — sparse color stops expanded into dense lookup tables.
//!
//! A [`Palette`] is a list of [`ColorStop`]s, each a color pinned to a
//! normalized position in `[0, 1]`. [`Palette::generate`] samples it into a
//! sequence of `size` colors suitable for a 1D lookup texture.
//!
//! # Algorithm
//! Stops are stably sorted by position, then every consecutive pair is filled,
//! including the wrap pair from the last stop back to the first:
//! ```text
//! index(p) = floor(p × (size − 1))
//!
//! forward pair  : i ∈ [left, right]       → lerp_lab(c1, c2, (i − left) / (right − left))
//! wrap, seamless: i ∈ [left, right + size] → same, written at i mod size
//! wrap, hard    : [0, right) ← c2, [left, size) ← c1
//! ```
//! Interpolation happens in CIE L\*a\*b\* so transitions look even.
//!
//! # Complexity
//! - Generate: O(N log N) sort + O(size) fill

use serde::{Deserialize, Serialize};

use crate::color::{Lab, Rgb};
use crate::error::PaletteError;
use crate::quantize::quantize;

/// A color pinned to a normalized position along the gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Stop color, gamma-encoded sRGB.
    pub color: Rgb,
    /// Position along the gradient, nominally in `[0, 1]`. Not validated.
    pub position: f32,
}

impl ColorStop {
    pub const fn new(color: Rgb, position: f32) -> Self {
        Self { color, position }
    }
}

/// An editable set of color stops.
///
/// Stop order is irrelevant; generation works on a sorted copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Display name. Not used by generation.
    #[serde(default)]
    pub name: String,
    /// Color stops in any order.
    pub stops: Vec<ColorStop>,
    /// Interpolate from the last stop back to the first instead of
    /// holding the end colors.
    #[serde(default)]
    pub seamless: bool,
}

impl Palette {
    pub fn new(name: impl Into<String>, stops: Vec<ColorStop>, seamless: bool) -> Self {
        Self {
            name: name.into(),
            stops,
            seamless,
        }
    }

    /// The built-in red → green → blue cycle.
    pub fn default_rainbow() -> Self {
        Self::new(
            "Default Rainbow",
            vec![
                ColorStop::new(Rgb::new(1.0, 0.0, 0.0), 0.0),
                ColorStop::new(Rgb::new(0.0, 1.0, 0.0), 0.33),
                ColorStop::new(Rgb::new(0.0, 0.0, 1.0), 0.67),
            ],
            true,
        )
    }

    /// Sort stops ascending by position. Stops sharing a position keep
    /// their relative order.
    pub fn sort_stops(&mut self) {
        sort_by_position(&mut self.stops);
    }

    /// Sample the palette into `size` colors.
    ///
    /// Fails with [`PaletteError::InvalidSize`] when `size < 2` and with
    /// [`PaletteError::EmptyPalette`] when there are no stops. Nothing is
    /// allocated on failure.
    ///
    /// Output colors are not clamped. Pixels only reachable through stops
    /// positioned outside `[0, 1]` are left black.
    pub fn generate(&self, size: usize) -> Result<Vec<Rgb>, PaletteError> {
        if size <= 1 {
            tracing::warn!("can't generate a gradient of {size} px");
            return Err(PaletteError::InvalidSize(size));
        }
        if self.stops.is_empty() {
            tracing::warn!("palette '{}' has no color stops", self.name);
            return Err(PaletteError::EmptyPalette);
        }

        let mut stops = self.stops.clone();
        sort_by_position(&mut stops);

        if let [only] = stops.as_slice() {
            return Ok(vec![only.color; size]);
        }

        let mut pixels = vec![Rgb::BLACK; size];
        let count = stops.len();
        for i in 0..count {
            let segment = Segment {
                from: stops[i],
                to: stops[(i + 1) % count],
                wrap: i + 1 == count,
            };
            segment.fill(&mut pixels, self.seamless);
        }

        Ok(pixels)
    }

    /// Sample the palette and quantize it to packed 8-bit RGB.
    ///
    /// The result holds `3 × size` bytes in R, G, B order.
    pub fn generate_bytes(&self, size: usize) -> Result<Vec<u8>, PaletteError> {
        self.generate(size).map(|pixels| quantize(&pixels))
    }
}

fn sort_by_position(stops: &mut [ColorStop]) {
    // `sort_by` is stable; NaN positions order after every finite one.
    stops.sort_by(|a, b| a.position.total_cmp(&b.position));
}

/// Map a normalized position to a pixel index, or `None` if it lands
/// outside the gradient.
fn pixel_index(position: f32, size: usize) -> Option<usize> {
    let index = (position * (size - 1) as f32).floor();
    (index >= 0.0 && index < size as f32).then_some(index as usize)
}

/// A pair of neighboring stops in sorted order.
struct Segment {
    from: ColorStop,
    to: ColorStop,
    /// The pair closing the cycle, from the last stop to the first.
    wrap: bool,
}

impl Segment {
    fn fill(&self, pixels: &mut [Rgb], seamless: bool) {
        let size = pixels.len();
        let (Some(left), Some(mut right)) = (
            pixel_index(self.from.position, size),
            pixel_index(self.to.position, size),
        ) else {
            tracing::debug!(
                "skipping segment {} → {}: outside {size} px gradient",
                self.from.position,
                self.to.position
            );
            return;
        };

        if self.wrap {
            if !seamless {
                pixels[..right].fill(self.to.color);
                pixels[left..].fill(self.from.color);
                return;
            }
            right += size;
        }

        let span = right.saturating_sub(left);
        if span == 0 {
            pixels[left] = self.from.color;
            return;
        }

        let from_lab = self.from.color.to_lab();
        let to_lab = self.to.color.to_lab();
        for step in 0..=span {
            // Endpoints are written verbatim so stop colors survive exactly.
            let color = if step == 0 {
                self.from.color
            } else if step == span {
                self.to.color
            } else {
                Lab::lerp(from_lab, to_lab, step as f32 / span as f32).to_rgb()
            };
            pixels[(left + step) % size] = color;
        }
    }
}
