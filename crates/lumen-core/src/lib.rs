//! Lumen Core — color gradient engine for palette lookup tables.
//!
//! Turns a sparse set of color stops into a dense, perceptually smooth
//! sequence of colors, optionally cyclic, and quantizes it to 8-bit RGB for
//! upload as a 1D texture. Pure computation; no GPU or windowing dependencies.

pub mod color;
pub mod config;
pub mod error;
pub mod palette;
pub mod quantize;

// Re-exports for convenience.
pub use color::{Lab, Rgb, Xyz};
pub use config::GradientConfig;
pub use error::{ConfigError, PaletteError};
pub use palette::{ColorStop, Palette};
pub use quantize::quantize;
