//! Palette strip images for previewing generated lookup tables.

use std::path::Path;

use image::RgbImage;

/// Build an image `width × height` where every row is the packed RGB
/// gradient `bytes` (`width = bytes.len() / 3`).
pub fn render_strip(bytes: &[u8], height: u32) -> Result<RgbImage, StripError> {
    if bytes.len() % 3 != 0 {
        return Err(StripError::Misaligned(bytes.len()));
    }
    let width = u32::try_from(bytes.len() / 3).map_err(|_| StripError::TooWide(bytes.len() / 3))?;
    let height = height.max(1);

    RgbImage::from_raw(width, height, bytes.repeat(height as usize))
        .ok_or(StripError::TooWide(width as usize))
}

/// Render and save a strip. The format follows the file extension.
pub fn save_strip(bytes: &[u8], height: u32, path: &Path) -> Result<(), StripError> {
    let strip = render_strip(bytes, height)?;
    strip.save(path).map_err(StripError::Encode)?;
    tracing::info!(
        "wrote {}x{} strip to {}",
        strip.width(),
        strip.height(),
        path.display()
    );
    Ok(())
}

/// Errors that can occur while producing a strip image.
#[derive(Debug, thiserror::Error)]
pub enum StripError {
    #[error("gradient buffer of {0} bytes is not a whole number of RGB pixels")]
    Misaligned(usize),
    #[error("gradient of {0} px is too wide for an image")]
    TooWide(usize),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
}
