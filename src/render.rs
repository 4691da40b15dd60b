use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// DPI-tagged PNG encoding
// ---------------------------------------------------------------------------

/// 300 DPI in the pHYs chunk's unit (pixels per metre).
pub const PIXELS_PER_METRE: u32 = 11_811;

/// Encode a finished RGB raster as a PNG carrying a 300 DPI pHYs tag.
///
/// `rgb` is tightly packed 8-bit RGB, row-major, `width * height * 3` bytes.
pub fn write_png(path: &Path, width: u32, height: u32, rgb: &[u8]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: PIXELS_PER_METRE,
        yppu: PIXELS_PER_METRE,
        unit: png::Unit::Meter,
    }));

    let mut writer = encoder
        .write_header()
        .with_context(|| format!("cannot start PNG stream {}", path.display()))?;
    writer
        .write_image_data(rgb)
        .with_context(|| format!("cannot write PNG data to {}", path.display()))?;
    Ok(())
}
