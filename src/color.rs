use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Fixed palette
// ---------------------------------------------------------------------------

/// Series colour for India.
pub const OLIVE: RGBColor = RGBColor(128, 128, 0);
/// Series colour for Bangladesh.
pub const DARK_KHAKI: RGBColor = RGBColor(189, 183, 107);
/// Series colour for Pakistan.
pub const SLATE_GRAY: RGBColor = RGBColor(112, 128, 144);
/// Series colour for Nepal.
pub const DIM_GRAY: RGBColor = RGBColor(105, 105, 105);

/// Figure and legend background.
pub const FLORAL_WHITE: RGBColor = RGBColor(255, 250, 240);

/// Muted earth-tone palette, one entry per target country, in the same order
/// as `chart::TARGET_COUNTRIES`.
pub const SERIES_COLORS: [RGBColor; 4] = [OLIVE, DARK_KHAKI, SLATE_GRAY, DIM_GRAY];

/// Colour for series `i`, cycling past the palette end.
pub fn series_color(i: usize) -> RGBColor {
    SERIES_COLORS[i % SERIES_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(series_color(0), OLIVE);
        assert_eq!(series_color(3), DIM_GRAY);
        assert_eq!(series_color(4), OLIVE);
    }
}
