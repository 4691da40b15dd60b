use std::path::Path;

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::chart;
use crate::color::FLORAL_WHITE;
use crate::data::{self, ObservationTable};
use crate::render;

// ---------------------------------------------------------------------------
// Fixed report contract
// ---------------------------------------------------------------------------

/// Dataset the report is built from.
pub const INPUT_PATH: &str = "World_Climate data.csv";
/// Finished infographic.
pub const OUTPUT_PATH: &str = "water_resources_south_asia.png";

/// 20 x 8 inch canvas at 300 DPI.
pub const CANVAS_SIZE: (u32, u32) = (6000, 2400);

const HEADLINE: &str =
    "Water Resource Management and Agricultural Trends in South Asia (2000-2020)";
const BYLINE: &str = "Source: World Bank World Development Indicators";

/// Year the share and ranking panels snapshot.
const SNAPSHOT_YEAR: &str = "2017";
/// Years the grouped-bar panel compares.
const GROUP_YEARS: [u16; 5] = [2000, 2005, 2010, 2015, 2020];

const SUMMARY: [&str; 3] = [
    "This infographic vividly illustrates the trends in water resource management and agriculture across India, Bangladesh, Pakistan, and Nepal from 2000 to 2020. It reveals India's substantial share",
    "of regional freshwater withdrawals and Pakistan's alarming rate of over-extraction, which exceeds its renewable internal freshwater resources by 363%. The data also displays fluctuating precipitation patterns",
    "across the region, with no definitive trend, and a noticeable increase in agricultural irrigation, reflecting an escalating reliance on artificial water sources to support agriculture amidst varying climatic conditions.",
];

const SUMMARY_LINE_SPACING: i32 = 62;

// ---------------------------------------------------------------------------
// Composition driver
// ---------------------------------------------------------------------------

/// Render the four-panel report and write it to `out_path`.
pub fn write_report(table: &ObservationTable, out_path: &Path) -> Result<()> {
    let (width, height) = CANVAS_SIZE;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, CANVAS_SIZE).into_drawing_area();
        compose(&root, table)?;
        root.present()?;
    }
    render::write_png(out_path, width, height, &buffer)
}

/// Lay out headline, the 2 x 2 panel grid and the summary caption.
///
/// Text sizes assume a canvas near [`CANVAS_SIZE`]; the layout itself scales
/// with whatever area it is given.
pub fn compose<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    table: &ObservationTable,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&FLORAL_WHITE)?;

    let (width, height) = root.dim_in_pixel();
    let (width, height) = (width as i32, height as i32);

    let headline = FontDesc::new(FontFamily::SansSerif, 100.0, FontStyle::Bold)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw_text(HEADLINE, &headline, (width / 2, height / 50))?;

    let byline = FontDesc::new(FontFamily::SansSerif, 50.0, FontStyle::Normal)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw_text(BYLINE, &byline, (width / 2, height * 2 / 25))?;

    // Headline band above, caption strip below, panels in between.
    let panels = root
        .margin(height * 29 / 200, height * 17 / 200, 0, 0)
        .split_evenly((2, 2));
    chart::pie::draw(&panels[0], table, data::WITHDRAWALS_TOTAL, SNAPSHOT_YEAR)?;
    chart::hbar::draw(&panels[1], table, data::WITHDRAWALS_PCT_INTERNAL)?;
    chart::bars::draw(&panels[2], table, data::PRECIPITATION_DEPTH, &GROUP_YEARS)?;
    chart::line::draw(&panels[3], table, data::IRRIGATED_LAND)?;

    let summary_style = FontDesc::new(FontFamily::SansSerif, 50.0, FontStyle::Italic)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let strip_top = height - height * 17 / 200;
    for (i, line) in SUMMARY.iter().enumerate() {
        let y = strip_top + SUMMARY_LINE_SPACING / 2 + i as i32 * SUMMARY_LINE_SPACING;
        root.draw_text(line, &summary_style, (width / 2, y))?;
    }
    Ok(())
}
