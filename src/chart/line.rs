use anyhow::Result;
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use super::TARGET_COUNTRIES;
use crate::color::{series_color, FLORAL_WHITE};
use crate::data::{filter, ObservationTable};

// ---------------------------------------------------------------------------
// Multi-series trend panel
// ---------------------------------------------------------------------------

/// Inclusive year window every trend line covers.
const FIRST_YEAR: u16 = 2000;
const LAST_YEAR: u16 = 2020;

const GRID_GRAY: RGBColor = RGBColor(176, 176, 176);

/// One gap-filled line with point markers per target country over the fixed
/// window. A country without a row, or without a single value inside the
/// window, is skipped rather than drawn flat.
pub fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    table: &ObservationTable,
    metric: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let labels: Vec<String> = (FIRST_YEAR..=LAST_YEAR).map(|year| year.to_string()).collect();

    let mut series = Vec::new();
    let mut max = 0.0f64;
    for (i, country) in TARGET_COUNTRIES.iter().enumerate() {
        let Some(values) = filter::mean_filled(table, metric, country, &labels) else {
            debug!("no {metric} data for {country}; skipping its trend line");
            continue;
        };
        for value in &values {
            max = max.max(*value);
        }
        series.push((i, *country, values));
    }
    let y_max = if max > 0.0 { max * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("Trends in {metric} ({FIRST_YEAR}-{LAST_YEAR})"),
            FontDesc::new(FontFamily::SansSerif, 67.0, FontStyle::Bold),
        )
        .margin(40)
        .x_label_area_size(130)
        .y_label_area_size(170)
        // One year of slack keeps the end markers off the plot border.
        .build_cartesian_2d(
            (i32::from(FIRST_YEAR) - 1)..(i32::from(LAST_YEAR) + 1),
            0.0..y_max,
        )?;

    chart
        .configure_mesh()
        .x_labels(5)
        .y_labels(6)
        .light_line_style(&TRANSPARENT)
        .bold_line_style(&GRID_GRAY)
        .x_desc("Year")
        .y_desc(metric)
        .axis_desc_style(("sans-serif", 50))
        .label_style(("sans-serif", 42))
        .draw()?;

    for (i, country, values) in series {
        let color = series_color(i);
        let points: Vec<(i32, f64)> = (FIRST_YEAR..=LAST_YEAR)
            .map(i32::from)
            .zip(values)
            .collect();
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(6)))?
            .label(country)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(6))
            });
        // Unlabelled, so the legend stays one entry per country.
        chart.draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 10, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(FLORAL_WHITE.filled())
        .border_style(&BLACK)
        .label_font(("sans-serif", 42))
        .draw()?;

    Ok(())
}
