use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use super::TARGET_COUNTRIES;
use crate::color::{series_color, FLORAL_WHITE};
use crate::data::{filter, ObservationTable};

// ---------------------------------------------------------------------------
// Grouped vertical bar panel
// ---------------------------------------------------------------------------

/// Bar width in group-slot units; four bars cover the middle 0.4 of a slot.
pub const BAR_WIDTH: f64 = 0.1;

/// Horizontal span of series `i` of `n` within the group centred at `center`.
///
/// Spans of one group touch without overlapping and straddle `center`
/// symmetrically, so the group sits centred under its axis tick.
pub fn bar_span(center: f64, i: usize, n: usize) -> (f64, f64) {
    let offset = (i as f64 - (n as f64 - 1.0) / 2.0) * BAR_WIDTH;
    (
        center + offset - BAR_WIDTH / 2.0,
        center + offset + BAR_WIDTH / 2.0,
    )
}

/// One bar per target country for each requested year; gaps (and countries
/// without a row) draw as zero-height bars.
pub fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    table: &ObservationTable,
    metric: &str,
    years: &[u16],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let labels: Vec<String> = years.iter().map(|year| year.to_string()).collect();

    let mut heights: Vec<Vec<f64>> = Vec::with_capacity(TARGET_COUNTRIES.len());
    let mut max = 0.0f64;
    for country in TARGET_COUNTRIES {
        let row = filter::country_row(table, metric, country);
        let values: Vec<f64> = labels
            .iter()
            .map(|year| row.and_then(|row| table.value(row, year)).unwrap_or(0.0))
            .collect();
        for value in &values {
            max = max.max(*value);
        }
        heights.push(values);
    }
    let y_max = if max > 0.0 { max * 1.05 } else { 1.0 };

    let first = years.first().copied().unwrap_or_default();
    let last = years.last().copied().unwrap_or_default();
    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{metric} Trends from {first} to {last}"),
            FontDesc::new(FontFamily::SansSerif, 67.0, FontStyle::Bold),
        )
        .margin(40)
        .x_label_area_size(130)
        .y_label_area_size(170)
        .build_cartesian_2d(-0.5..(years.len() as f64 - 0.5), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(years.len().max(1))
        .x_label_formatter(&|x: &f64| {
            let slot = x.round();
            if (*x - slot).abs() > 1e-6 || slot < 0.0 {
                return String::new();
            }
            labels.get(slot as usize).cloned().unwrap_or_default()
        })
        .x_desc("Year")
        .y_desc(metric)
        .axis_desc_style(("sans-serif", 50))
        .label_style(("sans-serif", 42))
        .draw()?;

    for (i, (country, values)) in TARGET_COUNTRIES.iter().zip(&heights).enumerate() {
        let color = series_color(i);
        chart
            .draw_series(values.iter().enumerate().map(|(slot, value)| {
                let (x0, x1) = bar_span(slot as f64, i, TARGET_COUNTRIES.len());
                Rectangle::new([(x0, 0.0), (x1, *value)], color.filled())
            }))?
            .label(*country)
            .legend(move |(x, y)| Rectangle::new([(x, y - 8), (x + 22, y + 8)], color.filled()));
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

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::{bar_span, BAR_WIDTH};

    const N: usize = 4;

    #[test]
    fn group_bars_are_contiguous_and_disjoint() {
        let spans: Vec<(f64, f64)> = (0..N).map(|i| bar_span(2.0, i, N)).collect();
        for pair in spans.windows(2) {
            assert!((pair[0].1 - pair[1].0).abs() < 1e-12);
        }
        for (i, a) in spans.iter().enumerate() {
            for b in spans.iter().skip(i + 1) {
                assert!(a.1 <= b.0 + 1e-12);
            }
        }
    }

    #[test]
    fn group_is_centred_on_its_tick() {
        let spans: Vec<(f64, f64)> = (0..N).map(|i| bar_span(3.0, i, N)).collect();
        let left = spans.first().unwrap().0;
        let right = spans.last().unwrap().1;
        assert!(((3.0 - left) - (right - 3.0)).abs() < 1e-12);
        assert!(((right - left) - N as f64 * BAR_WIDTH).abs() < 1e-12);
    }

    #[test]
    fn adjacent_year_groups_do_not_collide() {
        let (_, right_edge) = bar_span(0.0, N - 1, N);
        let (left_edge, _) = bar_span(1.0, 0, N);
        assert!(right_edge < left_edge);
    }
}
