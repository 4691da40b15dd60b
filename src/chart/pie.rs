use anyhow::Result;
use log::warn;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use super::TARGET_COUNTRIES;
use crate::color::series_color;
use crate::data::{filter, ObservationTable};

// ---------------------------------------------------------------------------
// Share-of-total pie panel
// ---------------------------------------------------------------------------

/// Arc sampling density for wedge outlines.
const ARC_STEPS: usize = 100;

/// Draw one wedge per target country, sized by its share of `metric` in
/// `year`. Gaps count as zero. When the whole subset sums to zero the panel
/// is left untouched apart from a warning; an all-zero pie has no geometry.
pub fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    table: &ObservationTable,
    metric: &str,
    year: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let shares: Vec<f64> = filter::series_for_year(table, metric, year, &TARGET_COUNTRIES)
        .into_iter()
        .map(|value| value.unwrap_or(0.0))
        .collect();
    let total: f64 = shares.iter().sum();
    if total <= 0.0 {
        warn!("no {metric} data for {year}; leaving the share panel empty");
        return Ok(());
    }

    let (width, height) = area.dim_in_pixel();
    let (width, height) = (width as i32, height as i32);
    let center = (width / 2, height / 2 + height / 18);
    let radius = f64::from(width.min(height)) * 0.3;

    let caption = FontDesc::new(FontFamily::SansSerif, 67.0, FontStyle::Bold)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    area.draw_text(
        &format!("{metric} Distribution in {year}"),
        &caption,
        (width / 2, height / 40),
    )?;

    let pct_style = FontDesc::new(FontFamily::SansSerif, 33.0, FontStyle::Bold)
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));

    // Wedges start at twelve o'clock and sweep clockwise (screen coordinates
    // grow downward, so increasing angles already run clockwise).
    let mut start = -std::f64::consts::FRAC_PI_2;
    for (i, (country, share)) in TARGET_COUNTRIES.iter().zip(&shares).enumerate() {
        if *share <= 0.0 {
            continue;
        }
        let sweep = share / total * std::f64::consts::TAU;
        area.draw(&Polygon::new(
            wedge_points(center, radius, start, sweep),
            series_color(i).filled(),
        ))?;

        let mid = start + sweep / 2.0;
        area.draw_text(
            &format!("{:.1}%", share / total * 100.0),
            &pct_style,
            polar(center, radius * 0.6, mid),
        )?;

        let name_style = FontDesc::new(FontFamily::SansSerif, 42.0, FontStyle::Normal)
            .color(&BLACK)
            .pos(label_anchor(mid));
        area.draw_text(country, &name_style, polar(center, radius * 1.12, mid))?;

        start += sweep;
    }
    Ok(())
}

/// Pie-slice outline: the centre plus the sampled arc over `sweep`.
fn wedge_points(center: (i32, i32), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let mut points = vec![center];
    for step in 0..=ARC_STEPS {
        let theta = start + sweep * step as f64 / ARC_STEPS as f64;
        points.push(polar(center, radius, theta));
    }
    points
}

fn polar(center: (i32, i32), radius: f64, theta: f64) -> (i32, i32) {
    (
        center.0 + (radius * theta.cos()).round() as i32,
        center.1 + (radius * theta.sin()).round() as i32,
    )
}

/// Anchor outer labels so the text extends away from the pie.
fn label_anchor(theta: f64) -> Pos {
    let (sin, cos) = theta.sin_cos();
    let h = if cos > 0.1 {
        HPos::Left
    } else if cos < -0.1 {
        HPos::Right
    } else {
        HPos::Center
    };
    let v = if sin > 0.1 {
        VPos::Top
    } else if sin < -0.1 {
        VPos::Bottom
    } else {
        VPos::Center
    };
    Pos::new(h, v)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Observation;

    const METRIC: &str = "Annual freshwater withdrawals total";

    fn table_with(values: [Option<f64>; 4]) -> ObservationTable {
        let rows = TARGET_COUNTRIES
            .iter()
            .zip(values)
            .map(|(country, value)| Observation {
                country: (*country).to_string(),
                metric: METRIC.to_string(),
                values: vec![value],
            })
            .collect();
        ObservationTable::new(vec!["2017".to_string()], rows)
    }

    fn render(table: &ObservationTable) -> Vec<u8> {
        let mut buffer = vec![0u8; 400 * 300 * 3];
        {
            let area = BitMapBackend::with_buffer(&mut buffer, (400, 300)).into_drawing_area();
            draw(&area, table, METRIC, "2017").expect("render");
            area.present().expect("flush");
        }
        buffer
    }

    #[test]
    fn zero_sum_subset_draws_nothing() {
        let buffer = render(&table_with([None, Some(0.0), None, None]));
        assert!(buffer.iter().all(|byte| *byte == 0));
    }

    #[test]
    fn nonzero_subset_paints_wedges() {
        let buffer = render(&table_with([Some(3.0), Some(1.0), None, Some(1.0)]));
        assert!(buffer.iter().any(|byte| *byte != 0));
    }
}
