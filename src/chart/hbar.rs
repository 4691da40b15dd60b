use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use super::TARGET_COUNTRIES;
use crate::color::series_color;
use crate::data::{filter, ObservationTable};

// ---------------------------------------------------------------------------
// Ranked horizontal bar panel
// ---------------------------------------------------------------------------

/// Fixed ranking year; the extract carries nothing newer with full coverage.
const RANK_YEAR: &str = "2017";

const BAR_HALF_HEIGHT: f64 = 0.4;

/// One horizontal bar per target country, ranked ascending by the 2017 value
/// with gaps as zero, each annotated with its integer percentage at the bar
/// end. The ranking runs over the full indicator row set before the country
/// subset, so the survivors keep the rank they earned against the whole field.
pub fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    table: &ObservationTable,
    indicator: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let ranked = filter::ranked_by_year(table, indicator, RANK_YEAR, &TARGET_COUNTRIES);
    let max = ranked.iter().map(|(_, value)| *value).fold(0.0f64, f64::max);
    // Leave room on the right for the bar-end annotations.
    let x_max = if max > 0.0 { max * 1.18 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{indicator} in {RANK_YEAR}"),
            FontDesc::new(FontFamily::SansSerif, 67.0, FontStyle::Bold),
        )
        .margin(40)
        .x_label_area_size(130)
        .y_label_area_size(250)
        .build_cartesian_2d(0.0..x_max, -0.5..(ranked.len() as f64 - 0.5))?;

    let names: Vec<String> = ranked.iter().map(|(country, _)| country.clone()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .y_labels(names.len().max(1))
        .y_label_formatter(&|y: &f64| {
            let slot = y.round();
            if (*y - slot).abs() > 1e-6 || slot < 0.0 {
                return String::new();
            }
            names.get(slot as usize).cloned().unwrap_or_default()
        })
        .x_desc(format!("{indicator} Value"))
        .axis_desc_style(("sans-serif", 50))
        .label_style(("sans-serif", 42))
        .draw()?;

    let annotation_style = FontDesc::new(FontFamily::SansSerif, 42.0, FontStyle::Bold)
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for (slot, (_, value)) in ranked.iter().enumerate() {
        let y = slot as f64;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(0.0, y - BAR_HALF_HEIGHT), (*value, y + BAR_HALF_HEIGHT)],
            series_color(slot).filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            annotation(*value),
            (*value, y),
            annotation_style.clone(),
        )))?;
    }
    Ok(())
}

/// Integer-truncated percentage label for a bar end.
fn annotation(value: f64) -> String {
    format!("{}%", value.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::annotation;

    #[test]
    fn annotations_truncate_toward_zero() {
        assert_eq!(annotation(363.9), "363%");
        assert_eq!(annotation(79.2), "79%");
        assert_eq!(annotation(0.0), "0%");
    }
}
