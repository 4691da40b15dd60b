use super::model::{Observation, ObservationTable};

// ---------------------------------------------------------------------------
// Row selection
// ---------------------------------------------------------------------------

/// All rows carrying `metric`, in file order.
pub fn metric_rows<'a>(table: &'a ObservationTable, metric: &str) -> Vec<&'a Observation> {
    table
        .rows
        .iter()
        .filter(|row| row.metric == metric)
        .collect()
}

/// The row for one (country, metric) pair, if the extract had it.
pub fn country_row<'a>(
    table: &'a ObservationTable,
    metric: &str,
    country: &str,
) -> Option<&'a Observation> {
    table
        .rows
        .iter()
        .find(|row| row.metric == metric && row.country == country)
}

// ---------------------------------------------------------------------------
// Per-chart shaping
// ---------------------------------------------------------------------------

/// One value per requested country for `metric` in `year`, in the order the
/// countries were given. Absent rows, gaps and unknown year labels all
/// surface as `None`; the renderers decide what a gap means for them.
pub fn series_for_year(
    table: &ObservationTable,
    metric: &str,
    year: &str,
    countries: &[&str],
) -> Vec<Option<f64>> {
    countries
        .iter()
        .map(|country| {
            country_row(table, metric, country).and_then(|row| table.value(row, year))
        })
        .collect()
}

/// Countries ranked ascending by their `year` value for `metric`, restricted
/// to `countries`.
///
/// Gaps count as zero, and the ranking is computed over every country the
/// metric has before the subset is taken, so a target country keeps the rank
/// it earned against the whole field. Ties keep file order.
pub fn ranked_by_year(
    table: &ObservationTable,
    metric: &str,
    year: &str,
    countries: &[&str],
) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = metric_rows(table, metric)
        .into_iter()
        .map(|row| {
            let value = table.value(row, year).unwrap_or(0.0);
            (row.country.clone(), value)
        })
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked
        .into_iter()
        .filter(|(country, _)| countries.contains(&country.as_str()))
        .collect()
}

/// The country's series projected onto the `years` window, gaps replaced by
/// the mean of the values present in that window.
///
/// `None` when the row is absent or the window holds no value at all; callers
/// skip such countries rather than plot a flat invented line.
pub fn mean_filled(
    table: &ObservationTable,
    metric: &str,
    country: &str,
    years: &[String],
) -> Option<Vec<f64>> {
    let row = country_row(table, metric, country)?;
    let window: Vec<Option<f64>> = years.iter().map(|year| table.value(row, year)).collect();
    let present: Vec<f64> = window.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    let mean = present.iter().sum::<f64>() / present.len() as f64;
    Some(window.into_iter().map(|value| value.unwrap_or(mean)).collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const METRIC: &str = "Average precipitation in depth";

    fn row(country: &str, values: Vec<Option<f64>>) -> Observation {
        Observation {
            country: country.to_string(),
            metric: METRIC.to_string(),
            values,
        }
    }

    fn single_year_table(rows: Vec<Observation>) -> ObservationTable {
        ObservationTable::new(vec!["2017".to_string()], rows)
    }

    #[test]
    fn ranking_is_ascending_with_gaps_as_zero() {
        let table = single_year_table(vec![
            row("India", vec![Some(20.0)]),
            row("Pakistan", vec![Some(80.0)]),
            row("Bangladesh", vec![None]),
            row("Nepal", vec![Some(10.0)]),
        ]);
        let countries = ["India", "Bangladesh", "Pakistan", "Nepal"];

        let ranked = ranked_by_year(&table, METRIC, "2017", &countries);
        let order: Vec<&str> = ranked.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(order, vec!["Bangladesh", "Nepal", "India", "Pakistan"]);
        assert_eq!(ranked[0].1, 0.0);
    }

    #[test]
    fn ranking_subsets_after_sorting_the_whole_field() {
        // Bhutan outranks Nepal but is not a target, so it must vanish
        // without disturbing the survivors' relative order.
        let table = single_year_table(vec![
            row("Nepal", vec![Some(10.0)]),
            row("Bhutan", vec![Some(5.0)]),
            row("India", vec![Some(20.0)]),
        ]);
        let ranked = ranked_by_year(&table, METRIC, "2017", &["India", "Nepal"]);
        let order: Vec<&str> = ranked.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(order, vec!["Nepal", "India"]);
    }

    #[test]
    fn ranking_ties_keep_file_order() {
        let table = single_year_table(vec![
            row("Pakistan", vec![Some(7.0)]),
            row("India", vec![Some(7.0)]),
        ]);
        let ranked = ranked_by_year(&table, METRIC, "2017", &["India", "Pakistan"]);
        let order: Vec<&str> = ranked.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(order, vec!["Pakistan", "India"]);
    }

    #[test]
    fn yearly_series_keeps_requested_country_order() {
        let table = single_year_table(vec![
            row("Nepal", vec![Some(1500.0)]),
            row("India", vec![Some(1083.0)]),
        ]);
        let series = series_for_year(&table, METRIC, "2017", &["India", "Bangladesh", "Nepal"]);
        assert_eq!(series, vec![Some(1083.0), None, Some(1500.0)]);
    }

    #[test]
    fn unknown_year_yields_all_gaps() {
        let table = single_year_table(vec![row("India", vec![Some(1083.0)])]);
        let series = series_for_year(&table, METRIC, "1890", &["India"]);
        assert_eq!(series, vec![None]);
    }

    #[test]
    fn mean_fill_replaces_gaps_only() {
        let years: Vec<String> = vec!["2000".into(), "2001".into(), "2002".into()];
        let table = ObservationTable::new(
            years.clone(),
            vec![row("India", vec![Some(2.0), None, Some(4.0)])],
        );
        let filled = mean_filled(&table, METRIC, "India", &years).expect("series");
        assert_eq!(filled, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn mean_fill_averages_over_the_window_only() {
        // 1999 sits outside the requested window and must not pull the mean.
        let table = ObservationTable::new(
            vec!["1999".into(), "2000".into(), "2001".into()],
            vec![row("India", vec![Some(100.0), None, Some(4.0)])],
        );
        let window: Vec<String> = vec!["2000".into(), "2001".into()];
        let filled = mean_filled(&table, METRIC, "India", &window).expect("series");
        assert_eq!(filled, vec![4.0, 4.0]);
    }

    #[test]
    fn mean_fill_refuses_empty_series() {
        let years: Vec<String> = vec!["2000".into(), "2001".into()];
        let table = ObservationTable::new(years.clone(), vec![row("India", vec![None, None])]);
        assert!(mean_filled(&table, METRIC, "India", &years).is_none());
        assert!(mean_filled(&table, METRIC, "Bangladesh", &years).is_none());
    }
}
