use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use super::model::{Observation, ObservationTable};

// ---------------------------------------------------------------------------
// Dataset layout constants
// ---------------------------------------------------------------------------

/// Rows of export metadata before the header record.
const PROLOGUE_ROWS: usize = 4;

/// Short label for total freshwater withdrawals (billion m³).
pub const WITHDRAWALS_TOTAL: &str = "Annual freshwater withdrawals total";
/// Short label for withdrawals as % of internal renewable resources.
pub const WITHDRAWALS_PCT_INTERNAL: &str =
    "Annual freshwater withdrawals percentage internal resources";
/// Short label for average precipitation in depth (mm/year).
pub const PRECIPITATION_DEPTH: &str = "Average precipitation in depth";
/// Short label for irrigated share of agricultural land (%).
pub const IRRIGATED_LAND: &str = "Agricultural irrigated land";

/// Verbose World Bank indicator names mapped to the short chart labels.
/// Rows with any other indicator are dropped during normalisation.
pub const METRIC_LABELS: [(&str, &str); 4] = [
    (
        "Annual freshwater withdrawals, total (billion cubic meters)",
        WITHDRAWALS_TOTAL,
    ),
    (
        "Annual freshwater withdrawals, total (% of internal resources)",
        WITHDRAWALS_PCT_INTERNAL,
    ),
    (
        "Average precipitation in depth (mm per year)",
        PRECIPITATION_DEPTH,
    ),
    (
        "Agricultural irrigated land (% of total agricultural land)",
        IRRIGATED_LAND,
    ),
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal conditions while reading the dataset. Anything recoverable (bad
/// cells, unknown indicators) is handled inline and never surfaces here.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read dataset {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{} ends before the header row ({} metadata rows expected first)", path.display(), PROLOGUE_ROWS)]
    MissingHeader { path: PathBuf },
    #[error("missing expected column(s) in {}: {columns}", path.display())]
    MissingColumns { path: PathBuf, columns: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and normalise a World Bank climate extract.
///
/// The file layout is fixed: four metadata records, then a header with
/// `Country Name`, `Country Code`, `Indicator Name`, `Indicator Code` and one
/// column per year labelled like `1990 [YR1990]`, then data records. The two
/// code columns are dropped, year headers are stripped to the bare label,
/// cells are coerced to finite numbers (`None` on anything else, including
/// the `..` placeholder), and only rows for the four mapped indicators are
/// kept.
pub fn load_table(path: &Path) -> Result<ObservationTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let mut records = reader.records();

    // Discard the metadata prologue.
    for _ in 0..PROLOGUE_ROWS {
        if next_record(&mut records, path)?.is_none() {
            return Err(LoadError::MissingHeader {
                path: path.to_path_buf(),
            });
        }
    }
    let Some(header) = next_record(&mut records, path)? else {
        return Err(LoadError::MissingHeader {
            path: path.to_path_buf(),
        });
    };

    // Resolve column roles from the header. The two code columns carry no
    // observation data but a well-formed extract still has them.
    let mut country_idx = None;
    let mut metric_idx = None;
    let mut country_code = false;
    let mut metric_code = false;
    let mut year_columns: Vec<(usize, String)> = Vec::new();
    for (idx, name) in header.iter().enumerate() {
        match name.trim() {
            "Country Name" => country_idx = Some(idx),
            "Country Code" => country_code = true,
            "Indicator Name" => metric_idx = Some(idx),
            "Indicator Code" => metric_code = true,
            name if name.contains("[YR") => {
                year_columns.push((idx, bare_year_label(name)));
            }
            _ => {}
        }
    }

    let (country_idx, metric_idx) = match (country_idx, metric_idx) {
        (Some(country), Some(metric)) if country_code && metric_code => (country, metric),
        _ => {
            let mut missing = Vec::new();
            if country_idx.is_none() {
                missing.push("Country Name");
            }
            if !country_code {
                missing.push("Country Code");
            }
            if metric_idx.is_none() {
                missing.push("Indicator Name");
            }
            if !metric_code {
                missing.push("Indicator Code");
            }
            return Err(LoadError::MissingColumns {
                path: path.to_path_buf(),
                columns: missing.join(", "),
            });
        }
    };

    // Normalise the data records.
    let mut rows = Vec::new();
    let mut dropped = 0usize;
    while let Some(record) = next_record(&mut records, path)? {
        let Some(metric) = metric_label(record.get(metric_idx).unwrap_or("")) else {
            // Unmapped indicator (or trailing export footer): filtered out.
            dropped += 1;
            continue;
        };
        let country = record.get(country_idx).unwrap_or("").trim().to_string();
        let values = year_columns
            .iter()
            .map(|(idx, _)| coerce(record.get(*idx).unwrap_or("")))
            .collect();
        rows.push(Observation {
            country,
            metric: metric.to_string(),
            values,
        });
    }
    debug!("dropped {dropped} rows with unmapped indicators");

    let years = year_columns.into_iter().map(|(_, label)| label).collect();
    Ok(ObservationTable::new(years, rows))
}

// ---------------------------------------------------------------------------
// Record-level helpers
// ---------------------------------------------------------------------------

fn next_record(
    records: &mut csv::StringRecordsIter<'_, std::fs::File>,
    path: &Path,
) -> Result<Option<csv::StringRecord>, LoadError> {
    match records.next() {
        Some(Ok(record)) => Ok(Some(record)),
        Some(Err(source)) => Err(LoadError::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(None),
    }
}

/// `"1990 [YR1990]"` → `"1990"`.
fn bare_year_label(header: &str) -> String {
    header
        .split('[')
        .next()
        .unwrap_or(header)
        .trim()
        .to_string()
}

/// Parse one raw cell; anything non-numeric or non-finite becomes a gap.
fn coerce(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Exact-match lookup of the short label for a verbose indicator name.
fn metric_label(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    METRIC_LABELS
        .iter()
        .find(|(verbose, _)| *verbose == raw)
        .map(|(_, short)| *short)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
