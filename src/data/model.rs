use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Observation – one row of the normalised table
// ---------------------------------------------------------------------------

/// A single (Country, Metric) row with one value slot per year column.
///
/// `values` is aligned with [`ObservationTable::years`]; a `None` entry is a
/// missing data point (the raw cell was empty, `..`, or otherwise
/// non-numeric).
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub country: String,
    pub metric: String,
    pub values: Vec<Option<f64>>,
}

// ---------------------------------------------------------------------------
// ObservationTable – the complete normalised dataset
// ---------------------------------------------------------------------------

/// The parsed dataset: bare year labels plus one [`Observation`] per row.
///
/// Built once by the loader and read immutably by every renderer. Every
/// `Some` value is finite; the loader coerces anything else to `None`.
#[derive(Debug, Clone)]
pub struct ObservationTable {
    /// Bare year labels ("2000", "2001", …) in file order.
    pub years: Vec<String>,
    /// All observation rows, in file order.
    pub rows: Vec<Observation>,
}

impl ObservationTable {
    /// Build a table, asserting the row/column alignment the loader promises.
    pub fn new(years: Vec<String>, rows: Vec<Observation>) -> Self {
        debug_assert!(rows.iter().all(|r| r.values.len() == years.len()));
        ObservationTable { years, rows }
    }

    /// Position of a bare year label, if the file had that column.
    pub fn year_index(&self, year: &str) -> Option<usize> {
        self.years.iter().position(|y| y == year)
    }

    /// Value of `row` for a year label; `None` for gaps and unknown years.
    pub fn value(&self, row: &Observation, year: &str) -> Option<f64> {
        self.year_index(year).and_then(|i| row.values[i])
    }

    /// The distinct metric labels present after normalisation.
    pub fn metrics(&self) -> BTreeSet<&str> {
        self.rows.iter().map(|r| r.metric.as_str()).collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
