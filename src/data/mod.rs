//! Data layer: core types, loading, and shaping.
//!
//! ```text
//!  World Bank .csv extract
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse + normalise → ObservationTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────────┐
//!   │ ObservationTable  │  year labels, Vec<Observation>
//!   └──────────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  per-chart shaping: subset, rank, mean-fill
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;

pub use loader::{
    load_table, LoadError, IRRIGATED_LAND, METRIC_LABELS, PRECIPITATION_DEPTH,
    WITHDRAWALS_PCT_INTERNAL, WITHDRAWALS_TOTAL,
};
pub use model::{Observation, ObservationTable};
