//! Chart layer: the four panel renderers.
//!
//! Each renderer draws onto a caller-supplied drawing area, reads the shared
//! `ObservationTable` by reference and never fills its own background; the
//! composition driver owns the canvas.

pub mod bars;
pub mod hbar;
pub mod line;
pub mod pie;

/// The four economies every panel compares, in palette order.
pub const TARGET_COUNTRIES: [&str; 4] = ["India", "Bangladesh", "Pakistan", "Nepal"];
