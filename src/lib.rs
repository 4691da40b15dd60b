//! Four-panel water-resource infographic for South Asian climate indicators.
//!
//! The pipeline is a single pass: normalise a World Bank CSV extract into an
//! [`data::ObservationTable`], hand it to the four panel renderers in
//! [`chart`], and let [`report`] compose them onto one 300 DPI canvas.

pub mod chart;
pub mod color;
pub mod data;
pub mod render;
pub mod report;
