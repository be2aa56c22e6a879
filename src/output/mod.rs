//! Result export and visualization
//!
//! Consumes [`SimulationResult`](crate::simulation::SimulationResult) series;
//! contains no simulation logic of its own.
//!
//! - [`export`]: write depletion series to files ([`Exporter`] trait, CSV
//!   implementation)
//! - [`visualization`]: depletion-curve plots rendered with `plotters`
//!
//! [`Exporter`]: export::Exporter

pub mod export;
pub mod visualization;

pub use export::{CsvConfig, CsvError, CsvExporter, Exporter};
pub use visualization::{
    plot_distribution, plot_instantaneous_rate, plot_remaining_fraction, PlotConfig,
};
