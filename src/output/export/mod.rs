//! Export module for simulation results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export
//! format. Each format is an independent implementation in its own
//! sub-module; adding a new format means adding a file, without modifying
//! existing code.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use rnr_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // Full export (all time steps)
//! exporter.export_depletion(&result, None, "depletion.csv")?;
//!
//! // Downsampled export to 500 points
//! exporter.export_depletion(&result, Some(500), "depletion_light.csv")?;
//! ```

pub mod csv;

pub use csv::{CsvConfig, CsvError, CsvExporter};

use crate::simulation::SimulationResult;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so callers can
/// react precisely without boxing.
///
/// # Parameter `n_points`
///
/// - `None`: exports all time steps
/// - `Some(n)`: uniformly downsamples to `n` points, always including the
///   first and last points (the asymptotic remaining count matters for
///   validation against experiments)
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports a depletion series: time, total remaining, instantaneous rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be written or `result` contains
    /// no data.
    fn export_depletion(
        &self,
        result: &SimulationResult,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), Self::Error>;
}
