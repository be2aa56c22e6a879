//! CSV export for depletion simulation results
//!
//! Writes the `(time, total_remaining, instantaneous_rate)` series to CSV,
//! readable by Excel, pandas, MATLAB and most analysis tools.
//!
//! # Quick Example
//!
//! ```rust,ignore
//! use rnr_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//! exporter.export_depletion(&result, None, "depletion.csv")?;
//! ```
//!
//! **Output** (`depletion.csv`):
//! ```csv
//! Time (s),Remaining particles,Detachment rate (1/step)
//! 0.000000,1000000.000000,523.000000
//! 1.000000,999477.000000,512.000000
//! ...
//! ```
//!
//! With `include_metadata`, a commented header carries the run parameters:
//! ```csv
//! # Resuspension Simulation Data
//! # model: Rock'n'Roll force balance
//! # dt: 1
//! # time steps: 100
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::output::export::Exporter;
use crate::simulation::SimulationResult;

// =================================================================================================
// Error Type
// =================================================================================================

/// Errors raised during CSV export
#[derive(Debug)]
pub enum CsvError {
    /// Underlying file I/O failure
    Io(std::io::Error),
    /// The result contains no time steps
    EmptyData,
    /// Inconsistent series lengths in the result
    LengthMismatch { time: usize, series: usize },
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvError::Io(e) => write!(f, "CSV write failed: {}", e),
            CsvError::EmptyData => write!(f, "Cannot export an empty result"),
            CsvError::LengthMismatch { time, series } => write!(
                f,
                "Series length {} does not match time grid length {}",
                series, time
            ),
        }
    }
}

impl std::error::Error for CsvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CsvError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CsvError {
    fn from(e: std::io::Error) -> Self {
        CsvError::Io(e)
    }
}

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use rnr_rs::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',     // European CSV
///     precision: 10,      // high precision
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Write the result metadata as commented header lines (default: false)
    pub include_metadata: bool,

    /// Header for the time column
    pub time_header: String,

    /// Header for the remaining-count column
    pub remaining_header: String,

    /// Header for the rate column
    pub rate_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
            time_header: "Time (s)".to_string(),
            remaining_header: "Remaining particles".to_string(),
            rate_header: "Detachment rate (1/step)".to_string(),
        }
    }
}

// =================================================================================================
// Exporter
// =================================================================================================

/// CSV implementation of the [`Exporter`] trait
#[derive(Clone, Default)]
pub struct CsvExporter {
    /// Formatting options
    pub config: CsvConfig,
}

impl CsvExporter {
    /// Create an exporter with a custom configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Indices of the rows to write: all of them, or `n` uniformly spaced
    /// ones that always include the first and last rows.
    fn sample_indices(len: usize, n_points: Option<usize>) -> Vec<usize> {
        match n_points {
            None => (0..len).collect(),
            Some(n) if n >= len || n < 2 => (0..len).collect(),
            Some(n) => {
                let mut indices: Vec<usize> = (0..n)
                    .map(|i| i * (len - 1) / (n - 1))
                    .collect();
                indices.dedup();
                indices
            }
        }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_depletion(
        &self,
        result: &SimulationResult,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), Self::Error> {
        if result.is_empty() {
            return Err(CsvError::EmptyData);
        }
        if result.total_remaining.len() != result.time.len() {
            return Err(CsvError::LengthMismatch {
                time: result.time.len(),
                series: result.total_remaining.len(),
            });
        }
        if result.instantaneous_rate.len() != result.time.len() {
            return Err(CsvError::LengthMismatch {
                time: result.time.len(),
                series: result.instantaneous_rate.len(),
            });
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let c = &self.config;

        if c.include_metadata {
            writeln!(writer, "# Resuspension Simulation Data")?;
            let mut entries: Vec<_> = result.metadata.iter().collect();
            entries.sort();
            for (key, value) in entries {
                writeln!(writer, "# {}: {}", key, value)?;
            }
            writeln!(writer, "#")?;
        }

        writeln!(
            writer,
            "{}{}{}{}{}",
            c.time_header, c.delimiter, c.remaining_header, c.delimiter, c.rate_header
        )?;

        for i in Self::sample_indices(result.len(), n_points) {
            writeln!(
                writer,
                "{:.p$}{}{:.p$}{}{:.p$}",
                result.time[i],
                c.delimiter,
                result.total_remaining[i],
                c.delimiter,
                result.instantaneous_rate[i],
                p = c.precision
            )?;
        }

        writer.flush()?;
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
