//! Visualization module for resuspension simulation results
//!
//! Provides plotting built on the `plotters` crate. The output backend is
//! selected by file extension: `.svg` produces vector output, anything else
//! a bitmap (PNG).
//!
//! # Available plots
//!
//! - [`plot_remaining_fraction`] — Remaining surface fraction vs time (log-x)
//! - [`plot_instantaneous_rate`] — Detachment rate vs time (log-log)
//! - [`plot_distribution`]       — Binned adhesion-force histogram
//!
//! # Usage
//!
//! ```rust,ignore
//! use rnr_rs::output::visualization::{plot_remaining_fraction, PlotConfig};
//!
//! let result = engine.run()?;
//! plot_remaining_fraction(&result, "fraction.png", None)?;
//!
//! let config = PlotConfig::depletion("Scenario C, u* = 2 m/s");
//! plot_remaining_fraction(&result, "fraction.svg", Some(&config))?;
//! ```

pub mod config;
pub mod depletion;

pub use config::{PlotConfig, NO_TITLE};
pub use depletion::{plot_distribution, plot_instantaneous_rate, plot_remaining_fraction};
