//! Adhesion-force distribution discretization
//!
//! This module turns a continuous adhesion-force probability density into a
//! binned particle population, the object the depletion engine operates on.
//!
//! # Core Concepts
//!
//! - **[`AdhesionPdf`]**: trait for probability densities over the normalized
//!   adhesion-force domain — the strategy seam for swapping in custom PDFs
//! - **[`BiasiLognormal`]**: the built-in default, a lognormal whose geometric
//!   parameters follow the Biasi empirical correlation in particle radius
//! - **[`DistributionBuilder`]**: integrates the PDF over equal-width bins and
//!   produces an integer-rounded [`Distribution`]
//!
//! # Discretization Losses
//!
//! Two deliberate, deterministic approximations apply during generation:
//! bins whose expected population falls below one particle are zeroed
//! (sub-unit populations are empirically unobservable), and the remaining
//! populations are rounded to the nearest integer. The total generated count
//! may therefore be strictly less than the requested `nparts`. Neither is an
//! error.
//!
//! # Example
//!
//! ```rust
//! use rnr_rs::distribution::DistributionBuilder;
//!
//! let distribution = DistributionBuilder::new(5.0, 1_000, 10, 0.0, 0.5)
//!     .unwrap()
//!     .generate()
//!     .unwrap();
//!
//! assert_eq!(distribution.nbins(), 10);
//! assert_eq!(distribution.edges().len(), 11);
//! assert!(distribution.total_count() <= 1_000.0);
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod builder;
pub mod pdf;
pub mod quadrature;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use builder::{Distribution, DistributionBuilder};
pub use pdf::{AdhesionPdf, BiasiLognormal, biasi_params};
pub use quadrature::integrate;
