//! rnr-rs: Aerosol Resuspension Simulation Framework
//!
//! Simulates the resuspension of aerosol particles from a surface exposed to
//! turbulent airflow, using a discretized Rock'n'Roll-type force-balance model.
//!
//! # Architecture
//!
//! The simulation is a three-stage pipeline:
//!
//! 1. **Distribution discretization** ([`distribution`])
//!    - An adhesion-force probability density is integrated over equal-width
//!      bins to produce an integer particle population per bin.
//!
//! 2. **Resuspension-rate model** ([`physics`])
//!    - Pure functions mapping per-bin adhesion force and flow conditions to
//!      an instantaneous detachment rate, bounded above by the burst frequency.
//!
//! 3. **Depletion loop** ([`simulation`])
//!    - An explicit, causally-ordered time-stepping engine that applies the
//!      per-bin detachment rate to a cloned distribution and records the
//!      depletion curve.
//!
//! # Quick Start
//!
//! ```rust
//! use rnr_rs::distribution::DistributionBuilder;
//! use rnr_rs::physics::FlowProfile;
//! use rnr_rs::simulation::SimulationEngine;
//!
//! fn main() -> Result<(), String> {
//!     // 1. Discretize the adhesion-force distribution (Biasi lognormal)
//!     let distribution = DistributionBuilder::new(5.0, 1_000_000, 50, 0.0, 1.0)?
//!         .generate()?;
//!
//!     // 2. Describe the turbulent flow driving detachment
//!     let flow = FlowProfile::new(
//!         100.0,     // duration (s)
//!         1.0,       // dt (s)
//!         0.0,       // spinup time (s)
//!         1.5,       // target friction velocity (m/s)
//!         1.204,     // fluid density (kg/m3)
//!         1.5e-5,    // kinematic viscosity (m2/s)
//!         0.15,      // surface energy (J/m2)
//!     )?;
//!
//!     // 3. Run the depletion simulation
//!     let mut engine = SimulationEngine::new(&distribution, flow);
//!     let result = engine.run()?;
//!
//!     println!("Remaining particles: {}", result.total_remaining.last().unwrap());
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`distribution`]: Adhesion-force distribution discretization
//! - [`physics`]: Flow profile and resuspension-rate model
//! - [`simulation`]: Depletion engine and parameter sweeps
//! - [`config`]: TOML-backed parameter loading
//! - [`output`]: Result export and visualization

// Core modules
pub mod distribution;
pub mod physics;
pub mod simulation;

// Supporting modules
pub mod config;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use rnr_rs::prelude::*;
    //! ```
    pub use crate::distribution::{AdhesionPdf,
                                  BiasiLognormal,
                                  Distribution,
                                  DistributionBuilder};
    pub use crate::physics::FlowProfile;
    pub use crate::simulation::{SimulationEngine,
                                SimulationResult,
                                SweepSettings,
                                sweep_remaining_fraction};
}
