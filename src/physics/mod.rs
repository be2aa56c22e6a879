//! Flow description and resuspension physics
//!
//! This module provides the two physical ingredients of the simulation:
//!
//! - **Flow profile**: the turbulence condition driving detachment
//!   (time grid + friction-velocity series)
//! - **Force-balance model**: pure functions computing aerodynamic forces
//!   and the Rock'n'Roll detachment rate per adhesion bin
//!
//! # Architecture
//!
//! The physics is **separate from the time integration**:
//! - [`forces`] provides the instantaneous rate equations (physics)
//! - [`crate::simulation`] provides the depletion loop (numerics)
//!
//! This separation allows the same rate model to drive a full depletion
//! simulation, a single-step evaluation, or a velocity sweep.
//!
//! # Example
//!
//! ```rust
//! use rnr_rs::physics::{FlowProfile, forces};
//!
//! let flow = FlowProfile::new(10.0, 0.1, 0.0, 1.2, 1.204, 1.5e-5, 0.15).unwrap();
//!
//! // Burst frequency sets the ceiling on any detachment rate
//! let freq = forces::burst_frequency(flow.friction_velocity(0), flow.kin_visco());
//! assert!(freq > 0.0);
//! ```

// module declaration
pub mod flow;
pub mod forces;

// re-export commonly used types for convenience
pub use flow::FlowProfile;
pub use forces::{AeroForces, burst_frequency, aerodynamic_forces, resuspension_rate, rate_binned};
