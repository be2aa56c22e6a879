//! Depletion simulation and parameter sweeps
//!
//! # Core Concepts
//!
//! - **[`SimulationEngine`]**: owns a cloned [`Distribution`] and a
//!   [`FlowProfile`], steps time forward applying per-bin depletion, and
//!   records the aggregate series
//! - **[`SimulationResult`]**: the immutable outcome — time grid, remaining
//!   particle count, instantaneous detachment rate, final distribution
//! - **[`sweep_remaining_fraction`]**: runs one independent engine per target
//!   velocity; with the `parallel` feature the runs are distributed over a
//!   rayon pool (they share no mutable state)
//!
//! # Causal Ordering
//!
//! Within a run, time steps form a strict causal chain: step `t` reads the
//! post-update state of step `t - 1`. Steps are never reordered or
//! parallelized. Across runs there is no coupling at all, which is what
//! makes the sweep embarrassingly parallel.
//!
//! [`Distribution`]: crate::distribution::Distribution
//! [`FlowProfile`]: crate::physics::FlowProfile

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod engine;
pub mod sweep;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use engine::{EngineState, SimulationEngine, SimulationResult};
pub use sweep::{SweepSettings, sweep_remaining_fraction};
