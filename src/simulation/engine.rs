//! Explicit depletion engine
//!
//! # Algorithm
//!
//! For each step `t` of the flow's time grid, strictly in order:
//!
//! 1. Compute the expected per-bin detachments
//!    `change = rate_binned(distribution, flow, t)`
//! 2. Clamp `change[i] = min(change[i], counts[i])` — a bin cannot lose more
//!    particles than it holds, so counts never go negative
//! 3. Record `total_remaining[t] = sum(counts)` (pre-update) and
//!    `instantaneous_rate[t] = sum(change)`
//! 4. Update `counts -= change`
//!
//! The loop has fixed length `nsteps` with no early exit: once every bin is
//! empty the remaining steps simply record a zero rate. Two engines built
//! from equal inputs produce bit-identical output series.

use std::collections::HashMap;
use std::time::Instant;

use crate::distribution::Distribution;
use crate::physics::{FlowProfile, rate_binned};

/// Lifecycle of a [`SimulationEngine`]
///
/// `Initialized -> Running -> Completed`, no pause or resume. A completed
/// engine refuses to run again; its outputs are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Constructed, not yet run
    Initialized,
    /// Inside `run()`
    Running,
    /// `run()` returned; outputs are final
    Completed,
}

/// Outcome of a depletion run
///
/// All series share the flow's time grid length. `total_remaining` is
/// non-increasing, `instantaneous_rate` non-negative, and the final
/// distribution's counts are bounded by the initial ones bin by bin.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Time samples (s)
    pub time: Vec<f64>,

    /// Total particles still attached at each step (recorded pre-update)
    pub total_remaining: Vec<f64>,

    /// Total particles detached during each step
    pub instantaneous_rate: Vec<f64>,

    /// The mutated distribution after the last step
    pub final_distribution: Distribution,

    /// Diagnostic metadata (model name, dt, steps, ...)
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Number of recorded time steps
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True when no steps were recorded
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Remaining fraction series, relative to the initial population
    ///
    /// An initially empty distribution yields all zeros rather than NaN.
    pub fn remaining_fraction(&self) -> Vec<f64> {
        let initial = self.total_remaining.first().copied().unwrap_or(0.0);
        if initial <= 0.0 {
            return vec![0.0; self.total_remaining.len()];
        }
        self.total_remaining.iter().map(|&n| n / initial).collect()
    }

    /// Particles still attached after the last step
    pub fn final_remaining(&self) -> f64 {
        self.final_distribution.total_count()
    }

    /// Fraction of the initial population still attached after the last step
    pub fn final_fraction(&self) -> f64 {
        let initial = self.total_remaining.first().copied().unwrap_or(0.0);
        if initial <= 0.0 {
            0.0
        } else {
            self.final_remaining() / initial
        }
    }

    /// Attach a diagnostic metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}

/// Depletion simulation engine
///
/// Takes ownership of a **cloned** distribution at construction — the
/// caller's original is never mutated, so one generated distribution can
/// seed any number of runs.
///
/// # Example
///
/// ```rust
/// use rnr_rs::distribution::DistributionBuilder;
/// use rnr_rs::physics::FlowProfile;
/// use rnr_rs::simulation::SimulationEngine;
///
/// let distribution = DistributionBuilder::new(5.0, 10_000, 20, 0.0, 1.0)
///     .unwrap()
///     .generate()
///     .unwrap();
/// let flow = FlowProfile::new(10.0, 1.0, 0.0, 1.5, 1.204, 1.5e-5, 0.15).unwrap();
///
/// let mut engine = SimulationEngine::new(&distribution, flow);
/// let result = engine.run().unwrap();
/// assert_eq!(result.len(), 10);
/// ```
pub struct SimulationEngine {
    distribution: Distribution,
    flow: FlowProfile,
    state: EngineState,
}

impl SimulationEngine {
    /// Create an engine over a clone of `distribution` and the given flow
    pub fn new(distribution: &Distribution, flow: FlowProfile) -> Self {
        Self {
            distribution: distribution.clone(),
            flow,
            state: EngineState::Initialized,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Run the depletion loop over the full flow grid
    ///
    /// # Errors
    ///
    /// Returns `Err` when called on an engine that has already completed.
    pub fn run(&mut self) -> Result<SimulationResult, String> {
        if self.state == EngineState::Completed {
            return Err("Simulation has already completed; outputs are immutable".to_string());
        }
        self.state = EngineState::Running;

        let nsteps = self.flow.nsteps();
        let mut total_remaining = Vec::with_capacity(nsteps);
        let mut instantaneous_rate = Vec::with_capacity(nsteps);

        log::info!("Starting simulation...");
        let tstart = Instant::now();

        for step in 0..nsteps {
            let mut change = rate_binned(&self.distribution, &self.flow, step);

            // A bin cannot lose more particles than it currently holds
            for (c, &available) in change.iter_mut().zip(self.distribution.counts().iter()) {
                if *c > available {
                    *c = available;
                }
            }

            total_remaining.push(self.distribution.total_count());
            instantaneous_rate.push(change.sum());

            *self.distribution.counts_mut() -= change;
        }

        log::info!("Finished simulation in {:.2}s", tstart.elapsed().as_secs_f64());
        self.state = EngineState::Completed;

        let mut result = SimulationResult {
            time: self.flow.time().to_vec(),
            total_remaining,
            instantaneous_rate,
            final_distribution: self.distribution.clone(),
            metadata: HashMap::new(),
        };

        result.add_metadata("model", "Rock'n'Roll force balance");
        result.add_metadata("time steps", &nsteps.to_string());
        result.add_metadata("dt", &self.flow.dt().to_string());

        Ok(result)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
