//! Velocity sweeps for validation studies
//!
//! A sweep runs one full depletion simulation per target friction velocity
//! and collects the final remaining fraction — the curve that is compared
//! against wind-tunnel detachment data.
//!
//! Every run owns an independent clone of the distribution and its own flow
//! profile, so runs share no mutable state. With the `parallel` feature the
//! sweep is distributed over the rayon thread pool; collection preserves the
//! input order, so parallel and sequential sweeps are bit-identical.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::distribution::Distribution;
use crate::physics::FlowProfile;
use crate::simulation::engine::SimulationEngine;

/// Flow parameters shared by every run of a sweep
///
/// The target friction velocity is the swept quantity and is therefore not
/// part of the settings.
#[derive(Debug, Clone, Copy)]
pub struct SweepSettings {
    /// Simulated duration per run (s)
    pub duration: f64,
    /// Time step (s)
    pub dt: f64,
    /// Spin-up ramp duration (s), 0 for constant velocity
    pub spinup_time: f64,
    /// Fluid density (kg/m3)
    pub fluid_density: f64,
    /// Kinematic viscosity (m2/s)
    pub kin_visco: f64,
    /// Surface energy (J/m2)
    pub surf_energy: f64,
}

/// Final remaining fraction for each target velocity
///
/// For each entry of `velocities`, builds a [`FlowProfile`] from `settings`,
/// runs an independent [`SimulationEngine`] over a clone of `distribution`,
/// and returns `final_count / initial_count`. The output is ordered like
/// `velocities`.
///
/// # Errors
///
/// Propagates the first flow-construction or engine error encountered.
/// Parameter errors are caller errors; nothing is retried.
///
/// # Example
///
/// ```rust
/// use rnr_rs::distribution::DistributionBuilder;
/// use rnr_rs::simulation::{SweepSettings, sweep_remaining_fraction};
///
/// let distribution = DistributionBuilder::new(5.0, 100_000, 20, 0.0, 1.0)
///     .unwrap()
///     .generate()
///     .unwrap();
///
/// let settings = SweepSettings {
///     duration: 10.0,
///     dt: 1.0,
///     spinup_time: 0.0,
///     fluid_density: 1.204,
///     kin_visco: 1.5e-5,
///     surf_energy: 0.15,
/// };
///
/// let fractions = sweep_remaining_fraction(&distribution, &settings, &[0.5, 1.0, 2.0]).unwrap();
/// assert_eq!(fractions.len(), 3);
/// // Stronger flow detaches more particles
/// assert!(fractions[2] <= fractions[0]);
/// ```
pub fn sweep_remaining_fraction(
    distribution: &Distribution,
    settings: &SweepSettings,
    velocities: &[f64],
) -> Result<Vec<f64>, String> {
    let initial = distribution.total_count();
    if initial <= 0.0 {
        return Err("Cannot sweep an empty distribution".to_string());
    }

    log::info!("Sweeping {} velocities...", velocities.len());

    let run_one = |&velocity: &f64| -> Result<f64, String> {
        let flow = FlowProfile::new(
            settings.duration,
            settings.dt,
            settings.spinup_time,
            velocity,
            settings.fluid_density,
            settings.kin_visco,
            settings.surf_energy,
        )?;

        let mut engine = SimulationEngine::new(distribution, flow);
        let result = engine.run()?;
        Ok(result.final_remaining() / initial)
    };

    #[cfg(feature = "parallel")]
    let fractions = velocities.par_iter().map(run_one).collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let fractions = velocities.iter().map(run_one).collect::<Result<Vec<_>, _>>()?;

    Ok(fractions)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::DistributionBuilder;

    fn settings() -> SweepSettings {
        SweepSettings {
            duration: 10.0,
            dt: 1.0,
            spinup_time: 0.0,
            fluid_density: 1.204,
            kin_visco: 1.5e-5,
            surf_energy: 0.15,
        }
    }

    fn distribution() -> Distribution {
        DistributionBuilder::new(5.0, 100_000, 20, 0.0, 1.0)
            .unwrap()
            .generate()
            .unwrap()
    }

    #[test]
    fn test_output_ordering_and_range() {
        let distribution = distribution();
        let velocities = [0.1, 1.0, 5.0];
        let fractions =
            sweep_remaining_fraction(&distribution, &settings(), &velocities).unwrap();

        assert_eq!(fractions.len(), velocities.len());
        for &f in &fractions {
            assert!((0.0..=1.0).contains(&f));
        }
        // Remaining fraction decreases with flow strength
        assert!(fractions[0] >= fractions[1]);
        assert!(fractions[1] >= fractions[2]);
    }

    #[test]
    fn test_sweep_leaves_distribution_untouched() {
        let distribution = distribution();
        let before = distribution.clone();
        sweep_remaining_fraction(&distribution, &settings(), &[0.5, 2.0]).unwrap();
        assert_eq!(distribution, before);
    }

    #[test]
    fn test_sweep_is_deterministic() {
        let distribution = distribution();
        let velocities: Vec<f64> = (1..20).map(|i| 0.25 * i as f64).collect();

        let a = sweep_remaining_fraction(&distribution, &settings(), &velocities).unwrap();
        let b = sweep_remaining_fraction(&distribution, &settings(), &velocities).unwrap();

        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn test_empty_velocity_list() {
        let distribution = distribution();
        let fractions = sweep_remaining_fraction(&distribution, &settings(), &[]).unwrap();
        assert!(fractions.is_empty());
    }

    #[test]
    fn test_invalid_settings_propagate() {
        let distribution = distribution();
        let mut bad = settings();
        bad.dt = 0.0;
        assert!(sweep_remaining_fraction(&distribution, &bad, &[1.0]).is_err());
    }
}
