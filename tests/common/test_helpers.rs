//! Helper functions for integration tests

use rnr_rs::distribution::{Distribution, DistributionBuilder};
use rnr_rs::physics::FlowProfile;
use rnr_rs::simulation::SweepSettings;

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// A 5 um graphite-like distribution with 10^5 particles over 50 bins
pub fn standard_distribution() -> Distribution {
    DistributionBuilder::new(5.0, 100_000, 50, 0.0, 1.0)
        .expect("valid builder parameters")
        .generate()
        .expect("quadrature converges for the lognormal density")
}

/// Air at ambient conditions, 1 s spin-up towards `target_velocity`
pub fn reference_flow(duration: f64, dt: f64, target_velocity: f64) -> FlowProfile {
    FlowProfile::new(duration, dt, 1.0, target_velocity, 1.204, 1.5e-5, 0.15)
        .expect("valid flow parameters")
}

/// Sweep settings matching [`reference_flow`] with no spin-up
pub fn reference_settings(duration: f64, dt: f64) -> SweepSettings {
    SweepSettings {
        duration,
        dt,
        spinup_time: 0.0,
        fluid_density: 1.204,
        kin_visco: 1.5e-5,
        surf_energy: 0.15,
    }
}
