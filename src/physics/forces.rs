//! Rock'n'Roll force-balance resuspension model
//!
//! # Physical Background
//!
//! A particle sitting on a surface detaches when the instantaneous aerodynamic
//! force exceeds the adhesion force holding it down. The quasi-static
//! Rock'n'Roll model treats the aerodynamic force as a Gaussian fluctuation
//! around a mean lift force and compares it against a fixed adhesion threshold
//! per bin: the detachment rate is the burst frequency weighted by the tail
//! probability of the force distribution beyond the adhesion threshold.
//!
//! ```text
//! rate(f_adh) = freq * exp(-(f_adh - F_mean)^2 / (2 F_fluct))
//!               / (0.5 * (1 + erf((f_adh - F_mean) / sqrt(2 F_fluct))))
//! ```
//!
//! clamped to `freq`: a particle cannot detach faster than energetic bursts
//! occur in the flow.
//!
//! # Units
//!
//! Particle radii are expressed in **micrometres** everywhere in this crate
//! and converted to metres exactly once, inside this module. Forces are in
//! newtons, rates in 1/s.
//!
//! # Purity
//!
//! Every function here is a pure function of its arguments: no owned state,
//! no hidden caches. Calling twice with identical inputs yields identical
//! outputs, which the depletion loop and the sweep runner both rely on.

use nalgebra::DVector;

use crate::distribution::Distribution;
use crate::physics::FlowProfile;

/// Empirical burst-frequency coefficient (dimensionless)
const BURST_COEFF: f64 = 0.00658;

/// Empirical lift-correlation prefactor (dimensionless)
const LIFT_COEFF: f64 = 10.45;

/// RMS aerodynamic fluctuation, as a fraction of the mean force
const FLUCT_RATIO: f64 = 0.2;

/// Conversion from the crate's micrometre radii to SI metres
const RADIUS_UM_TO_M: f64 = 1e-6;

/// Per-bin detachment expectations below this are snapped to zero, so
/// numerical noise does not deplete bins indefinitely.
const RATE_SNAP_THRESHOLD: f64 = 1e-3;

/// Mean and fluctuation of the aerodynamic force acting on a particle
///
/// `fluct` is the variance term of the Gaussian force model,
/// `(0.2 * mean)^2`, not a standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroForces {
    /// Mean aerodynamic lift force (N)
    pub mean: f64,
    /// Fluctuation term (N^2)
    pub fluct: f64,
}

/// Frequency of energetic turbulent bursts near the wall (1/s)
///
/// `freq = 0.00658 * u*^2 / nu`. This is both the forcing frequency and the
/// hard ceiling on any detachment rate.
///
/// # Panics
///
/// Panics when `kin_visco <= 0` (domain error; the [`FlowProfile`]
/// constructor guarantees positivity for flows built through it).
pub fn burst_frequency(u_fric: f64, kin_visco: f64) -> f64 {
    assert!(
        kin_visco > 0.0,
        "Kinematic viscosity must be positive, got {}",
        kin_visco
    );
    BURST_COEFF * u_fric * u_fric / kin_visco
}

/// Dimensionless particle radius r+ = r * u* / nu
///
/// `radius` is in micrometres; the conversion to metres happens here.
pub fn r_plus(radius: f64, u_fric: f64, kin_visco: f64) -> f64 {
    (radius * RADIUS_UM_TO_M) * u_fric / kin_visco
}

/// Mean and fluctuating aerodynamic forces on a particle of `radius` (um)
///
/// Uses the empirical lift correlation
/// `F_mean = 10.45 * rho * nu^2 * (1 + 300 * r+^-0.31) * r+^2.31`
/// and a fluctuation term `F_fluct = (0.2 * F_mean)^2`.
///
/// A still flow (`u_fric == 0`) produces zero mean force and zero
/// fluctuation rather than the NaN a naive evaluation of `r+^-0.31`
/// would give.
///
/// # Panics
///
/// Panics when `fluid_density <= 0` or `kin_visco <= 0`.
pub fn aerodynamic_forces(
    radius: f64,
    u_fric: f64,
    fluid_density: f64,
    kin_visco: f64,
) -> AeroForces {
    assert!(
        fluid_density > 0.0,
        "Fluid density must be positive, got {}",
        fluid_density
    );
    assert!(
        kin_visco > 0.0,
        "Kinematic viscosity must be positive, got {}",
        kin_visco
    );

    let rp = r_plus(radius, u_fric, kin_visco);
    if rp <= 0.0 {
        return AeroForces { mean: 0.0, fluct: 0.0 };
    }

    let mean = LIFT_COEFF
        * fluid_density
        * kin_visco
        * kin_visco
        * (1.0 + 300.0 * rp.powf(-0.31))
        * rp.powf(2.31);
    let fluct = (FLUCT_RATIO * mean) * (FLUCT_RATIO * mean);

    AeroForces { mean, fluct }
}

/// Instantaneous resuspension rate (1/s) for one adhesion force
///
/// `fadh` is the physical (de-normalized) adhesion force in newtons,
/// `radius` the particle radius in micrometres. The result is the tail
/// probability of the Gaussian-fluctuating aerodynamic force beyond `fadh`,
/// multiplied by the burst frequency and clamped to it.
///
/// Particles with adhesion far below the mean aerodynamic force detach at
/// the burst frequency; particles with adhesion far above it effectively
/// never detach.
pub fn resuspension_rate(
    fadh: f64,
    radius: f64,
    u_fric: f64,
    fluid_density: f64,
    kin_visco: f64,
) -> f64 {
    let freq = burst_frequency(u_fric, kin_visco);
    let aero = aerodynamic_forces(radius, u_fric, fluid_density, kin_visco);

    // No aerodynamic forcing at all: nothing detaches.
    if freq == 0.0 || aero.fluct <= 0.0 {
        return 0.0;
    }

    let delta = fadh - aero.mean;
    let gauss = (-delta * delta / (2.0 * aero.fluct)).exp();
    let tail = 0.5 * (1.0 + libm::erf(delta / (2.0 * aero.fluct).sqrt()));

    // The tail only underflows when the adhesion force is far below the mean
    // aerodynamic force. The gauss/tail ratio diverges there (Mills ratio),
    // so the clamped limit is detachment at every burst.
    let rate = if tail <= f64::MIN_POSITIVE {
        freq
    } else {
        freq * gauss / tail
    };

    rate.min(freq)
}

/// De-normalize a distribution-space adhesion value into a physical force (N)
///
/// Normalized adhesion is expressed in units of the JKR pull-off force
/// `(3/2) * pi * gamma * r`, with the radius converted from micrometres.
pub fn denormalize_adhesion(fadh_norm: f64, radius: f64, surf_energy: f64) -> f64 {
    fadh_norm * 1.5 * std::f64::consts::PI * surf_energy * (radius * RADIUS_UM_TO_M)
}

/// Expected per-bin detachment counts over one time step
///
/// For each bin: de-normalize the bin center into a physical adhesion force,
/// evaluate [`resuspension_rate`] at the flow condition of `step`, and
/// multiply by the bin population and `dt`. Values below `1e-3` expected
/// detachments are snapped to zero.
///
/// The result is an expectation, not yet clamped to the available population;
/// the depletion loop applies that clamp.
pub fn rate_binned(distribution: &Distribution, flow: &FlowProfile, step: usize) -> DVector<f64> {
    let u_fric = flow.friction_velocity(step);
    let dt = flow.dt();
    let radius = distribution.radius();

    let mut change = DVector::zeros(distribution.nbins());

    for (i, &center) in distribution.centers().iter().enumerate() {
        let fadh = denormalize_adhesion(center, radius, flow.surf_energy());
        let rate = resuspension_rate(
            fadh,
            radius,
            u_fric,
            flow.fluid_density(),
            flow.kin_visco(),
        );

        let expected = rate * distribution.counts()[i] * dt;
        change[i] = if expected < RATE_SNAP_THRESHOLD { 0.0 } else { expected };
    }

    change
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::DistributionBuilder;

    const RHO: f64 = 1.204;
    const NU: f64 = 1.5e-5;

    #[test]
    fn test_burst_frequency_value() {
        // 0.00658 * 1^2 / 1.5e-5
        let freq = burst_frequency(1.0, NU);
        assert!((freq - 0.00658 / NU).abs() < 1e-9);
    }

    #[test]
    fn test_burst_frequency_zero_velocity() {
        assert_eq!(burst_frequency(0.0, NU), 0.0);
    }

    #[test]
    #[should_panic(expected = "Kinematic viscosity must be positive")]
    fn test_burst_frequency_invalid_viscosity() {
        burst_frequency(1.0, 0.0);
    }

    #[test]
    fn test_r_plus_uses_micrometres() {
        // 10 um at u* = 1.5 m/s in air: r+ = 1e-5 * 1.5 / 1.5e-5 = 1.0
        let rp = r_plus(10.0, 1.5, NU);
        assert!((rp - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_aero_forces_against_correlation() {
        let radius = 10.0;
        let u = 1.5;
        let rp = r_plus(radius, u, NU);
        let expected_mean =
            10.45 * RHO * NU * NU * (1.0 + 300.0 * rp.powf(-0.31)) * rp.powf(2.31);

        let aero = aerodynamic_forces(radius, u, RHO, NU);
        assert!((aero.mean - expected_mean).abs() / expected_mean < 1e-12);
        assert!((aero.fluct - (0.2 * expected_mean).powi(2)).abs() < 1e-30);
    }

    #[test]
    fn test_aero_forces_still_flow() {
        let aero = aerodynamic_forces(5.0, 0.0, RHO, NU);
        assert_eq!(aero.mean, 0.0);
        assert_eq!(aero.fluct, 0.0);
        assert!(aero.mean.is_finite());
    }

    #[test]
    fn test_rate_bounded_by_burst_frequency() {
        let freq = burst_frequency(2.0, NU);
        // Sweep adhesion forces from far below to far above the mean force
        let aero = aerodynamic_forces(5.0, 2.0, RHO, NU);
        for factor in [0.0, 0.01, 0.5, 1.0, 2.0, 10.0, 1000.0] {
            let rate = resuspension_rate(aero.mean * factor, 5.0, 2.0, RHO, NU);
            assert!(rate >= 0.0, "negative rate at factor {}", factor);
            assert!(rate <= freq, "rate {} above freq {} at factor {}", rate, freq, factor);
            assert!(rate.is_finite());
        }
    }

    #[test]
    fn test_weak_adhesion_detaches_at_burst_frequency() {
        // fadh << F_mean: tail -> 0, gauss -> 0, ratio -> freq
        let freq = burst_frequency(2.0, NU);
        let rate = resuspension_rate(0.0, 5.0, 2.0, RHO, NU);
        assert!((rate - freq).abs() / freq < 1e-6);
    }

    #[test]
    fn test_strong_adhesion_never_detaches() {
        let aero = aerodynamic_forces(5.0, 2.0, RHO, NU);
        let rate = resuspension_rate(aero.mean * 1e6, 5.0, 2.0, RHO, NU);
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_rate_zero_in_still_flow() {
        let rate = resuspension_rate(1e-9, 5.0, 0.0, RHO, NU);
        assert_eq!(rate, 0.0);
        assert!(rate.is_finite());
    }

    #[test]
    fn test_rate_is_pure() {
        let rate1 = resuspension_rate(1e-9, 5.0, 1.5, RHO, NU);
        let rate2 = resuspension_rate(1e-9, 5.0, 1.5, RHO, NU);
        assert_eq!(rate1.to_bits(), rate2.to_bits());
    }

    #[test]
    fn test_denormalize_adhesion_scaling() {
        // Twice the surface energy -> twice the force; linear in all inputs
        let f1 = denormalize_adhesion(0.5, 10.0, 0.15);
        let f2 = denormalize_adhesion(0.5, 10.0, 0.30);
        assert!((f2 - 2.0 * f1).abs() < 1e-24);

        let expected = 0.5 * 1.5 * std::f64::consts::PI * 0.15 * 10.0e-6;
        assert!((f1 - expected).abs() < 1e-24);
    }

    #[test]
    fn test_rate_binned_shape_and_snap() {
        let distribution = DistributionBuilder::new(5.0, 1_000_000, 20, 0.0, 1.0)
            .unwrap()
            .generate()
            .unwrap();
        let flow = FlowProfile::new(10.0, 1.0, 0.0, 1.5, RHO, NU, 0.15).unwrap();

        let change = rate_binned(&distribution, &flow, 0);
        assert_eq!(change.len(), 20);
        for &c in change.iter() {
            assert!(c == 0.0 || c >= 1e-3, "snap threshold violated: {}", c);
            assert!(c >= 0.0);
        }
    }

    #[test]
    fn test_rate_binned_zero_in_still_flow() {
        let distribution = DistributionBuilder::new(5.0, 1_000_000, 20, 0.0, 1.0)
            .unwrap()
            .generate()
            .unwrap();
        let flow = FlowProfile::new(10.0, 1.0, 0.0, 0.0, RHO, NU, 0.15).unwrap();

        let change = rate_binned(&distribution, &flow, 0);
        assert!(change.iter().all(|&c| c == 0.0));
    }
}
