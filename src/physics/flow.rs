//! Turbulent flow profile
//!
//! A [`FlowProfile`] describes the flow condition driving particle detachment:
//! a uniform time grid and a matching friction-velocity series, plus the fluid
//! constants needed by the force-balance model.
//!
//! # Spin-up Ramp
//!
//! Wind-tunnel experiments never reach the target velocity instantaneously.
//! A positive `spinup_time` reproduces that: the friction velocity ramps
//! linearly from 1% of the target up to the target over `[0, spinup_time)`,
//! then stays constant. With `spinup_time == 0` the velocity is constant from
//! the first sample — no ramp and no division by zero.
//!
//! # Example
//!
//! ```rust
//! use rnr_rs::physics::FlowProfile;
//!
//! // 60 s of flow at u* = 1.2 m/s, reached after a 10 s spin-up
//! let flow = FlowProfile::new(60.0, 0.5, 10.0, 1.2, 1.204, 1.5e-5, 0.15).unwrap();
//!
//! assert_eq!(flow.nsteps(), 120);
//! assert!(flow.friction_velocity(0) < flow.friction_velocity(119));
//! assert_eq!(flow.friction_velocity(119), 1.2);
//! ```

/// Turbulent flow condition over the simulation window
///
/// Immutable once constructed. The time grid starts at 0 with uniform step
/// `dt` and contains `ceil(duration / dt)` samples.
///
/// # Invariants
///
/// - `time` and `friction_velocity` have the same length
/// - `friction_velocity[i] >= 0` for all samples
/// - with `spinup_time > 0` the ramp is monotonically non-decreasing
#[derive(Debug, Clone)]
pub struct FlowProfile {
    /// Time samples (s), uniform step `dt`, starting at 0
    time: Vec<f64>,

    /// Friction velocity u* per time sample (m/s)
    friction_velocity: Vec<f64>,

    /// Time step (s)
    dt: f64,

    /// Fluid density (kg/m3)
    fluid_density: f64,

    /// Kinematic viscosity (m2/s)
    kin_visco: f64,

    /// Surface energy of the particle/surface pair (J/m2)
    surf_energy: f64,
}

impl FlowProfile {
    /// Create a flow profile from the run parameters
    ///
    /// # Arguments
    ///
    /// * `duration` - Total simulated time (s), > 0
    /// * `dt` - Time step (s), > 0
    /// * `spinup_time` - Linear ramp duration (s), >= 0; 0 means constant velocity
    /// * `target_velocity` - Target friction velocity u* (m/s), >= 0
    /// * `fluid_density` - Fluid density (kg/m3), > 0
    /// * `kin_visco` - Kinematic viscosity (m2/s), > 0
    /// * `surf_energy` - Surface energy (J/m2), > 0
    ///
    /// # Errors
    ///
    /// Returns `Err` with a diagnostic message when any parameter is outside
    /// its domain. These are caller errors, never retried.
    pub fn new(
        duration: f64,
        dt: f64,
        spinup_time: f64,
        target_velocity: f64,
        fluid_density: f64,
        kin_visco: f64,
        surf_energy: f64,
    ) -> Result<Self, String> {
        if duration <= 0.0 {
            return Err(format!("Flow duration must be positive, got {}", duration));
        }
        if dt <= 0.0 {
            return Err(format!("Time step must be positive, got {}", dt));
        }
        if spinup_time < 0.0 {
            return Err(format!("Spin-up time cannot be negative, got {}", spinup_time));
        }
        if target_velocity < 0.0 {
            return Err(format!(
                "Target friction velocity cannot be negative, got {}",
                target_velocity
            ));
        }
        if fluid_density <= 0.0 {
            return Err(format!("Fluid density must be positive, got {}", fluid_density));
        }
        if kin_visco <= 0.0 {
            return Err(format!("Kinematic viscosity must be positive, got {}", kin_visco));
        }
        if surf_energy <= 0.0 {
            return Err(format!("Surface energy must be positive, got {}", surf_energy));
        }

        let nsteps = (duration / dt).ceil() as usize;

        // Times are computed directly from the index (i * dt) rather than by
        // accumulation, so rounding error stays at machine epsilon instead of
        // growing with the step count.
        let time: Vec<f64> = (0..nsteps).map(|i| i as f64 * dt).collect();

        let friction_velocity: Vec<f64> = time
            .iter()
            .map(|&t| Self::ramp_velocity(t, spinup_time, target_velocity))
            .collect();

        Ok(Self {
            time,
            friction_velocity,
            dt,
            fluid_density,
            kin_visco,
            surf_energy,
        })
    }

    /// Friction velocity at time `t` during and after the spin-up ramp
    ///
    /// Linear ramp from `0.01 * target` at t = 0 to `target` at t = spinup_time.
    fn ramp_velocity(t: f64, spinup_time: f64, target: f64) -> f64 {
        if spinup_time > 0.0 && t < spinup_time {
            let start = 0.01 * target;
            start + (target - start) * t / spinup_time
        } else {
            target
        }
    }

    /// Number of time steps (length of grid and velocity series)
    pub fn nsteps(&self) -> usize {
        self.time.len()
    }

    /// Time step (s)
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Full time grid (s)
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Friction velocity at a given step index (m/s)
    ///
    /// # Panics
    ///
    /// Panics when `step` is past the end of the grid.
    pub fn friction_velocity(&self, step: usize) -> f64 {
        self.friction_velocity[step]
    }

    /// Full friction-velocity series (m/s)
    pub fn friction_velocities(&self) -> &[f64] {
        &self.friction_velocity
    }

    /// Fluid density (kg/m3)
    pub fn fluid_density(&self) -> f64 {
        self.fluid_density
    }

    /// Kinematic viscosity (m2/s)
    pub fn kin_visco(&self) -> f64 {
        self.kin_visco
    }

    /// Surface energy (J/m2)
    pub fn surf_energy(&self) -> f64 {
        self.surf_energy
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_flow(duration: f64, dt: f64, spinup: f64, target: f64) -> FlowProfile {
        FlowProfile::new(duration, dt, spinup, target, 1.204, 1.5e-5, 0.15).unwrap()
    }

    #[test]
    fn test_grid_length() {
        let flow = make_flow(10.0, 0.5, 0.0, 1.0);
        assert_eq!(flow.nsteps(), 20);
        assert_eq!(flow.time().len(), flow.friction_velocities().len());
    }

    #[test]
    fn test_grid_length_rounds_up() {
        // 10 / 3 = 3.33 -> 4 steps
        let flow = make_flow(10.0, 3.0, 0.0, 1.0);
        assert_eq!(flow.nsteps(), 4);
    }

    #[test]
    fn test_grid_starts_at_zero_and_spacing() {
        let flow = make_flow(5.0, 0.25, 0.0, 1.0);
        assert_eq!(flow.time()[0], 0.0);
        for i in 1..flow.nsteps() {
            let spacing = flow.time()[i] - flow.time()[i - 1];
            assert!((spacing - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_no_spinup_is_constant() {
        let flow = make_flow(10.0, 1.0, 0.0, 2.5);
        for i in 0..flow.nsteps() {
            assert_eq!(flow.friction_velocity(i), 2.5);
            assert!(flow.friction_velocity(i).is_finite());
        }
    }

    #[test]
    fn test_spinup_ramp_is_monotone() {
        let flow = make_flow(20.0, 0.5, 10.0, 2.0);

        // Ramp starts at 1% of target
        assert!((flow.friction_velocity(0) - 0.02).abs() < 1e-12);

        for i in 1..flow.nsteps() {
            assert!(flow.friction_velocity(i) >= flow.friction_velocity(i - 1));
        }

        // Target reached at/after spin-up
        let after_spinup = (10.0 / 0.5) as usize;
        assert_eq!(flow.friction_velocity(after_spinup), 2.0);
        assert_eq!(flow.friction_velocity(flow.nsteps() - 1), 2.0);
    }

    #[test]
    fn test_velocity_never_negative() {
        let flow = make_flow(10.0, 0.1, 5.0, 3.0);
        assert!(flow.friction_velocities().iter().all(|&u| u >= 0.0));
    }

    #[test]
    fn test_zero_target_velocity_accepted() {
        // A still-air profile is valid: the rate model yields zero detachment.
        let flow = make_flow(10.0, 1.0, 0.0, 0.0);
        assert!(flow.friction_velocities().iter().all(|&u| u == 0.0));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(FlowProfile::new(0.0, 1.0, 0.0, 1.0, 1.2, 1.5e-5, 0.15).is_err());
        assert!(FlowProfile::new(10.0, 0.0, 0.0, 1.0, 1.2, 1.5e-5, 0.15).is_err());
        assert!(FlowProfile::new(10.0, 1.0, -1.0, 1.0, 1.2, 1.5e-5, 0.15).is_err());
        assert!(FlowProfile::new(10.0, 1.0, 0.0, -1.0, 1.2, 1.5e-5, 0.15).is_err());
        assert!(FlowProfile::new(10.0, 1.0, 0.0, 1.0, 0.0, 1.5e-5, 0.15).is_err());
        assert!(FlowProfile::new(10.0, 1.0, 0.0, 1.0, 1.2, 0.0, 0.15).is_err());
        assert!(FlowProfile::new(10.0, 1.0, 0.0, 1.0, 1.2, 1.5e-5, 0.0).is_err());
    }

    #[test]
    fn test_error_messages_name_offending_value() {
        let err = FlowProfile::new(10.0, -0.5, 0.0, 1.0, 1.2, 1.5e-5, 0.15).unwrap_err();
        assert!(err.contains("-0.5"));
    }
}
