//! Example: Remaining Fraction vs Friction Velocity
//!
//! Sweeps the friction velocity over a logarithmic grid and reports the
//! remaining surface fraction after one second of exposure. This reproduces
//! the classic validation curve for the Rock'n'Roll model: an S-shaped
//! transition from full retention at low u* to complete stripping at high u*,
//! with the transition velocity set by particle size.
//!
//! Usage:
//! ```bash
//! cargo run --example validation
//! cargo run --example validation --features parallel   # rayon sweep
//! ```

use rnr_rs::distribution::DistributionBuilder;
use rnr_rs::simulation::{sweep_remaining_fraction, SweepSettings};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Rock'n'Roll Resuspension - Velocity Sweep");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Sweep grid: 0.1 to 10 m/s, logarithmic ======

    let n_velocities = 30;
    let (u_min, u_max) = (0.1f64.log10(), 10.0f64.log10());
    let velocities: Vec<f64> = (0..n_velocities)
        .map(|i| 10f64.powf(u_min + (u_max - u_min) * i as f64 / (n_velocities - 1) as f64))
        .collect();

    let settings = SweepSettings {
        duration: 1.0,
        dt: 0.01,
        spinup_time: 0.0,
        fluid_density: 1.204,
        kin_visco: 1.5e-5,
        surf_energy: 0.15,
    };

    println!("Sweep: {} velocities, {} s exposure, dt = {} s\n", n_velocities, settings.duration, settings.dt);
    println!("{:>10}  {:>10}  {:>18}", "r (um)", "u* (m/s)", "remaining fraction");

    // ====== One curve per particle size ======

    let start = Instant::now();
    for radius in [1.0, 5.0, 10.0] {
        let distribution = DistributionBuilder::new(radius, 1_000_000, 100, 0.0, 1.0)?
            .generate()?;

        let fractions = sweep_remaining_fraction(&distribution, &settings, &velocities)?;

        for (u, fraction) in velocities.iter().zip(fractions.iter()) {
            println!("{:>10.1}  {:>10.3}  {:>18.6}", radius, u, fraction);
        }
        println!();
    }

    println!("Swept 3 sizes in {:.2} s", start.elapsed().as_secs_f64());
    Ok(())
}
