//! Example: Full Resuspension Run from a TOML Configuration
//!
//! Loads a configuration file, builds the adhesion distribution and flow
//! profile, runs the depletion loop, and writes all outputs:
//!
//! - `depletion.csv`   — time series (with a metadata header)
//! - `fraction.png`    — remaining fraction vs time, log-x
//! - `rate.png`        — detachment rate vs time, log-log
//! - `distribution.png`— initial adhesion histogram
//!
//! **Physical System** (default `configs/config.toml`):
//! - Graphite dust, 5 um radius, on a stainless surface
//! - Air at ambient conditions (rho = 1.204 kg/m3, nu = 1.5e-5 m2/s)
//! - Friction velocity ramped to 2 m/s over a 1 s spin-up
//!
//! Usage:
//! ```bash
//! cargo run --example run                      # default config
//! cargo run --example run -- my_config.toml    # custom config
//! RUST_LOG=debug cargo run --example run       # verbose logging
//! ```

use rnr_rs::config::SimulationConfig;
use rnr_rs::output::{
    plot_distribution, plot_instantaneous_rate, plot_remaining_fraction, CsvConfig, CsvExporter,
    Exporter, PlotConfig,
};
use rnr_rs::simulation::SimulationEngine;

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Rock'n'Roll Resuspension - Configuration-Driven Run");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Configuration ======

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "configs/config.toml".to_string());
    let config = SimulationConfig::from_path(&config_path)?;

    println!("Configuration ({}):", config_path);
    println!("  r (radius)      : {} um", config.distribution.radius);
    println!("  N (particles)   : {}", config.distribution.nparts);
    println!("  bins            : {}", config.distribution.nbins);
    println!("  u* (target)     : {} m/s", config.flow.target_velocity);
    println!("  spin-up         : {} s", config.flow.spinup_time);
    println!("  duration        : {} s", config.simulation.duration);
    println!("  dt              : {} s\n", config.simulation.dt);

    // ====== Build ======

    let distribution = config.build_distribution()?;
    let flow = config.build_flow()?;
    println!(
        "Distribution: {} particles over {} bins",
        distribution.total_count(),
        distribution.nbins()
    );
    plot_distribution(
        &distribution,
        "distribution.png",
        Some(&PlotConfig::distribution("Initial adhesion distribution")),
    )?;

    // ====== Run ======

    let start = Instant::now();
    let mut engine = SimulationEngine::new(&distribution, flow);
    let result = engine.run()?;
    println!(
        "Simulation: {} steps in {:.2} ms",
        result.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    println!(
        "  remaining fraction : {:.4}",
        result.final_fraction()
    );
    println!("  detached particles : {:.0}\n", result.total_remaining[0] - result.final_remaining());

    // ====== Outputs ======

    let exporter = CsvExporter::new(CsvConfig {
        include_metadata: true,
        ..Default::default()
    });
    exporter.export_depletion(&result, None, "depletion.csv")?;
    println!("Wrote depletion.csv");

    let title = format!(
        "r = {} um, u* = {} m/s",
        config.distribution.radius, config.flow.target_velocity
    );
    plot_remaining_fraction(&result, "fraction.png", Some(&PlotConfig::depletion(title.clone())))?;
    plot_instantaneous_rate(&result, "rate.png", Some(&PlotConfig::rate(title)))?;
    println!("Wrote distribution.png, fraction.png, rate.png");

    Ok(())
}
