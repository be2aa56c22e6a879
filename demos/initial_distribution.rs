//! Example: Inspecting the Binned Adhesion Distribution
//!
//! Builds the lognormal adhesion-force distribution for a few particle sizes
//! and prints the bin table, then renders one histogram. Useful for choosing
//! `fmin`/`fmax`/`nbins` before committing to a long simulation: if the mass
//! piles up at the domain edge, the truncation is eating real probability.
//!
//! Usage:
//! ```bash
//! cargo run --example initial_distribution
//! ```

use rnr_rs::distribution::{biasi_params, DistributionBuilder};
use rnr_rs::output::{plot_distribution, PlotConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Adhesion-Force Distributions (Biasi correlation)");
    println!("═══════════════════════════════════════════════════════\n");

    for radius in [0.5, 5.0, 50.0] {
        let (mean, stdv) = biasi_params(radius);
        println!("r = {} um: geometric mean = {:.4}, geometric stdv = {:.3}", radius, mean, stdv);

        let distribution = DistributionBuilder::new(radius, 100_000, 20, 0.0, 1.0)?
            .generate()?;

        println!("{:>12}  {:>12}", "bin center", "count");
        for (center, count) in distribution
            .centers()
            .iter()
            .zip(distribution.counts().iter())
        {
            println!("{:>12.4}  {:>12.0}", center, count);
        }
        println!("{:>12}  {:>12.0}\n", "total", distribution.total_count());
    }

    // ====== Histogram for the 5 um case ======

    let distribution = DistributionBuilder::new(5.0, 100_000, 50, 0.0, 1.0)?.generate()?;
    plot_distribution(
        &distribution,
        "initial_distribution.png",
        Some(&PlotConfig::distribution("Biasi lognormal, r = 5 um")),
    )?;
    println!("Wrote initial_distribution.png");

    Ok(())
}
