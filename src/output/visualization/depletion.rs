//! Depletion plotting for resuspension simulations
//!
//! Resuspension spans many decades in both time and rate, so the depletion
//! curve uses a logarithmic time axis and the rate curve a log-log layout.
//! Points at `t = 0` (and zero rates) cannot appear on a log axis and are
//! skipped when building the series.
//!
//! # Available functions
//!
//! - [`plot_remaining_fraction`] — Remaining surface fraction vs time (log-x)
//! - [`plot_instantaneous_rate`] — Detachment rate vs time (log-log)
//! - [`plot_distribution`]       — Binned adhesion-force histogram

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use crate::distribution::Distribution;
use crate::simulation::SimulationResult;

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Series of `(t, N(t)/N(0))` points with `t = 0` removed for the log axis
fn fraction_series(result: &SimulationResult) -> Vec<(f64, f64)> {
    let initial = result.total_remaining.first().copied().unwrap_or(0.0);
    if initial <= 0.0 {
        return Vec::new();
    }
    result
        .time
        .iter()
        .zip(result.total_remaining.iter())
        .filter(|(t, _)| **t > 0.0)
        .map(|(t, n)| (*t, n / initial))
        .collect()
}

/// Series of `(t, rate)` points restricted to the positive quadrant
fn rate_series(result: &SimulationResult) -> Vec<(f64, f64)> {
    result
        .time
        .iter()
        .zip(result.instantaneous_rate.iter())
        .filter(|(t, r)| **t > 0.0 && **r > 0.0)
        .map(|(t, r)| (*t, *r))
        .collect()
}

// =================================================================================================
// Public API
// =================================================================================================

/// Plot the remaining surface fraction against time on a log-x axis
///
/// Reads `N(t)/N(0)` from the total-remaining series. The `t = 0` sample is
/// skipped since it has no position on a logarithmic axis.
///
/// # Arguments
///
/// * `result`      — Simulation result containing the depletion series
/// * `output_path` — Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if the result holds fewer than two plottable points or the
/// backend cannot write to `output_path`.
///
/// # Example
///
/// ```rust,ignore
/// use rnr_rs::output::visualization::plot_remaining_fraction;
///
/// let result = engine.run()?;
/// plot_remaining_fraction(&result, "fraction.png", None)?;
/// ```
pub fn plot_remaining_fraction(
    result: &SimulationResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let series = fraction_series(result);
    if series.len() < 2 {
        return Err("Not enough positive-time samples to plot a depletion curve".into());
    }

    let default_config = PlotConfig::depletion(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let t_min = series.first().map(|(t, _)| *t).unwrap_or(1e-3);
    let t_max = series.last().map(|(t, _)| *t).unwrap_or(1.0);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_fraction_impl(backend, &series, config, t_min, t_max)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_fraction_impl(backend, &series, config, t_min, t_max)
        }
    }
}

/// Plot the instantaneous detachment rate against time on log-log axes
///
/// Zero-rate samples (fully depleted or still-air steps) are skipped, as is
/// the `t = 0` sample.
///
/// # Arguments
///
/// * `result`      — Simulation result containing the rate series
/// * `output_path` — Output file path (`.png` or `.svg`)
/// * `config`      — Optional plot configuration
///
/// # Errors
///
/// Returns `Err` if no strictly positive `(t, rate)` pairs exist or the
/// backend fails.
pub fn plot_instantaneous_rate(
    result: &SimulationResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let series = rate_series(result);
    if series.len() < 2 {
        return Err("Not enough positive (time, rate) samples to plot".into());
    }

    let default_config = PlotConfig::rate(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let t_min = series.first().map(|(t, _)| *t).unwrap_or(1e-3);
    let t_max = series.last().map(|(t, _)| *t).unwrap_or(1.0);
    let r_min = series
        .iter()
        .map(|(_, r)| *r)
        .fold(f64::INFINITY, f64::min);
    let r_max = series
        .iter()
        .map(|(_, r)| *r)
        .fold(f64::NEG_INFINITY, f64::max);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_rate_impl(backend, &series, config, t_min, t_max, r_min, r_max)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_rate_impl(backend, &series, config, t_min, t_max, r_min, r_max)
        }
    }
}

/// Plot a binned adhesion-force distribution as a bar chart
///
/// Each bin is drawn as a filled rectangle spanning its `[edge_i, edge_{i+1}]`
/// interval on the normalized-force axis, with height equal to its particle
/// count. Works for both fresh and post-run distributions.
///
/// # Arguments
///
/// * `distribution` — Binned distribution to render
/// * `output_path`  — Output file path (`.png` or `.svg`)
/// * `config`       — Optional plot configuration
///
/// # Errors
///
/// Returns `Err` if the distribution has no bins or the backend fails.
pub fn plot_distribution(
    distribution: &Distribution,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if distribution.nbins() == 0 {
        return Err("Cannot plot an empty distribution".into());
    }

    let default_config = PlotConfig::distribution(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_distribution_impl(backend, distribution, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_distribution_impl(backend, distribution, config)
        }
    }
}

// =================================================================================================
// Rendering Implementations (generic over backend)
// =================================================================================================

/// Render the remaining-fraction curve onto any plotters backend
fn plot_fraction_impl<DB: DrawingBackend>(
    backend: DB,
    series: &[(f64, f64)],
    config: &PlotConfig,
    t_min: f64,
    t_max: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d((t_min..t_max * 1.05).log_scale(), 0.0..1.05)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0e}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    chart
        .draw_series(LineSeries::new(
            series.iter().copied(),
            ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
        ))?
        .label("Remaining fraction")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &config.line_color));

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render the detachment-rate curve on log-log axes
fn plot_rate_impl<DB: DrawingBackend>(
    backend: DB,
    series: &[(f64, f64)],
    config: &PlotConfig,
    t_min: f64,
    t_max: f64,
    r_min: f64,
    r_max: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (t_min..t_max * 1.05).log_scale(),
            (r_min * 0.9..r_max * 1.1).log_scale(),
        )?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0e}", x))
            .y_label_formatter(&|y| format!("{:.0e}", y))
            .draw()?;
    }

    chart
        .draw_series(LineSeries::new(
            series.iter().copied(),
            ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
        ))?
        .label("Detachment rate")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &config.line_color));

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render the adhesion histogram as one filled rectangle per bin
fn plot_distribution_impl<DB: DrawingBackend>(
    backend: DB,
    distribution: &Distribution,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let edges = distribution.edges();
    let counts = distribution.counts();

    let x_min = edges[0];
    let x_max = edges[edges.len() - 1];
    let y_max = counts.iter().cloned().fold(f64::NEG_INFINITY, f64::max).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..(y_max * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.2}", x))
            .y_label_formatter(&|y| format!("{:.0}", y))
            .draw()?;
    }

    chart.draw_series((0..distribution.nbins()).map(|i| {
        Rectangle::new(
            [(edges[i], 0.0), (edges[i + 1], counts[i])],
            config.line_color.mix(0.5).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
