//! Mock adhesion-force densities with known analytical behavior
//!
//! These replace the lognormal correlation in tests where we need an exact,
//! hand-checkable probability mass per bin.

use rnr_rs::distribution::AdhesionPdf;

/// Uniform density on `[0, 1]`: every equal-width bin receives the same mass
pub struct UniformUnit;

impl AdhesionPdf for UniformUnit {
    fn density(&self, x: f64) -> f64 {
        if (0.0..=1.0).contains(&x) {
            1.0
        } else {
            0.0
        }
    }

    fn name(&self) -> &str {
        "uniform [0, 1]"
    }
}

/// Narrow triangular peak centred on `center` with half-width `half_width`
///
/// Concentrates essentially all mass in one or two bins, which makes the
/// detachment dynamics of a single force class observable in isolation.
pub struct NarrowPeak {
    pub center: f64,
    pub half_width: f64,
}

impl NarrowPeak {
    pub fn new(center: f64, half_width: f64) -> Self {
        Self { center, half_width }
    }
}

impl AdhesionPdf for NarrowPeak {
    fn density(&self, x: f64) -> f64 {
        let d = (x - self.center).abs();
        if d >= self.half_width {
            0.0
        } else {
            // Triangle of unit area
            (1.0 - d / self.half_width) / self.half_width
        }
    }

    fn name(&self) -> &str {
        "narrow triangular peak"
    }
}
