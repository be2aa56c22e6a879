//! Binned adhesion-force distribution and its builder
//!
//! [`DistributionBuilder`] turns a probability density over normalized
//! adhesion force into a [`Distribution`]: equal-width bins with integer
//! particle populations. The builder owns the PDF strategy (defaulting to
//! [`BiasiLognormal`]) and performs the quadrature, normalization and
//! rounding steps.

use nalgebra::DVector;

use crate::distribution::pdf::{AdhesionPdf, BiasiLognormal};
use crate::distribution::quadrature::{self, integrate};

/// Discretized population of particles by adhesion-force bin
///
/// # Invariants
///
/// - `edges` is strictly increasing, spanning `[fmin, fmax]`
/// - `counts.len() == centers.len() == widths.len() == edges.len() - 1`
/// - `counts[i] >= 0` at all times
/// - the total count is non-increasing once a simulation begins
///
/// A simulation always operates on its own clone, so a generated
/// distribution can seed any number of independent runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    /// Particle radius (um)
    radius: f64,

    /// Bin edges, N+1 strictly increasing values
    edges: DVector<f64>,

    /// Bin centers (midpoints), length N
    centers: DVector<f64>,

    /// Bin widths, length N
    widths: DVector<f64>,

    /// Particle count per bin, length N, mutated by the depletion loop
    counts: DVector<f64>,
}

impl Distribution {
    /// Particle radius (um)
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of bins
    pub fn nbins(&self) -> usize {
        self.counts.len()
    }

    /// Bin edges (length `nbins() + 1`)
    pub fn edges(&self) -> &DVector<f64> {
        &self.edges
    }

    /// Bin centers in normalized adhesion-force space
    pub fn centers(&self) -> &DVector<f64> {
        &self.centers
    }

    /// Bin widths
    pub fn widths(&self) -> &DVector<f64> {
        &self.widths
    }

    /// Particle count per bin
    pub fn counts(&self) -> &DVector<f64> {
        &self.counts
    }

    /// Total number of particles across all bins
    pub fn total_count(&self) -> f64 {
        self.counts.sum()
    }

    /// Mutable access to the per-bin counts, reserved for the depletion loop
    pub(crate) fn counts_mut(&mut self) -> &mut DVector<f64> {
        &mut self.counts
    }
}

/// Builder producing a [`Distribution`] from a probability density
///
/// # Algorithm
///
/// 1. Partition `[fmin, fmax]` into `nbins` equal-width intervals
/// 2. Integrate the PDF over each bin (adaptive Simpson quadrature)
/// 3. Normalize the bin masses to 1, scale by `nparts`
/// 4. Zero out bins with an expected population below one particle
/// 5. Round the surviving populations to the nearest integer
///
/// # Example
///
/// ```rust
/// use rnr_rs::distribution::DistributionBuilder;
///
/// let distribution = DistributionBuilder::new(5.0, 1_000, 10, 0.0, 0.5)
///     .unwrap()
///     .generate()
///     .unwrap();
/// assert!(distribution.total_count() <= 1_000.0);
/// ```
pub struct DistributionBuilder {
    radius: f64,
    nparts: u64,
    nbins: usize,
    fmin: f64,
    fmax: f64,
    pdf: Box<dyn AdhesionPdf>,
}

impl DistributionBuilder {
    /// Create a builder with the default Biasi lognormal density
    ///
    /// # Arguments
    ///
    /// * `radius` - Particle radius (um), > 0
    /// * `nparts` - Target total particle count, > 0
    /// * `nbins` - Number of bins, > 0
    /// * `fmin`, `fmax` - Normalized adhesion-force domain, `fmin < fmax`
    ///
    /// # Errors
    ///
    /// Fails on out-of-domain parameters, or when the Biasi correlation has
    /// no valid lognormal parameters for `radius`.
    pub fn new(
        radius: f64,
        nparts: u64,
        nbins: usize,
        fmin: f64,
        fmax: f64,
    ) -> Result<Self, String> {
        let pdf = BiasiLognormal::from_radius(radius)?;

        log::info!("Default pdf used.");
        log::debug!("mean: {}, stdv: {}", pdf.mean(), pdf.stdv());

        Self::with_pdf(radius, nparts, nbins, fmin, fmax, Box::new(pdf))
    }

    /// Create a builder with a custom probability density
    ///
    /// The density must be non-negative over `[fmin, fmax]`; violations are
    /// caught during generation.
    pub fn with_pdf(
        radius: f64,
        nparts: u64,
        nbins: usize,
        fmin: f64,
        fmax: f64,
        pdf: Box<dyn AdhesionPdf>,
    ) -> Result<Self, String> {
        if radius <= 0.0 {
            return Err(format!("Particle radius must be positive, got {}", radius));
        }
        if nparts == 0 {
            return Err("Target particle count must be greater than 0".to_string());
        }
        if nbins == 0 {
            return Err("Number of bins must be greater than 0".to_string());
        }
        if !(fmin.is_finite() && fmax.is_finite()) {
            return Err(format!("Bin domain must be finite, got [{}, {}]", fmin, fmax));
        }
        if fmin >= fmax {
            return Err(format!(
                "Bin domain is empty or reversed: fmin = {}, fmax = {}",
                fmin, fmax
            ));
        }

        Ok(Self { radius, nparts, nbins, fmin, fmax, pdf })
    }

    /// Generate the discretized distribution
    ///
    /// # Errors
    ///
    /// - quadrature non-convergence (reported with the offending bin bounds)
    /// - negative density from a custom PDF (domain error)
    /// - zero total probability mass over `[fmin, fmax]` (the density does
    ///   not overlap the requested domain, so no normalization exists)
    pub fn generate(&self) -> Result<Distribution, String> {
        // Equal-width partition: N + 1 edges for N bins
        let step = (self.fmax - self.fmin) / self.nbins as f64;
        let edges = DVector::from_fn(self.nbins + 1, |i, _| self.fmin + i as f64 * step);
        let centers = DVector::from_fn(self.nbins, |i, _| 0.5 * (edges[i] + edges[i + 1]));
        let widths = DVector::from_fn(self.nbins, |i, _| edges[i + 1] - edges[i]);

        // Probability mass per bin
        let mut masses = DVector::zeros(self.nbins);
        for i in 0..self.nbins {
            let mass = integrate(
                &|x| self.pdf.density(x),
                edges[i],
                edges[i + 1],
                quadrature::DEFAULT_REL_TOL,
                quadrature::DEFAULT_MAX_DEPTH,
            )
            .map_err(|e| {
                format!(
                    "Integration of '{}' failed over bin [{}, {}]: {}",
                    self.pdf.name(),
                    edges[i],
                    edges[i + 1],
                    e
                )
            })?;

            if mass < 0.0 {
                return Err(format!(
                    "Pdf '{}' has negative mass {} over bin [{}, {}]",
                    self.pdf.name(),
                    mass,
                    edges[i],
                    edges[i + 1]
                ));
            }
            masses[i] = mass;
        }

        let total_mass = masses.sum();
        if total_mass <= 0.0 {
            return Err(format!(
                "Pdf '{}' carries no probability mass over [{}, {}]",
                self.pdf.name(),
                self.fmin,
                self.fmax
            ));
        }

        // Normalize, scale to the target count, discard sub-unit bins, round.
        // Sub-unit populations are treated as empirically unobservable and
        // dropped rather than rounded up, so the total may be < nparts.
        let scale = self.nparts as f64 / total_mass;
        let counts = masses.map(|m| {
            let expected = m * scale;
            if expected < 1.0 { 0.0 } else { expected.round() }
        });

        log::debug!(
            "Generated {} bins, {} of {} particles placed",
            self.nbins,
            counts.sum(),
            self.nparts
        );

        Ok(Distribution {
            radius: self.radius,
            edges,
            centers,
            widths,
            counts,
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Uniform density over [0, 1], zero elsewhere
    struct Uniform;

    impl AdhesionPdf for Uniform {
        fn density(&self, x: f64) -> f64 {
            if (0.0..=1.0).contains(&x) { 1.0 } else { 0.0 }
        }

        fn name(&self) -> &str {
            "Uniform"
        }
    }

    /// Intentionally invalid density for domain-error tests
    struct Negative;

    impl AdhesionPdf for Negative {
        fn density(&self, _x: f64) -> f64 {
            -1.0
        }

        fn name(&self) -> &str {
            "Negative"
        }
    }

    #[test]
    fn test_scenario_a_geometry() {
        // nparts=1000, nbins=10, [0, 0.5], radius=5, default pdf
        let distribution = DistributionBuilder::new(5.0, 1000, 10, 0.0, 0.5)
            .unwrap()
            .generate()
            .unwrap();

        assert_eq!(distribution.nbins(), 10);
        assert_eq!(distribution.edges().len(), 11);
        assert_eq!(distribution.centers().len(), 10);
        assert_eq!(distribution.widths().len(), 10);

        // Edges strictly increasing from 0.0 to 0.5
        assert_eq!(distribution.edges()[0], 0.0);
        assert!((distribution.edges()[10] - 0.5).abs() < 1e-12);
        for i in 1..11 {
            assert!(distribution.edges()[i] > distribution.edges()[i - 1]);
        }

        // Counts non-negative, total bounded by nparts
        assert!(distribution.counts().iter().all(|&c| c >= 0.0));
        assert!(distribution.total_count() <= 1000.0);
    }

    #[test]
    fn test_centers_are_midpoints() {
        let distribution = DistributionBuilder::new(5.0, 1000, 4, 0.0, 1.0)
            .unwrap()
            .generate()
            .unwrap();

        for i in 0..4 {
            let mid = 0.5 * (distribution.edges()[i] + distribution.edges()[i + 1]);
            assert!((distribution.centers()[i] - mid).abs() < 1e-12);
            assert!((distribution.widths()[i] - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_counts_are_integers() {
        let distribution = DistributionBuilder::new(5.0, 100_000, 50, 0.0, 1.0)
            .unwrap()
            .generate()
            .unwrap();

        for &c in distribution.counts().iter() {
            assert_eq!(c, c.round(), "count {} is not an integer", c);
        }
    }

    #[test]
    fn test_uniform_pdf_even_split() {
        // 1000 particles, uniform over [0, 1], 4 bins -> 250 each
        let distribution =
            DistributionBuilder::with_pdf(5.0, 1000, 4, 0.0, 1.0, Box::new(Uniform))
                .unwrap()
                .generate()
                .unwrap();

        for &c in distribution.counts().iter() {
            assert!((c - 250.0).abs() < 1.0);
        }
        assert!((distribution.total_count() - 1000.0).abs() < 4.0);
    }

    #[test]
    fn test_subunit_bins_are_zeroed() {
        // Few particles spread over many bins: tail bins fall below one
        // particle and must be dropped, not rounded up.
        let distribution = DistributionBuilder::new(5.0, 100, 50, 0.0, 1.0)
            .unwrap()
            .generate()
            .unwrap();

        assert!(distribution.total_count() <= 100.0);
        assert!(distribution.counts().iter().all(|&c| c == 0.0 || c >= 1.0));
    }

    #[test]
    fn test_negative_pdf_is_domain_error() {
        let err = DistributionBuilder::with_pdf(5.0, 1000, 4, 0.0, 1.0, Box::new(Negative))
            .unwrap()
            .generate()
            .unwrap_err();
        assert!(err.contains("negative"));
    }

    #[test]
    fn test_no_mass_over_domain_is_error() {
        // Uniform is zero over [2, 3]
        let err = DistributionBuilder::with_pdf(5.0, 1000, 4, 2.0, 3.0, Box::new(Uniform))
            .unwrap()
            .generate()
            .unwrap_err();
        assert!(err.contains("no probability mass"));
    }

    #[test]
    fn test_invalid_builder_parameters() {
        assert!(DistributionBuilder::new(0.0, 1000, 10, 0.0, 0.5).is_err());
        assert!(DistributionBuilder::new(5.0, 0, 10, 0.0, 0.5).is_err());
        assert!(DistributionBuilder::new(5.0, 1000, 0, 0.0, 0.5).is_err());
        assert!(DistributionBuilder::new(5.0, 1000, 10, 0.5, 0.5).is_err());
        assert!(DistributionBuilder::new(5.0, 1000, 10, 0.6, 0.5).is_err());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let builder = DistributionBuilder::new(5.0, 1_000_000, 50, 0.0, 1.0).unwrap();
        let a = builder.generate().unwrap();
        let b = builder.generate().unwrap();
        assert_eq!(a, b);
    }
}
