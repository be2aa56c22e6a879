//! Probability densities over the adhesion-force domain
//!
//! The builder integrates an [`AdhesionPdf`] over each bin to obtain the bin
//! populations. The trait is the extension seam: implement it to discretize
//! any density — the built-in [`BiasiLognormal`] covers the standard case of
//! adhesion forces measured on real dust samples.

/// Probability density over the normalized adhesion-force axis
///
/// # Responsibility
///
/// Evaluates the density at one point. Does NOT integrate it (that's the
/// builder's job, via [`crate::distribution::quadrature`]).
///
/// # Contract
///
/// `density(x) >= 0` for every `x` in the builder's `[fmin, fmax]` domain.
/// A negative density is a caller error and is surfaced by the builder as a
/// fatal domain error, never silently clamped.
///
/// # Implementing
///
/// ```rust
/// use rnr_rs::distribution::AdhesionPdf;
///
/// /// Uniform density over [0, 1]
/// struct Uniform;
///
/// impl AdhesionPdf for Uniform {
///     fn density(&self, x: f64) -> f64 {
///         if (0.0..=1.0).contains(&x) { 1.0 } else { 0.0 }
///     }
///
///     fn name(&self) -> &str {
///         "Uniform"
///     }
/// }
/// ```
pub trait AdhesionPdf: Send + Sync {
    /// Probability density at normalized adhesion force `x`
    fn density(&self, x: f64) -> f64;

    /// Name of the density (used for display and logging)
    fn name(&self) -> &str;
}

/// Biasi geometric parameters (mean, standard deviation) for a radius in um
///
/// Empirical correlation fitted on adhesion-force measurements:
///
/// ```text
/// mean = 0.016 - 0.0023 * radius^0.545
/// stdv = 1.8   + 0.136  * radius^1.4
/// ```
// TODO: check the validity domain of the correlation for radii above ~50 um.
pub fn biasi_params(radius: f64) -> (f64, f64) {
    let mean = 0.016 - 0.0023 * radius.powf(0.545);
    let stdv = 1.8 + 0.136 * radius.powf(1.4);
    (mean, stdv)
}

/// Lognormal adhesion-force density in geometric parameters
///
/// ```text
/// p(x) = 1 / (sqrt(2 pi) * x * ln(stdv)) * exp(-0.5 * (ln(x / mean) / ln(stdv))^2)
/// ```
///
/// The density is zero at and below `x = 0` (the lognormal support is the
/// positive axis), so a bin domain starting at `fmin = 0` integrates cleanly.
///
/// Use [`BiasiLognormal::from_radius`] for the standard parametrization, or
/// [`BiasiLognormal::new`] to supply geometric parameters directly.
#[derive(Debug, Clone, Copy)]
pub struct BiasiLognormal {
    /// Geometric mean of the normalized adhesion force
    mean: f64,
    /// Geometric standard deviation (> 1)
    stdv: f64,
}

impl BiasiLognormal {
    /// Create a lognormal density from explicit geometric parameters
    ///
    /// # Errors
    ///
    /// `mean` must be positive and `stdv` greater than 1 (a geometric
    /// standard deviation of exactly 1 collapses the density to a delta).
    pub fn new(mean: f64, stdv: f64) -> Result<Self, String> {
        if mean <= 0.0 {
            return Err(format!("Geometric mean must be positive, got {}", mean));
        }
        if stdv <= 1.0 {
            return Err(format!(
                "Geometric standard deviation must be greater than 1, got {}",
                stdv
            ));
        }
        Ok(Self { mean, stdv })
    }

    /// Create the default density for a particle radius (um) via the
    /// Biasi correlation
    ///
    /// # Errors
    ///
    /// Fails for radii large enough that the correlated geometric mean
    /// becomes non-positive (outside the correlation's validity domain).
    pub fn from_radius(radius: f64) -> Result<Self, String> {
        if radius <= 0.0 {
            return Err(format!("Particle radius must be positive, got {}", radius));
        }
        let (mean, stdv) = biasi_params(radius);
        Self::new(mean, stdv).map_err(|e| {
            format!("Biasi correlation out of domain for radius {} um: {}", radius, e)
        })
    }

    /// Geometric mean
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Geometric standard deviation
    pub fn stdv(&self) -> f64 {
        self.stdv
    }
}

impl AdhesionPdf for BiasiLognormal {
    fn density(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let ln_stdv = self.stdv.ln();
        let z = (x / self.mean).ln() / ln_stdv;
        (1.0 / (2.0 * std::f64::consts::PI).sqrt()) * (1.0 / (x * ln_stdv))
            * (-0.5 * z * z).exp()
    }

    fn name(&self) -> &str {
        "Biasi lognormal"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::quadrature::integrate;

    #[test]
    fn test_biasi_params_values() {
        // radius = 5 um
        let (mean, stdv) = biasi_params(5.0);
        assert!((mean - (0.016 - 0.0023 * 5.0_f64.powf(0.545))).abs() < 1e-12);
        assert!((stdv - (1.8 + 0.136 * 5.0_f64.powf(1.4))).abs() < 1e-12);
        assert!(mean > 0.0);
        assert!(stdv > 1.0);
    }

    #[test]
    fn test_density_zero_outside_support() {
        let pdf = BiasiLognormal::from_radius(5.0).unwrap();
        assert_eq!(pdf.density(0.0), 0.0);
        assert_eq!(pdf.density(-1.0), 0.0);
    }

    #[test]
    fn test_density_positive_on_support() {
        let pdf = BiasiLognormal::from_radius(5.0).unwrap();
        for x in [1e-4, 1e-2, 0.1, 0.5, 1.0] {
            assert!(pdf.density(x) >= 0.0);
            assert!(pdf.density(x).is_finite());
        }
        // Density peaks near the geometric mean
        assert!(pdf.density(pdf.mean()) > pdf.density(10.0 * pdf.mean()));
    }

    #[test]
    fn test_density_integrates_to_one() {
        // Integrating over a domain that covers the bulk of the support
        // should give close to 1 (total probability).
        let pdf = BiasiLognormal::from_radius(5.0).unwrap();
        let mass = integrate(&|x| pdf.density(x), 1e-8, 50.0, 1e-9, 60).unwrap();
        assert!((mass - 1.0).abs() < 1e-3, "total mass {} not close to 1", mass);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(BiasiLognormal::new(0.0, 2.0).is_err());
        assert!(BiasiLognormal::new(0.01, 1.0).is_err());
        assert!(BiasiLognormal::from_radius(0.0).is_err());
    }

    #[test]
    fn test_from_radius_out_of_domain() {
        // Large radii push the Biasi mean negative: must fail, not produce
        // a nonsensical density.
        let radius_limit = (0.016_f64 / 0.0023).powf(1.0 / 0.545);
        assert!(BiasiLognormal::from_radius(radius_limit + 1.0).is_err());
    }
}
