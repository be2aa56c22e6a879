//! Adaptive Simpson quadrature
//!
//! # Mathematical Background
//!
//! Simpson's rule approximates a definite integral over `[a, b]` by fitting a
//! parabola through the endpoints and midpoint:
//!
//! ```text
//! S(a, b) = (b - a) / 6 * (f(a) + 4 f(m) + f(b)),   m = (a + b) / 2
//! ```
//!
//! The adaptive scheme compares `S(a, b)` against the two-panel refinement
//! `S(a, m) + S(m, b)`. Richardson extrapolation gives the error estimate
//! `|S2 - S1| / 15`; intervals that fail the tolerance are bisected
//! recursively.
//!
//! # Accuracy Requirements
//!
//! Bin weights in the distribution builder only need to be accurate *relative
//! to each other* — the masses are normalized afterwards — so the default
//! tolerance is generous. Non-convergence within the recursion depth limit is
//! a fatal input error (typically a singular or pathological density), never
//! retried.

/// Default relative tolerance used by the distribution builder
pub const DEFAULT_REL_TOL: f64 = 1e-8;

/// Default maximum bisection depth
pub const DEFAULT_MAX_DEPTH: u32 = 50;

/// Integrate `f` over `[a, b]` with adaptive Simpson quadrature
///
/// # Arguments
///
/// * `f` - Integrand; must be finite over `[a, b]`
/// * `a`, `b` - Integration bounds, `a <= b`
/// * `rel_tol` - Relative error tolerance (absolute near zero)
/// * `max_depth` - Recursion limit before giving up
///
/// # Errors
///
/// Returns `Err` with the offending sub-interval bounds when the recursion
/// depth limit is reached before the tolerance is met, or when the integrand
/// produces a non-finite value.
///
/// # Example
///
/// ```rust
/// use rnr_rs::distribution::quadrature::integrate;
///
/// let area = integrate(&|x: f64| x * x, 0.0, 1.0, 1e-10, 40).unwrap();
/// assert!((area - 1.0 / 3.0).abs() < 1e-10);
/// ```
pub fn integrate<F>(f: &F, a: f64, b: f64, rel_tol: f64, max_depth: u32) -> Result<f64, String>
where
    F: Fn(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) {
        return Err(format!("Integration bounds must be finite, got [{}, {}]", a, b));
    }
    if a > b {
        return Err(format!("Integration bounds out of order: [{}, {}]", a, b));
    }
    if a == b {
        return Ok(0.0);
    }
    if rel_tol <= 0.0 {
        return Err(format!("Quadrature tolerance must be positive, got {}", rel_tol));
    }

    let fa = eval(f, a)?;
    let fb = eval(f, b)?;
    let m = 0.5 * (a + b);
    let fm = eval(f, m)?;

    let whole = simpson(a, b, fa, fm, fb);

    // The tolerance is interpreted relative to the magnitude of the whole
    // integral, with an absolute floor so near-zero integrals converge too.
    let tol = rel_tol * whole.abs().max(f64::MIN_POSITIVE.sqrt());

    adaptive(f, a, b, fa, fm, fb, whole, tol, max_depth)
}

/// Evaluate the integrand, rejecting NaN/Inf immediately
fn eval<F: Fn(f64) -> f64>(f: &F, x: f64) -> Result<f64, String> {
    let y = f(x);
    if y.is_finite() {
        Ok(y)
    } else {
        Err(format!("Integrand is not finite at x = {} (got {})", x, y))
    }
}

/// Single-panel Simpson estimate over [a, b]
fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

#[allow(clippy::too_many_arguments)]
fn adaptive<F>(
    f: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    tol: f64,
    depth: u32,
) -> Result<f64, String>
where
    F: Fn(f64) -> f64,
{
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);

    let flm = eval(f, lm)?;
    let frm = eval(f, rm)?;

    let left = simpson(a, m, fa, flm, fm);
    let right = simpson(m, b, fm, frm, fb);
    let refined = left + right;

    // Richardson error estimate for Simpson refinement
    let error = (refined - whole) / 15.0;

    if error.abs() <= tol {
        return Ok(refined + error);
    }

    if depth == 0 {
        return Err(format!(
            "Quadrature failed to converge over [{}, {}] (error estimate {:e})",
            a, b, error
        ));
    }

    let half_tol = 0.5 * tol;
    let l = adaptive(f, a, m, fa, flm, fm, left, half_tol, depth - 1)?;
    let r = adaptive(f, m, b, fm, frm, fb, right, half_tol, depth - 1)?;
    Ok(l + r)
}

// =================================================================================================
// Tests
// =================================================================================================
