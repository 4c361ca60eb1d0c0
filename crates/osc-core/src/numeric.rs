use crate::OscError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute + relative tolerance pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Tolerance for deciding `gamma == omega0` when picking a damping regime.
    ///
    /// Used by both the live preview and frozen trace labels so the two can
    /// never disagree about the regime of the same parameter set.
    pub const fn regime() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-9,
        }
    }

    /// Tolerance below which two parameter values count as unchanged.
    pub const fn parameter_change() -> Self {
        Self {
            abs: 1e-8,
            rel: 1e-5,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, OscError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(OscError::NonFinite { what, value: v })
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// The last value is pinned to `end` exactly.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as Real;
            let mut points: Vec<Real> = (0..n).map(|i| start + i as Real * step).collect();
            points[n - 1] = end;
            points
        }
    }
}
