//! Analytic trajectory coefficients for each damping regime.

use crate::regime::{DampingRegime, classify};
use osc_core::{ParameterSet, Real};

/// Coefficients of `x(t)` for one parameter set.
///
/// Built once per parameter set, then evaluated at any number of times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClosedForm {
    /// `x(t) = a·e^(r1·t) + b·e^(r2·t)`, with `r2 < r1 < 0`.
    Overdamped { r1: Real, r2: Real, a: Real, b: Real },
    /// `x(t) = e^(-gamma·t)·(x0 + slope·t)`, `slope = v0 + gamma·x0`.
    CriticallyDamped { gamma: Real, x0: Real, slope: Real },
    /// `x(t) = e^(-gamma·t)·(c·cos(omega_d·t) + d·sin(omega_d·t))`.
    Underdamped {
        gamma: Real,
        omega_d: Real,
        c: Real,
        d: Real,
    },
}

impl ClosedForm {
    pub fn new(params: &ParameterSet) -> Self {
        Self::for_regime(params, classify(params))
    }

    /// Coefficients for an already classified parameter set.
    ///
    /// `regime` must come from [`classify`]; the overdamped and underdamped
    /// branches divide by quantities that only the tolerance keeps away
    /// from zero.
    pub fn for_regime(params: &ParameterSet, regime: DampingRegime) -> Self {
        let omega0_sq = params.k / params.m;
        let gamma = params.decay_rate();
        let (x0, v0) = (params.x0, params.v0);

        match regime {
            DampingRegime::Overdamped => {
                let delta = (gamma * gamma - omega0_sq).sqrt();
                let r2 = -gamma - delta;
                // r1·r2 = omega0²; avoids cancellation in -gamma + delta
                let r1 = -omega0_sq / (gamma + delta);
                let span = r1 - r2;
                Self::Overdamped {
                    r1,
                    r2,
                    a: (v0 - r2 * x0) / span,
                    b: (r1 * x0 - v0) / span,
                }
            }
            DampingRegime::CriticallyDamped => Self::CriticallyDamped {
                gamma,
                x0,
                slope: v0 + gamma * x0,
            },
            DampingRegime::Underdamped => {
                let omega_d = (omega0_sq - gamma * gamma).sqrt();
                Self::Underdamped {
                    gamma,
                    omega_d,
                    c: x0,
                    d: (v0 + gamma * x0) / omega_d,
                }
            }
        }
    }

    pub fn regime(&self) -> DampingRegime {
        match self {
            Self::Overdamped { .. } => DampingRegime::Overdamped,
            Self::CriticallyDamped { .. } => DampingRegime::CriticallyDamped,
            Self::Underdamped { .. } => DampingRegime::Underdamped,
        }
    }

    /// Displacement `x(t)`.
    pub fn displacement(&self, t: Real) -> Real {
        match *self {
            Self::Overdamped { r1, r2, a, b } => a * (r1 * t).exp() + b * (r2 * t).exp(),
            Self::CriticallyDamped { gamma, x0, slope } => (-gamma * t).exp() * (x0 + slope * t),
            Self::Underdamped {
                gamma,
                omega_d,
                c,
                d,
            } => {
                let (sin, cos) = (omega_d * t).sin_cos();
                (-gamma * t).exp() * (c * cos + d * sin)
            }
        }
    }

    /// Analytic velocity `x'(t)`.
    pub fn velocity(&self, t: Real) -> Real {
        match *self {
            Self::Overdamped { r1, r2, a, b } => {
                a * r1 * (r1 * t).exp() + b * r2 * (r2 * t).exp()
            }
            Self::CriticallyDamped { gamma, x0, slope } => {
                (-gamma * t).exp() * (slope - gamma * (x0 + slope * t))
            }
            Self::Underdamped {
                gamma,
                omega_d,
                c,
                d,
            } => {
                let (sin, cos) = (omega_d * t).sin_cos();
                (-gamma * t).exp()
                    * ((d * omega_d - gamma * c) * cos - (gamma * d + c * omega_d) * sin)
            }
        }
    }

    /// Amplitude envelope `e^(-gamma·t)·sqrt(c² + d²)`; underdamped only.
    pub fn envelope(&self, t: Real) -> Option<Real> {
        match *self {
            Self::Underdamped { gamma, c, d, .. } => Some((-gamma * t).exp() * c.hypot(d)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(b: Real, x0: Real, v0: Real) -> ParameterSet {
        ParameterSet::new(1.0, 4.0, b, x0, v0, 10.0).unwrap()
    }

    #[test]
    fn overdamped_roots() {
        let form = ClosedForm::new(&params(10.0, 1.0, 0.0));
        let ClosedForm::Overdamped { r1, r2, .. } = form else {
            panic!("expected overdamped, got {form:?}");
        };
        // roots of r² + 10r + 4
        let expected_r1 = -5.0 + 21.0_f64.sqrt();
        let expected_r2 = -5.0 - 21.0_f64.sqrt();
        assert!((r1 - expected_r1).abs() < 1e-12);
        assert!((r2 - expected_r2).abs() < 1e-12);
    }

    #[test]
    fn critical_coefficients() {
        let form = ClosedForm::new(&params(4.0, 1.0, 0.0));
        assert_eq!(
            form,
            ClosedForm::CriticallyDamped {
                gamma: 2.0,
                x0: 1.0,
                slope: 2.0
            }
        );
    }

    #[test]
    fn undamped_is_pure_cosine() {
        let form = ClosedForm::new(&params(0.0, 1.0, 0.0));
        for t in [0.0, 0.3, 1.7, 4.2] {
            assert!((form.displacement(t) - (2.0 * t).cos()).abs() < 1e-12);
        }
    }

    #[test]
    fn envelope_only_for_underdamped() {
        assert!(ClosedForm::new(&params(1.0, 1.0, 0.0)).envelope(1.0).is_some());
        assert!(ClosedForm::new(&params(4.0, 1.0, 0.0)).envelope(1.0).is_none());
        assert!(ClosedForm::new(&params(10.0, 1.0, 0.0)).envelope(1.0).is_none());
    }
}
