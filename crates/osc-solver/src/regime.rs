//! Damping regime classification.

use osc_core::{ParameterSet, Real, Tolerances, nearly_equal};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DampingRegime {
    /// Two distinct real roots, no oscillation.
    Overdamped,
    /// Repeated real root.
    CriticallyDamped,
    /// Complex-conjugate roots, decaying oscillation.
    Underdamped,
}

impl DampingRegime {
    pub fn label(self) -> &'static str {
        match self {
            Self::Overdamped => "Overdamped",
            Self::CriticallyDamped => "Critically Damped",
            Self::Underdamped => "Underdamped",
        }
    }
}

impl fmt::Display for DampingRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Regime of `params` under [`Tolerances::regime`].
///
/// This is the only classifier in the workspace: live previews and frozen
/// trace labels both go through it.
pub fn classify(params: &ParameterSet) -> DampingRegime {
    classify_rates(
        params.decay_rate(),
        params.natural_frequency(),
        Tolerances::regime(),
    )
}

/// Compare decay rate `gamma` against natural frequency `omega0`.
///
/// Equality within `tol` wins over the strict comparison so that a
/// near-zero `sqrt(gamma² - omega0²)` never reaches a division.
pub fn classify_rates(gamma: Real, omega0: Real, tol: Tolerances) -> DampingRegime {
    if nearly_equal(gamma, omega0, tol) {
        DampingRegime::CriticallyDamped
    } else if gamma > omega0 {
        DampingRegime::Overdamped
    } else {
        DampingRegime::Underdamped
    }
}

/// Discriminant `b² - 4mk` as shown next to a regime.
///
/// Snapped to zero for critically damped sets so the displayed sign always
/// agrees with the regime.
pub fn displayed_discriminant(params: &ParameterSet, regime: DampingRegime) -> Real {
    match regime {
        DampingRegime::CriticallyDamped => 0.0,
        _ => params.discriminant(),
    }
}
