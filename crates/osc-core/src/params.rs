//! Oscillator parameter snapshot.

use crate::units::{Damping, Length, Mass, Time, Velocity};
use crate::{OscError, OscResult, Real};
use std::fmt;

/// Parameters that participate in trace comparison.
///
/// `t_max` is deliberately absent: it only shapes the time grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParamKey {
    B,
    M,
    K,
    X0,
    V0,
}

impl ParamKey {
    /// Fixed order used in labels and comparisons.
    pub const LABEL_ORDER: [ParamKey; 5] = [
        ParamKey::B,
        ParamKey::M,
        ParamKey::K,
        ParamKey::X0,
        ParamKey::V0,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::B => "b",
            Self::M => "m",
            Self::K => "k",
            Self::X0 => "x0",
            Self::V0 => "v0",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::LABEL_ORDER
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable snapshot of one oscillator configuration, SI units.
///
/// Invariant: all fields finite, `m > 0`, `k > 0`, `b >= 0`, `t_max > 0`.
/// [`ParameterSet::new`] enforces it; the solver assumes it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSet {
    /// Mass (kg)
    pub m: Real,
    /// Spring constant (N/m)
    pub k: Real,
    /// Damping coefficient (kg/s)
    pub b: Real,
    /// Initial position (m)
    pub x0: Real,
    /// Initial velocity (m/s)
    pub v0: Real,
    /// Simulated duration (s)
    pub t_max: Real,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            m: 1.0,
            k: 4.0,
            b: 4.0,
            x0: 1.0,
            v0: 0.0,
            t_max: 10.0,
        }
    }
}

impl ParameterSet {
    pub fn new(m: Real, k: Real, b: Real, x0: Real, v0: Real, t_max: Real) -> OscResult<Self> {
        let params = Self {
            m,
            k,
            b,
            x0,
            v0,
            t_max,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn from_quantities(
        mass: Mass,
        k_n_per_m: Real,
        damping: Damping,
        x0: Length,
        v0: Velocity,
        t_max: Time,
    ) -> OscResult<Self> {
        Self::new(
            mass.value,
            k_n_per_m,
            damping.value,
            x0.value,
            v0.value,
            t_max.value,
        )
    }

    pub fn validate(&self) -> OscResult<()> {
        let fields = [
            ("m", self.m),
            ("k", self.k),
            ("b", self.b),
            ("x0", self.x0),
            ("v0", self.v0),
            ("t_max", self.t_max),
        ];
        for (what, value) in fields {
            crate::ensure_finite(value, what)?;
        }

        if self.m <= 0.0 {
            return Err(positive("m", self.m));
        }
        if self.k <= 0.0 {
            return Err(positive("k", self.k));
        }
        if self.b < 0.0 {
            return Err(OscError::InvalidParameter {
                what: "b",
                value: self.b,
                reason: "must be non-negative",
            });
        }
        if self.t_max <= 0.0 {
            return Err(positive("t_max", self.t_max));
        }
        Ok(())
    }

    pub fn get(&self, key: ParamKey) -> Real {
        match key {
            ParamKey::B => self.b,
            ParamKey::M => self.m,
            ParamKey::K => self.k,
            ParamKey::X0 => self.x0,
            ParamKey::V0 => self.v0,
        }
    }

    /// Copy with one parameter replaced, re-validated.
    pub fn with(&self, key: ParamKey, value: Real) -> OscResult<Self> {
        let mut next = *self;
        match key {
            ParamKey::B => next.b = value,
            ParamKey::M => next.m = value,
            ParamKey::K => next.k = value,
            ParamKey::X0 => next.x0 = value,
            ParamKey::V0 => next.v0 = value,
        }
        next.validate()?;
        Ok(next)
    }

    /// Characteristic-equation discriminant `b² - 4mk`.
    pub fn discriminant(&self) -> Real {
        self.b * self.b - 4.0 * self.m * self.k
    }

    /// Undamped natural frequency `sqrt(k/m)` (rad/s).
    pub fn natural_frequency(&self) -> Real {
        (self.k / self.m).sqrt()
    }

    /// Decay rate `b / 2m` (1/s).
    pub fn decay_rate(&self) -> Real {
        self.b / (2.0 * self.m)
    }
}

fn positive(what: &'static str, value: Real) -> OscError {
    OscError::InvalidParameter {
        what,
        value,
        reason: "must be positive",
    }
}
