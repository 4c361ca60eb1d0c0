//! Single-parameter sweeps.
//!
//! A sweep maps evenly spaced values of one parameter to a sequence of
//! solved curves, one frame per value. Playback is left to the caller.

use crate::grid::TimeGrid;
use crate::regime::displayed_discriminant;
use crate::solve::{SolutionCurve, solve};
use osc_core::{OscError, OscResult, ParamKey, ParameterSet, Real, linspace};
use std::fmt;

/// Definition of a single parameter sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSpec {
    pub key: ParamKey,
    pub start: Real,
    pub end: Real,
    pub frames: usize,
}

impl SweepSpec {
    pub const DEFAULT_FRAMES: usize = 60;

    pub fn new(key: ParamKey, start: Real, end: Real, frames: usize) -> OscResult<Self> {
        osc_core::ensure_finite(start, "sweep start")?;
        osc_core::ensure_finite(end, "sweep end")?;
        if frames < 2 {
            return Err(OscError::InvalidArg {
                what: "sweep must have at least 2 frames",
            });
        }
        if (start - end).abs() < 1e-12 {
            return Err(OscError::InvalidArg {
                what: "sweep start and end must differ",
            });
        }
        Ok(Self {
            key,
            start,
            end,
            frames,
        })
    }

    pub fn values(&self) -> Vec<Real> {
        linspace(self.start, self.end, self.frames)
    }
}

impl fmt::Display for SweepSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} ({} frames)",
            self.key, self.start, self.end, self.frames
        )
    }
}

#[derive(Debug, Clone)]
pub struct SweepFrame {
    pub value: Real,
    pub params: ParameterSet,
    pub curve: SolutionCurve,
    pub title: String,
}

/// Solve `base` once per sweep value of `spec.key`.
///
/// Every swept parameter set is validated before the first solve, so an
/// out-of-range endpoint fails the whole sweep rather than a tail of it.
/// All frames share `grid`.
pub fn sweep(base: &ParameterSet, spec: &SweepSpec, grid: &TimeGrid) -> OscResult<Vec<SweepFrame>> {
    let variants = spec
        .values()
        .into_iter()
        .map(|value| base.with(spec.key, value).map(|params| (value, params)))
        .collect::<OscResult<Vec<_>>>()?;

    tracing::debug!(%spec, samples = grid.len(), "running parameter sweep");

    Ok(variants
        .into_iter()
        .map(|(value, params)| {
            let curve = solve(&params, grid);
            let title = frame_title(spec.key, value, &params, &curve);
            SweepFrame {
                value,
                params,
                curve,
                title,
            }
        })
        .collect())
}

fn frame_title(key: ParamKey, value: Real, params: &ParameterSet, curve: &SolutionCurve) -> String {
    format!(
        "Varying {} = {:.2} | m={:.2}, k={:.2}, b={:.2}, x0={:.2}, v0={:.2} | Δ={:.3}",
        key,
        value,
        params.m,
        params.k,
        params.b,
        params.x0,
        params.v0,
        displayed_discriminant(params, curve.regime()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regime::DampingRegime;

    #[test]
    fn damping_sweep_crosses_regimes() {
        let spec = SweepSpec::new(ParamKey::B, 1.0, 10.0, 10).unwrap();
        let frames = sweep(&ParameterSet::default(), &spec, &TimeGrid::new(10.0, 100)).unwrap();

        assert_eq!(frames.len(), 10);
        assert_eq!(frames[0].curve.regime(), DampingRegime::Underdamped);
        assert_eq!(frames[3].value, 4.0);
        assert_eq!(frames[3].curve.regime(), DampingRegime::CriticallyDamped);
        assert_eq!(frames[9].curve.regime(), DampingRegime::Overdamped);
        assert_eq!(
            frames[3].title,
            "Varying b = 4.00 | m=1.00, k=4.00, b=4.00, x0=1.00, v0=0.00 | Δ=0.000"
        );
    }

    #[test]
    fn rejects_invalid_endpoint_before_solving() {
        let spec = SweepSpec::new(ParamKey::M, -1.0, 2.0, 5).unwrap();
        let err = sweep(&ParameterSet::default(), &spec, &TimeGrid::new(10.0, 10)).unwrap_err();
        assert!(matches!(err, OscError::InvalidParameter { what: "m", .. }));
    }

    #[test]
    fn reject_invalid_frame_count() {
        assert!(SweepSpec::new(ParamKey::K, 1.0, 2.0, 1).is_err());
    }

    #[test]
    fn reject_identical_bounds() {
        assert!(SweepSpec::new(ParamKey::K, 2.0, 2.0, 5).is_err());
    }
}
