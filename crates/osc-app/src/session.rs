//! Caller-owned interactive session.

use crate::{AppError, AppResult};
use osc_core::{ParameterSet, Real};
use osc_solver::regime::displayed_discriminant;
use osc_solver::{DampingRegime, SolutionCurve, TimeGrid, solve};
use osc_traces::{TraceRecord, TraceStore};

/// Trajectory of the current, unfrozen parameter set.
#[derive(Debug, Clone)]
pub struct LivePreview {
    pub params: ParameterSet,
    pub grid: TimeGrid,
    pub curve: SolutionCurve,
    pub discriminant: Real,
}

impl LivePreview {
    fn compute(params: ParameterSet, grid: TimeGrid) -> Self {
        let curve = solve(&params, &grid);
        let discriminant = displayed_discriminant(&params, curve.regime());
        Self {
            params,
            grid,
            curve,
            discriminant,
        }
    }

    pub fn regime(&self) -> DampingRegime {
        self.curve.regime()
    }
}

/// One user's explorer state: the live parameter set and its trace store.
///
/// Each session owns its store outright; independent sessions never share
/// one. Dropping the session discards its traces.
#[derive(Debug, Clone)]
pub struct Session {
    preview: LivePreview,
    traces: TraceStore,
}

impl Session {
    /// Session starting from the default oscillator.
    pub fn new(samples: usize) -> AppResult<Self> {
        Self::with_params(ParameterSet::default(), samples)
    }

    pub fn with_params(params: ParameterSet, samples: usize) -> AppResult<Self> {
        if samples < 2 {
            return Err(AppError::InvalidInput(format!(
                "grid needs at least 2 samples, got {samples}"
            )));
        }
        params.validate()?;
        Ok(Self {
            preview: LivePreview::compute(params, TimeGrid::new(params.t_max, samples)),
            traces: TraceStore::new(),
        })
    }

    /// Replace the live parameters and recompute the preview.
    ///
    /// The time grid is regenerated only when `t_max` changes. Invalid
    /// parameters leave the session untouched.
    pub fn set_params(&mut self, params: ParameterSet) -> AppResult<&LivePreview> {
        params.validate()?;
        let grid = if params.t_max == self.preview.grid.t_max() {
            self.preview.grid.clone()
        } else {
            self.preview.grid.resized(params.t_max)
        };
        self.preview = LivePreview::compute(params, grid);
        Ok(&self.preview)
    }

    pub fn preview(&self) -> &LivePreview {
        &self.preview
    }

    pub fn params(&self) -> &ParameterSet {
        &self.preview.params
    }

    /// Freeze the live parameter set into the trace store.
    pub fn freeze(&mut self) -> &TraceRecord {
        self.traces.freeze(&self.preview.params, &self.preview.grid)
    }

    pub fn clear(&mut self) {
        self.traces.clear();
    }

    pub fn traces(&self) -> &TraceStore {
        &self.traces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osc_core::ParamKey;

    #[test]
    fn preview_tracks_parameter_changes() {
        let mut session = Session::new(600).unwrap();
        assert_eq!(session.preview().regime(), DampingRegime::CriticallyDamped);
        assert_eq!(session.preview().discriminant, 0.0);

        let next = session.params().with(ParamKey::B, 10.0).unwrap();
        let preview = session.set_params(next).unwrap();
        assert_eq!(preview.regime(), DampingRegime::Overdamped);
        assert_eq!(preview.discriminant, 84.0);
        assert!(session.traces().is_empty());
    }

    #[test]
    fn grid_follows_duration() {
        let mut session = Session::new(200).unwrap();
        let longer = ParameterSet {
            t_max: 30.0,
            ..*session.params()
        };
        session.set_params(longer).unwrap();
        assert_eq!(session.preview().grid.len(), 200);
        assert_eq!(session.preview().grid.t_max(), 30.0);
        assert_eq!(*session.preview().curve.time().last().unwrap(), 30.0);
    }

    #[test]
    fn invalid_params_leave_session_untouched() {
        let mut session = Session::new(50).unwrap();
        let bad = ParameterSet {
            m: -1.0,
            ..*session.params()
        };
        assert!(session.set_params(bad).is_err());
        assert_eq!(*session.params(), ParameterSet::default());
    }

    #[test]
    fn rejects_degenerate_grid() {
        assert!(matches!(Session::new(1), Err(AppError::InvalidInput(_))));
    }
}
