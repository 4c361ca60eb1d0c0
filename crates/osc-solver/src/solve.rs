//! Grid evaluation of the closed-form trajectory.

use crate::closed_form::ClosedForm;
use crate::grid::TimeGrid;
use crate::regime::DampingRegime;
use osc_core::{ParameterSet, Real};

/// Sampled trajectory: `time[i]` paired with `displacement[i]`.
///
/// Produced fresh by [`solve`]; there is no way to mutate one afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionCurve {
    time: Vec<Real>,
    displacement: Vec<Real>,
    regime: DampingRegime,
}

impl SolutionCurve {
    pub fn time(&self) -> &[Real] {
        &self.time
    }

    pub fn displacement(&self) -> &[Real] {
        &self.displacement
    }

    pub fn regime(&self) -> DampingRegime {
        self.regime
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// `(t, x)` pairs in grid order.
    pub fn points(&self) -> impl Iterator<Item = (Real, Real)> + '_ {
        self.time.iter().copied().zip(self.displacement.iter().copied())
    }
}

/// Evaluate `x(t)` for `params` at every grid time.
///
/// Pure and total for any `params` that passed [`ParameterSet::validate`].
pub fn solve(params: &ParameterSet, grid: &TimeGrid) -> SolutionCurve {
    let form = ClosedForm::new(params);
    let displacement = grid.times().iter().map(|&t| form.displacement(t)).collect();

    SolutionCurve {
        time: grid.times().to_vec(),
        displacement,
        regime: form.regime(),
    }
}
