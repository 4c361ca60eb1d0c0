//! Frozen trace record.

use crate::label::TraceLabel;
use osc_core::ParameterSet;
use osc_solver::SolutionCurve;

/// One frozen, labeled trajectory.
///
/// Immutable once built; `sequence_index` is assigned by
/// [`TraceStore::append`](crate::TraceStore::append).
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRecord {
    params: ParameterSet,
    curve: SolutionCurve,
    label: TraceLabel,
    sequence_index: usize,
}

impl TraceRecord {
    pub fn new(params: ParameterSet, curve: SolutionCurve, label: TraceLabel) -> Self {
        Self {
            params,
            curve,
            label,
            sequence_index: 0,
        }
    }

    pub(crate) fn with_index(mut self, sequence_index: usize) -> Self {
        self.sequence_index = sequence_index;
        self
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn curve(&self) -> &SolutionCurve {
        &self.curve
    }

    pub fn label(&self) -> &TraceLabel {
        &self.label
    }

    pub fn sequence_index(&self) -> usize {
        self.sequence_index
    }
}
