//! Append-only trace store.

use crate::label::diff_label;
use crate::record::TraceRecord;
use osc_core::ParameterSet;
use osc_solver::{TimeGrid, solve};

/// Ordered sequence of frozen traces.
///
/// Insertion order is creation order and comparison order. The only
/// mutations are [`freeze`](Self::freeze)/[`append`](Self::append) and
/// [`clear`](Self::clear); records are never merged or reordered.
/// One store belongs to one session; there is no internal locking.
#[derive(Debug, Clone, Default)]
pub struct TraceStore {
    records: Vec<TraceRecord>,
}

impl TraceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Solve `params`, label it against the most recent record and append.
    ///
    /// Freezing the same parameters twice appends two records; the second
    /// simply carries no emphasized terms.
    pub fn freeze(&mut self, params: &ParameterSet, grid: &TimeGrid) -> &TraceRecord {
        let curve = solve(params, grid);
        let label = diff_label(params, self.last().map(TraceRecord::params));
        self.append(TraceRecord::new(*params, curve, label))
    }

    /// Push `record`, stamping it with the pre-append length.
    pub fn append(&mut self, record: TraceRecord) -> &TraceRecord {
        let index = self.records.len();
        let record = record.with_index(index);
        tracing::debug!(index, label = %record.label(), "trace frozen");
        self.records.push(record);
        &self.records[index]
    }

    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.records.len(), "traces cleared");
        self.records.clear();
    }

    pub fn all(&self) -> &[TraceRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
