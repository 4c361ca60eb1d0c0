//! osc-traces: frozen trajectory snapshots and their comparison labels.

pub mod export;
pub mod label;
pub mod record;
pub mod store;

pub use export::{ExportFormat, ExportedTrace, TraceExport, render};
pub use label::{LabelTerm, TraceLabel, changed_params, diff_label};
pub use record::TraceRecord;
pub use store::TraceStore;

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),
}
