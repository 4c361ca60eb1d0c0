//! Writing trace exports to disk.

use crate::{AppError, AppResult};
use osc_traces::{ExportFormat, TraceStore, render};
use std::path::Path;

/// Render every trace in `store` and write it to `path`.
///
/// `format` defaults to the one implied by the file extension.
pub fn export_traces(
    store: &TraceStore,
    path: &Path,
    format: Option<ExportFormat>,
    title: &str,
) -> AppResult<ExportFormat> {
    let format = match format {
        Some(f) => f,
        None => ExportFormat::from_path(path)?,
    };
    if store.is_empty() {
        return Err(AppError::InvalidInput("no traces to export".to_string()));
    }

    let content = render(format, store.all(), title)?;
    std::fs::write(path, content).map_err(|source| AppError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), %format, traces = store.len(), "traces exported");
    Ok(format)
}
