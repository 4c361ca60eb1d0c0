//! Trace export serializers.
//!
//! Pure consumers of [`TraceStore::all`](crate::TraceStore::all): each
//! format renders the same ordered records and never touches the store.

use crate::record::TraceRecord;
use crate::{ExportError, ExportResult};
use osc_core::ParameterSet;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::path::Path;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Html,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> ExportResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Html => "html",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "html" | "htm" => Ok(Self::Html),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceExport {
    pub title: String,
    pub exported_at: String,
    pub traces: Vec<ExportedTrace>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedTrace {
    pub sequence_index: usize,
    pub label: String,
    pub regime: String,
    pub discriminant: f64,
    pub params: ParameterSet,
    pub time_s: Vec<f64>,
    pub displacement_m: Vec<f64>,
}

impl From<&TraceRecord> for ExportedTrace {
    fn from(record: &TraceRecord) -> Self {
        Self {
            sequence_index: record.sequence_index(),
            label: record.label().to_string(),
            regime: record.label().regime.to_string(),
            discriminant: record.label().discriminant,
            params: *record.params(),
            time_s: record.curve().time().to_vec(),
            displacement_m: record.curve().displacement().to_vec(),
        }
    }
}

impl TraceExport {
    pub fn new(title: impl Into<String>, records: &[TraceRecord]) -> Self {
        Self {
            title: title.into(),
            exported_at: chrono::Utc::now().to_rfc3339(),
            traces: records.iter().map(ExportedTrace::from).collect(),
        }
    }
}

pub fn render(format: ExportFormat, records: &[TraceRecord], title: &str) -> ExportResult<String> {
    match format {
        ExportFormat::Csv => Ok(to_csv(records)),
        ExportFormat::Json => to_json(records, title),
        ExportFormat::Html => to_html(records, title),
    }
}

/// Long-format CSV, one row per sample.
pub fn to_csv(records: &[TraceRecord]) -> String {
    let mut csv = String::from("trace,label,time_s,displacement_m\n");
    for record in records {
        let label = csv_field(&record.label().to_string());
        for (t, x) in record.curve().points() {
            csv.push_str(&format!("{},{},{},{}\n", record.sequence_index(), label, t, x));
        }
    }
    csv
}

pub fn to_json(records: &[TraceRecord], title: &str) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(&TraceExport::new(title, records))?)
}

/// Standalone page plotting every trace as a dashed line with plotly.js.
pub fn to_html(records: &[TraceRecord], title: &str) -> ExportResult<String> {
    let data: Vec<serde_json::Value> = records
        .iter()
        .map(|record| {
            json!({
                "x": record.curve().time(),
                "y": record.curve().displacement(),
                "mode": "lines",
                "name": record.label().to_html(),
                "line": { "dash": "dash" },
            })
        })
        .collect();

    let layout = json!({
        "title": { "text": title },
        "xaxis": { "title": { "text": "Time (s)" } },
        "yaxis": { "title": { "text": "Displacement x(t)" } },
        "template": "plotly_white",
        "width": 1600,
        "height": 800,
        "legend": {
            "orientation": "v",
            "x": 1.02,
            "xanchor": "left",
            "y": 1,
            "yanchor": "top",
            "traceorder": "normal",
            "font": { "size": 12 },
            "itemsizing": "constant",
        },
    });

    let data_js = script_safe(&serde_json::to_string(&data)?);
    let layout_js = script_safe(&serde_json::to_string(&layout)?);

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}"></script>
</head>
<body>
<div id="traces"></div>
<script>
Plotly.newPlot("traces", {data_js}, {layout_js});
</script>
</body>
</html>
"#,
        title = html_escape(title),
        cdn = PLOTLY_CDN,
    ))
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// JSON embedded in <script> must not close the tag early.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
