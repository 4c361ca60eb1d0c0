use osc_core::{ParamKey, ParameterSet};
use osc_solver::{DampingRegime, TimeGrid};
use osc_traces::*;

fn set(b: f64, m: f64, k: f64, x0: f64, v0: f64) -> ParameterSet {
    ParameterSet::new(m, k, b, x0, v0, 10.0).unwrap()
}

#[test]
fn second_freeze_emphasizes_only_position() {
    let mut store = TraceStore::new();
    let grid = TimeGrid::with_default_samples(10.0);

    store.freeze(&set(4.0, 1.0, 4.0, 1.0, 0.0), &grid);
    let second = store.freeze(&set(4.0, 1.0, 4.0, 2.0, 0.0), &grid);

    assert_eq!(second.sequence_index(), 1);
    assert_eq!(second.label().changed().collect::<Vec<_>>(), vec![ParamKey::X0]);
    assert_eq!(
        second.label().to_string(),
        "Critically Damped (Δ=0.00) | b=4.00, m=1.00, k=4.00, **x0=2.00**, v0=0.00"
    );
}

#[test]
fn comparison_is_against_immediately_preceding_record() {
    let mut store = TraceStore::new();
    let grid = TimeGrid::new(10.0, 20);

    store.freeze(&set(1.0, 1.0, 4.0, 1.0, 0.0), &grid);
    store.freeze(&set(4.0, 1.0, 4.0, 1.0, 0.0), &grid);
    let third = store.freeze(&set(4.0, 1.0, 4.0, 1.0, 0.0), &grid);

    // b changed relative to the first record but not the second
    assert_eq!(third.label().changed().count(), 0);
}

#[test]
fn duplicate_freezes_are_kept() {
    let mut store = TraceStore::new();
    let grid = TimeGrid::new(10.0, 20);
    let params = ParameterSet::default();

    store.freeze(&params, &grid);
    store.freeze(&params, &grid);

    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[0].curve(), store.all()[1].curve());
    assert_eq!(store.all()[1].label().changed().count(), 0);
}

#[test]
fn clear_from_any_length_empties_store() {
    let grid = TimeGrid::new(10.0, 20);
    for n in 0..4 {
        let mut store = TraceStore::new();
        for _ in 0..n {
            store.freeze(&ParameterSet::default(), &grid);
        }
        store.clear();
        assert!(store.all().is_empty());
        assert_eq!(store.freeze(&ParameterSet::default(), &grid).sequence_index(), 0);
    }
}

#[test]
fn append_stamps_pre_append_length() {
    let mut store = TraceStore::new();
    let grid = TimeGrid::new(10.0, 20);
    let params = set(10.0, 1.0, 4.0, 1.0, 0.0);
    let record = TraceRecord::new(
        params,
        osc_solver::solve(&params, &grid),
        diff_label(&params, None),
    );

    store.freeze(&ParameterSet::default(), &grid);
    let appended = store.append(record);

    assert_eq!(appended.sequence_index(), 1);
    assert_eq!(appended.curve().regime(), DampingRegime::Overdamped);
}

#[test]
fn records_keep_their_own_grid() {
    let mut store = TraceStore::new();
    store.freeze(&ParameterSet::default(), &TimeGrid::new(10.0, 600));
    let short = ParameterSet {
        t_max: 2.0,
        ..ParameterSet::default()
    };
    store.freeze(&short, &TimeGrid::new(2.0, 600));

    assert_eq!(*store.all()[0].curve().time().last().unwrap(), 10.0);
    assert_eq!(*store.all()[1].curve().time().last().unwrap(), 2.0);
}

#[test]
fn csv_export_has_one_row_per_sample() {
    let mut store = TraceStore::new();
    let grid = TimeGrid::new(10.0, 25);
    store.freeze(&set(1.0, 1.0, 4.0, 1.0, 0.0), &grid);
    store.freeze(&set(10.0, 1.0, 4.0, 1.0, 0.0), &grid);

    let csv = render(ExportFormat::Csv, store.all(), "ignored").unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "trace,label,time_s,displacement_m");
    assert_eq!(lines.len(), 1 + 2 * 25);
    assert!(lines[1].starts_with("0,\"Underdamped (Δ=-15.00) | b=1.00"));
    assert!(lines[26].starts_with("1,\"Overdamped (Δ=84.00) | **b=10.00**"));
}

#[test]
fn json_export_roundtrips() {
    let mut store = TraceStore::new();
    let grid = TimeGrid::new(5.0, 10);
    store.freeze(&ParameterSet::default(), &grid);

    let json = render(ExportFormat::Json, store.all(), "Damping study").unwrap();
    let parsed: TraceExport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.title, "Damping study");
    assert_eq!(parsed.traces.len(), 1);
    assert_eq!(parsed.traces[0].regime, "Critically Damped");
    assert_eq!(parsed.traces[0].params, ParameterSet::default());
    assert_eq!(parsed.traces[0].time_s.len(), 10);
    assert!(chrono::DateTime::parse_from_rfc3339(&parsed.exported_at).is_ok());
}

#[test]
fn html_export_embeds_every_trace() {
    let mut store = TraceStore::new();
    let grid = TimeGrid::new(5.0, 10);
    store.freeze(&ParameterSet::default(), &grid);
    store.freeze(&set(4.0, 2.0, 4.0, 1.0, 0.0), &grid);

    let html = render(ExportFormat::Html, store.all(), "A <b> title").unwrap();
    assert!(html.contains("<title>A &lt;b&gt; title</title>"));
    assert!(html.contains("Plotly.newPlot"));
    assert!(html.contains("<b>m=2.00<\\/b>"));
    assert_eq!(html.matches("\"dash\":\"dash\"").count(), 2);
}
