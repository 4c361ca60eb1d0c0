use osc_app::*;
use osc_core::{ParamKey, ParameterSet};
use osc_project::{ActionDef, GridDef, ParameterDef, SessionDef};
use osc_traces::ExportFormat;
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

fn freeze(params: ParameterDef) -> ActionDef {
    ActionDef::Freeze { params }
}

#[test]
fn freeze_then_change_position_highlights_x0() {
    let mut session = Session::new(600).unwrap();
    session.freeze();

    let moved = session.params().with(ParamKey::X0, 2.0).unwrap();
    session.set_params(moved).unwrap();
    let record = session.freeze();

    assert_eq!(record.sequence_index(), 1);
    assert_eq!(record.label().changed().collect::<Vec<_>>(), vec![ParamKey::X0]);
}

#[test]
fn live_preview_and_frozen_label_agree_on_regime() {
    let m: f64 = 0.7;
    let k: f64 = 3.3;
    let critical = ParameterSet::new(m, k, 2.0 * (m * k).sqrt(), 1.0, 0.0, 10.0).unwrap();

    let mut session = Session::with_params(critical, 100).unwrap();
    let live = session.preview().regime();
    let frozen = session.freeze().label().regime;

    assert_eq!(live, frozen);
    assert_eq!(session.preview().discriminant, session.traces().all()[0].label().discriminant);
}

#[test]
fn replay_applies_clear() {
    let def = SessionDef {
        version: osc_project::LATEST_VERSION,
        name: "clear".to_string(),
        grid: GridDef { samples: 50 },
        actions: vec![
            freeze(ParameterDef::default()),
            freeze(ParameterDef {
                b_kg_per_s: 1.0,
                ..ParameterDef::default()
            }),
            ActionDef::Clear,
            freeze(ParameterDef {
                x0_m: -1.0,
                ..ParameterDef::default()
            }),
        ],
    };

    let session = replay(&def).unwrap();
    let traces = session.traces().all();
    assert_eq!(traces.len(), 1);
    assert_eq!(traces[0].sequence_index(), 0);
    assert_eq!(traces[0].label().changed().count(), 0);
    assert_eq!(traces[0].curve().len(), 50);
}

#[test]
fn replay_rejects_invalid_session() {
    let def = SessionDef {
        version: osc_project::LATEST_VERSION,
        name: "bad".to_string(),
        grid: GridDef::default(),
        actions: vec![freeze(ParameterDef {
            k_n_per_m: 0.0,
            ..ParameterDef::default()
        })],
    };
    assert!(matches!(replay(&def), Err(AppError::Session(_))));
}

#[test]
fn bundled_initial_conditions_session() {
    let (def, session) =
        load_and_replay(&workspace_root().join("sessions/initial_conditions.yaml")).unwrap();

    assert_eq!(def.freeze_count(), 4);
    let traces = session.traces().all();
    assert_eq!(traces.len(), 1);
    assert_eq!(traces[0].params().t_max, 5.0);
    assert_eq!(session.params().m, 0.5);
}

#[test]
fn bundled_damping_regimes_session_exports() {
    let (_, session) =
        load_and_replay(&workspace_root().join("sessions/damping_regimes.yaml")).unwrap();
    assert_eq!(session.traces().len(), 3);

    let dir = std::env::temp_dir().join("osc_app_export_test");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let csv_path = dir.join("traces.csv");
    let format = export_traces(session.traces(), &csv_path, None, "").unwrap();
    assert_eq!(format, ExportFormat::Csv);
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 1 + 3 * 600);

    let html_path = dir.join("plot.out");
    export_traces(
        session.traces(),
        &html_path,
        Some(ExportFormat::Html),
        "Regimes",
    )
    .unwrap();
    assert!(std::fs::read_to_string(&html_path).unwrap().contains("<title>Regimes</title>"));
}

#[test]
fn export_refuses_empty_store() {
    let session = Session::new(10).unwrap();
    let path = std::env::temp_dir().join("osc_app_empty_export.csv");
    assert!(matches!(
        export_traces(session.traces(), &path, None, ""),
        Err(AppError::InvalidInput(_))
    ));
}
