//! osc-project: session file format and input validation.
//!
//! A session file replays a sequence of freeze/clear actions. Everything a
//! session file feeds into the solver passes [`validate_session`] first.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_session};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<SessionDef> {
    let content = std::fs::read_to_string(path)?;
    let session: SessionDef = serde_yaml::from_str(&content)?;
    validate_session(&session)?;
    Ok(session)
}

pub fn save_yaml(path: &Path, session: &SessionDef) -> ProjectResult<()> {
    validate_session(session)?;
    let content = serde_yaml::to_string(session)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<SessionDef> {
    let content = std::fs::read_to_string(path)?;
    let session: SessionDef = serde_json::from_str(&content)?;
    validate_session(&session)?;
    Ok(session)
}

pub fn save_json(path: &Path, session: &SessionDef) -> ProjectResult<()> {
    validate_session(session)?;
    let content = serde_json::to_string_pretty(session)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load_session(path: &Path) -> ProjectResult<SessionDef> {
    if is_json(path) {
        load_json(path)
    } else {
        load_yaml(path)
    }
}

pub fn save_session(path: &Path, session: &SessionDef) -> ProjectResult<()> {
    if is_json(path) {
        save_json(path, session)
    } else {
        save_yaml(path, session)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
