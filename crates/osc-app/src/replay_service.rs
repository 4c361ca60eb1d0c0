//! Replaying session files into a live [`Session`].

use crate::{AppResult, Session};
use osc_project::{ActionDef, SessionDef};
use std::path::Path;

/// Apply every action of `def` to a fresh session, in file order.
///
/// The session's live parameters end up at the last frozen set.
pub fn replay(def: &SessionDef) -> AppResult<Session> {
    osc_project::validate_session(def).map_err(osc_project::ProjectError::from)?;

    let mut session = Session::new(def.grid.samples)?;
    for action in &def.actions {
        match action {
            ActionDef::Freeze { params } => {
                session.set_params(params.to_params()?)?;
                session.freeze();
            }
            ActionDef::Clear => session.clear(),
        }
    }

    tracing::info!(
        name = %def.name,
        actions = def.actions.len(),
        traces = session.traces().len(),
        "session replayed"
    );
    Ok(session)
}

pub fn load_and_replay(path: &Path) -> AppResult<(SessionDef, Session)> {
    let def = osc_project::load_session(path)?;
    let session = replay(&def)?;
    Ok((def, session))
}
