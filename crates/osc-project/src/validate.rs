//! Session validation logic.

use crate::schema::{ActionDef, ParameterDef, SessionDef};
use osc_core::OscError;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_session(session: &SessionDef) -> Result<(), ValidationError> {
    if session.version == 0 || session.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: session.version,
        });
    }

    if session.grid.samples < 2 {
        return Err(ValidationError::InvalidValue {
            field: "grid.samples".to_string(),
            value: session.grid.samples.to_string(),
            reason: "must be at least 2".to_string(),
        });
    }

    for (idx, action) in session.actions.iter().enumerate() {
        if let ActionDef::Freeze { params } = action {
            validate_params(params, &format!("actions[{idx}].params"))?;
        }
    }

    Ok(())
}

/// Check `params` against the oscillator invariants, naming the offending
/// field under `context`.
pub fn validate_params(params: &ParameterDef, context: &str) -> Result<(), ValidationError> {
    params.to_params().map(|_| ()).map_err(|err| {
        let (what, value, reason) = match err {
            OscError::InvalidParameter {
                what,
                value,
                reason,
            } => (what, value, reason.to_string()),
            OscError::NonFinite { what, value } => (what, value, "must be finite".to_string()),
            OscError::InvalidArg { what } => (what, f64::NAN, "invalid".to_string()),
        };
        ValidationError::InvalidValue {
            field: format!("{context}.{}", field_name(what)),
            value: value.to_string(),
            reason,
        }
    })
}

fn field_name(what: &str) -> &str {
    match what {
        "m" => "m_kg",
        "k" => "k_n_per_m",
        "b" => "b_kg_per_s",
        "x0" => "x0_m",
        "v0" => "v0_m_per_s",
        "t_max" => "t_max_s",
        other => other,
    }
}
