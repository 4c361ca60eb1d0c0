use thiserror::Error;

pub type OscResult<T> = Result<T, OscError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OscError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid parameter {what} = {value}: {reason}")]
    InvalidParameter {
        what: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
