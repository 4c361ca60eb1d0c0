//! osc-core: stable foundation for the oscillator explorer.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - params (oscillator parameter snapshot + parameter keys)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod params;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{OscError, OscResult};
pub use numeric::*;
pub use params::{ParamKey, ParameterSet};
