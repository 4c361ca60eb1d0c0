//! Closed-form solver for the linear damped harmonic oscillator
//! `m x'' + b x' + k x = 0`.
//!
//! The trajectory is evaluated analytically from the characteristic roots;
//! nothing here steps an ODE. Every function is pure and total for a
//! [`ParameterSet`](osc_core::ParameterSet) that satisfies its invariants.

pub mod closed_form;
pub mod grid;
pub mod regime;
pub mod solve;
pub mod sweep;

pub use closed_form::ClosedForm;
pub use grid::TimeGrid;
pub use regime::{DampingRegime, classify};
pub use solve::{SolutionCurve, solve};
pub use sweep::{SweepFrame, SweepSpec, sweep};
