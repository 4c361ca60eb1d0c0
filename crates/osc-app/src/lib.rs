//! Shared application layer for the oscillator explorer.
//!
//! Owns the per-session state (live preview + trace store) and the
//! services a frontend calls: replaying session files and exporting traces.

pub mod error;
pub mod export_service;
pub mod replay_service;
pub mod session;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use export_service::export_traces;
pub use replay_service::{load_and_replay, replay};
pub use session::{LivePreview, Session};
