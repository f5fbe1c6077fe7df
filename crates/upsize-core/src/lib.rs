//! upsize-core — shared types, errors, and configuration for the
//! instance-size escalation engine.

pub mod config;
pub mod error;
pub mod types;

pub use config::EscalateConfig;
pub use error::{EscalateError, EscalateResult};
pub use types::*;
