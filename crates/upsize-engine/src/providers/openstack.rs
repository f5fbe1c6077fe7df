//! OpenStack flavors — substitution, not computation.
//!
//! Flavor names carry no sizing grammar we could step, so the successor
//! is whatever alternate flavor the environment supplies (see
//! `upsize_core::config`). The engine only validates that one exists.

use tracing::debug;
use upsize_core::{EscalateConfig, EscalateError, EscalateResult};

/// Returns the configured alternate flavor for `current`.
pub fn alternate_flavor(current: &str, config: &EscalateConfig) -> EscalateResult<String> {
    match config.openstack_alternate_flavor.as_deref() {
        Some(flavor) if !flavor.is_empty() => {
            debug!(current, next = flavor, "substituted openstack flavor");
            Ok(flavor.to_string())
        }
        _ => Err(EscalateError::MissingSize(current.to_string())),
    }
}
