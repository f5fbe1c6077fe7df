//! Engine configuration.
//!
//! The engine itself is pure; the only external input it consumes is the
//! alternate OpenStack flavor used as the escalation target. That value
//! comes from the `OPENSTACK_CONTROLPLANE_FLAVOR_ALTERNATE` environment
//! variable, or from an optional `upsize.toml` file. The environment
//! wins when both are set.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable naming the alternate OpenStack flavor.
pub const ALTERNATE_FLAVOR_ENV: &str = "OPENSTACK_CONTROLPLANE_FLAVOR_ALTERNATE";

/// External inputs for escalation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalateConfig {
    /// Flavor substituted when escalating an OpenStack size.
    /// OpenStack has no computable successor; the caller supplies one.
    pub openstack_alternate_flavor: Option<String>,
}

impl EscalateConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_value(env::var(ALTERNATE_FLAVOR_ENV).ok())
    }

    /// Read configuration from a TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EscalateConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, letting the environment override the file.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };

        Ok(config.with_env_override(Self::from_env()))
    }

    /// Apply environment-sourced values on top of file-sourced ones.
    /// Only values the environment actually sets take precedence.
    fn with_env_override(mut self, env: EscalateConfig) -> Self {
        if env.openstack_alternate_flavor.is_some() {
            self.openstack_alternate_flavor = env.openstack_alternate_flavor;
        }
        self
    }

    // An empty value is treated as unset, matching shell usage where the
    // variable exists but carries no flavor.
    fn from_env_value(value: Option<String>) -> Self {
        EscalateConfig {
            openstack_alternate_flavor: value.filter(|v| !v.is_empty()),
        }
    }
}
