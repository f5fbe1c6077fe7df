//! upsize-engine — per-provider instance-size escalation.
//!
//! Takes an opaque instance-type identifier (`m6i.large`,
//! `Standard_D4s_v3`, `n2-custom-4-12288`, ...) and computes the next
//! larger identifier in that provider's naming scheme, or fails with a
//! typed [`EscalateError`]. The engine is pure data transformation:
//! stateless, no I/O, safe for unlimited concurrent calls.
//!
//! # Escalation
//!
//! ```text
//! (platform, current identifier)
//!     → provider grammar parse (named fields, arity-checked)
//!     → family/flavor stepping rules
//!     → reformatted identifier, round-trippable in the same grammar
//! ```
//!
//! Dispatch is by [`Platform`]; each pipeline lives in [`providers`].

pub mod grammar;
pub mod providers;

use tracing::debug;
use upsize_core::{EscalateConfig, EscalateError, EscalateResult, Platform, SizeSpec};

/// The dispatch layer: routes escalation requests to the provider
/// pipeline matching the platform discriminator.
///
/// Holds only external configuration (the OpenStack alternate flavor);
/// every call is independent and side-effect-free.
#[derive(Debug, Clone, Default)]
pub struct Escalator {
    config: EscalateConfig,
}

impl Escalator {
    /// Create an escalator with the given configuration.
    pub fn new(config: EscalateConfig) -> Self {
        Escalator { config }
    }

    /// Create an escalator configured from the process environment.
    pub fn from_env() -> Self {
        Escalator::new(EscalateConfig::from_env())
    }

    /// Compute the next larger size for `current` on `platform`.
    ///
    /// `current` is the provider identifier in its string form; for
    /// Nutanix it is the decimal vCPU socket count.
    pub fn escalate(&self, platform: Platform, current: &str) -> EscalateResult<String> {
        debug!(platform = %platform, current, "escalating instance size");

        match platform {
            Platform::Aws => providers::aws::next_instance_type(current),
            Platform::Azure => providers::azure::next_vm_size(current),
            Platform::Gcp => providers::gcp::next_machine_type(current),
            Platform::Nutanix => {
                let sockets: u32 = current
                    .parse()
                    .map_err(|_| EscalateError::UnsupportedFormat(current.to_string()))?;
                Ok(providers::nutanix::next_vcpu_sockets(sockets).to_string())
            }
            Platform::OpenStack => providers::openstack::alternate_flavor(current, &self.config),
            other => Err(EscalateError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Validate that `current` parses in `platform`'s grammar, without
    /// computing a successor. A size at its ceiling is still valid here.
    pub fn check(&self, platform: Platform, current: &str) -> EscalateResult<()> {
        match platform {
            Platform::Aws => providers::aws::validate(current),
            Platform::Azure => providers::azure::validate(current),
            Platform::Gcp => providers::gcp::validate(current),
            Platform::Nutanix => current
                .parse::<u32>()
                .map(|_| ())
                .map_err(|_| EscalateError::UnsupportedFormat(current.to_string())),
            // Flavor names carry no grammar; any value is well-formed.
            Platform::OpenStack => Ok(()),
            other => Err(EscalateError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Typed variant of [`Self::escalate`] for callers holding a
    /// structured size spec; the platform is implied by the variant.
    pub fn escalate_spec(&self, spec: &SizeSpec) -> EscalateResult<SizeSpec> {
        match spec {
            SizeSpec::Aws { instance_type } => Ok(SizeSpec::Aws {
                instance_type: providers::aws::next_instance_type(instance_type)?,
            }),
            SizeSpec::Azure { vm_size } => Ok(SizeSpec::Azure {
                vm_size: providers::azure::next_vm_size(vm_size)?,
            }),
            SizeSpec::Gcp { machine_type } => Ok(SizeSpec::Gcp {
                machine_type: providers::gcp::next_machine_type(machine_type)?,
            }),
            SizeSpec::Nutanix { vcpu_sockets } => Ok(SizeSpec::Nutanix {
                vcpu_sockets: providers::nutanix::next_vcpu_sockets(*vcpu_sockets),
            }),
            SizeSpec::OpenStack { flavor } => Ok(SizeSpec::OpenStack {
                flavor: providers::openstack::alternate_flavor(flavor, &self.config)?,
            }),
        }
    }
}
