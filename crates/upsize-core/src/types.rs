//! Shared types used across upsize crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EscalateError;

/// Cloud platform discriminator.
///
/// Covers the platforms the dispatch layer routes on. Platforms without
/// an escalation pipeline (`VSphere`, `BareMetal`, `None`) are still
/// representable so callers can hand us whatever their infrastructure
/// reports; they fail with `UnsupportedPlatform` at dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "AWS")]
    Aws,
    Azure,
    #[serde(rename = "GCP")]
    Gcp,
    Nutanix,
    OpenStack,
    VSphere,
    BareMetal,
    None,
}

/// How fully a platform's escalation rules are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportLevel {
    /// Rules cover the platform's full naming scheme.
    Full,
    /// Rules exist but need caller-supplied or manually curated input.
    Manual,
    /// No escalation pipeline for this platform.
    Unsupported,
}

impl Platform {
    /// The platforms with an escalation pipeline.
    pub const SUPPORTED: [Platform; 5] = [
        Platform::Aws,
        Platform::Azure,
        Platform::Gcp,
        Platform::Nutanix,
        Platform::OpenStack,
    ];

    /// Wire form of the discriminator, as infrastructure reports it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Aws => "AWS",
            Platform::Azure => "Azure",
            Platform::Gcp => "GCP",
            Platform::Nutanix => "Nutanix",
            Platform::OpenStack => "OpenStack",
            Platform::VSphere => "VSphere",
            Platform::BareMetal => "BareMetal",
            Platform::None => "None",
        }
    }

    pub fn support_level(&self) -> SupportLevel {
        match self {
            Platform::Aws | Platform::OpenStack => SupportLevel::Full,
            Platform::Azure | Platform::Gcp | Platform::Nutanix => SupportLevel::Manual,
            Platform::VSphere | Platform::BareMetal | Platform::None => SupportLevel::Unsupported,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = EscalateError;

    /// Parses the wire form, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aws" => Ok(Platform::Aws),
            "azure" => Ok(Platform::Azure),
            "gcp" => Ok(Platform::Gcp),
            "nutanix" => Ok(Platform::Nutanix),
            "openstack" => Ok(Platform::OpenStack),
            "vsphere" => Ok(Platform::VSphere),
            "baremetal" => Ok(Platform::BareMetal),
            "none" => Ok(Platform::None),
            _ => Err(EscalateError::UnsupportedPlatform(s.to_string())),
        }
    }
}

/// A typed, per-platform size value — both engine input and output.
///
/// String platforms carry their identifier; Nutanix sizes by an integer
/// vCPU socket count rather than a parsed identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeSpec {
    /// AWS instance type, e.g. `m6i.large`.
    Aws { instance_type: String },
    /// Azure VM size, e.g. `Standard_D4s_v3`.
    Azure { vm_size: String },
    /// GCP machine type, e.g. `n2-standard-4` or `e2-custom-2-4096`.
    Gcp { machine_type: String },
    /// Nutanix vCPU socket count.
    Nutanix { vcpu_sockets: u32 },
    /// OpenStack flavor name.
    OpenStack { flavor: String },
}

impl SizeSpec {
    pub fn platform(&self) -> Platform {
        match self {
            SizeSpec::Aws { .. } => Platform::Aws,
            SizeSpec::Azure { .. } => Platform::Azure,
            SizeSpec::Gcp { .. } => Platform::Gcp,
            SizeSpec::Nutanix { .. } => Platform::Nutanix,
            SizeSpec::OpenStack { .. } => Platform::OpenStack,
        }
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeSpec::Aws { instance_type } => f.write_str(instance_type),
            SizeSpec::Azure { vm_size } => f.write_str(vm_size),
            SizeSpec::Gcp { machine_type } => f.write_str(machine_type),
            SizeSpec::Nutanix { vcpu_sockets } => write!(f, "{vcpu_sockets}"),
            SizeSpec::OpenStack { flavor } => f.write_str(flavor),
        }
    }
}
