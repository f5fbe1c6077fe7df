//! Per-provider escalation pipelines.
//!
//! One module per cloud provider grammar. Each exposes a single pure
//! function that parses the current size, steps it by that provider's
//! sizing rules, and reformats it.

pub mod aws;
pub mod azure;
pub mod gcp;
pub mod nutanix;
pub mod openstack;
