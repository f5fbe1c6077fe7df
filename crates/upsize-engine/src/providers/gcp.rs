//! GCP machine types — `<family>-<subfamily>(-<flavor>)?-<vcpus>(-<memory-mb>)?`.
//!
//! Two disjoint shapes share the grammar:
//!
//! - standard types (`n2-standard-4`): the vCPU multiplier steps through
//!   family-specific thresholds;
//! - custom types (`n2-custom-4-12288`, `e2-custom-micro-0.25-2048`): the
//!   vCPU count and memory step together, with rules keyed by family and
//!   flavor. Custom e2 micro/small carry a fractional vCPU count.

use std::sync::LazyLock;

use tracing::debug;
use upsize_core::{EscalateError, EscalateResult};

use crate::grammar::Grammar;

static GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| {
    Grammar::new(
        r"^(?P<family>[0-9a-z]+)-(?P<subfamily>[0-9a-z]+(-(?P<flavor>[a-z]+))?)-(?P<multiplier>[0-9.]+)(-(?P<memory>[0-9]+))?$",
        &["family", "subfamily", "multiplier"],
    )
});

/// Memory granted per vCPU when stepping a custom type, in MB. This is a
/// sizing policy (a comfortable bump), not a GCP platform constraint;
/// GCP itself allows a range per family.
const CUSTOM_MEMORY_PER_VCPU_MB: u64 = 3 * 1024;

/// Checks that `candidate` matches the GCP machine-type grammar.
pub fn validate(candidate: &str) -> EscalateResult<()> {
    GRAMMAR.parse(candidate).map(|_| ())
}

/// Returns the next GCP machine type in the series.
pub fn next_machine_type(current: &str) -> EscalateResult<String> {
    let fields = GRAMMAR.parse(current)?;
    let family = fields.require("family")?;
    let subfamily = fields.require("subfamily")?;
    let flavor = fields.get("flavor");
    let vcpus = fields.float("multiplier")?;
    let memory_mb = fields.opt_int("memory")?.unwrap_or(0);

    let next = if subfamily.starts_with("custom") {
        next_custom(current, family, subfamily, flavor, vcpus, memory_mb)?
    } else {
        next_standard(current, family, vcpus)?
    };

    debug!(current, next = %next, "escalated gcp machine type");

    Ok(next)
}

/// Step a custom machine type. Rules are keyed by (family, flavor);
/// a pair without an entry has no successor.
fn next_custom(
    current: &str,
    family: &str,
    subfamily: &str,
    flavor: Option<&str>,
    vcpus: f64,
    memory_mb: u64,
) -> EscalateResult<String> {
    if vcpus == 0.0 || memory_mb == 0 {
        return Err(EscalateError::NotSupported(current.to_string()));
    }

    let whole_vcpus = vcpus as u64;

    match (family, flavor) {
        // N1: vCPUs step by 2. GCP allows up to 96 on newer CPU
        // platforms, but only 64 on older ones, and we cannot detect
        // which — cap at 64.
        ("n1", None) => {
            let vcpus = if whole_vcpus < 64 {
                whole_vcpus + 2
            } else {
                whole_vcpus
            };
            Ok(format_custom(family, subfamily, vcpus))
        }

        // N2: multiples of 2 up to 32 vCPUs, multiples of 4 beyond,
        // topping out at 80.
        ("n2", None) => {
            let vcpus = if whole_vcpus < 32 {
                whole_vcpus + 2
            } else if whole_vcpus <= 76 {
                whole_vcpus + 4
            } else {
                whole_vcpus
            };
            Ok(format_custom(family, subfamily, vcpus))
        }

        // N2D: discrete ladder 2, 4, 8, 16, then +16 per step up to 96.
        ("n2d", None) => {
            let vcpus = match whole_vcpus {
                2 => 4,
                4 => 8,
                8 => 16,
                96 => 96,
                v => v + 16,
            };
            Ok(format_custom(family, subfamily, vcpus))
        }

        // E2 shared-core flavors: the vCPU count is fixed per flavor, so
        // only memory steps, bounded by the flavor's ceiling.
        ("e2", Some("micro")) => next_e2_shared(current, family, subfamily, vcpus, memory_mb, 2 * 1024),
        ("e2", Some("small")) => next_e2_shared(current, family, subfamily, vcpus, memory_mb, 4 * 1024),

        // E2 medium: memory-only stepping like the other shared-core
        // flavors, but with a whole vCPU count.
        ("e2", Some("medium")) => {
            if memory_mb >= 8 * 1024 {
                return Err(EscalateError::NotSupported(current.to_string()));
            }
            Ok(format!(
                "{family}-{subfamily}-{whole_vcpus}-{}",
                memory_mb + 1024
            ))
        }

        // E2 without a flavor: multiples of 2 up to 32 vCPUs.
        ("e2", None) => {
            let vcpus = if whole_vcpus < 32 {
                whole_vcpus + 2
            } else {
                whole_vcpus
            };
            Ok(format_custom(family, subfamily, vcpus))
        }

        _ => Err(EscalateError::NotSupported(current.to_string())),
    }
}

/// Memory-only stepping for fractional-vCPU e2 flavors. The vCPU count
/// is reformatted with two decimals, exactly as GCP spells it.
fn next_e2_shared(
    current: &str,
    family: &str,
    subfamily: &str,
    vcpus: f64,
    memory_mb: u64,
    ceiling_mb: u64,
) -> EscalateResult<String> {
    if memory_mb >= ceiling_mb {
        return Err(EscalateError::NotSupported(current.to_string()));
    }

    Ok(format!("{family}-{subfamily}-{vcpus:.2}-{}", memory_mb + 1024))
}

fn format_custom(family: &str, subfamily: &str, vcpus: u64) -> String {
    let memory_mb = vcpus * CUSTOM_MEMORY_PER_VCPU_MB;

    format!("{family}-{subfamily}-{vcpus}-{memory_mb}")
}

/// Step a standard machine type through the family-specific thresholds.
/// Always reformats as `<family>-standard-<multiplier>`.
fn next_standard(current: &str, family: &str, multiplier: f64) -> EscalateResult<String> {
    // Fractional vCPU counts only exist in custom shared-core shapes;
    // a standard type with one is malformed.
    if multiplier.fract() != 0.0 {
        return Err(EscalateError::UnsupportedFormat(current.to_string()));
    }

    let unsupported = || EscalateError::NotSupported(current.to_string());

    let multiplier = match multiplier as u64 {
        m if family == "e2" && m >= 32 => return Err(unsupported()),
        32 if family == "n2" => 48,
        64 if family == "n2" => 80,
        64 | 80 => 96,
        m if family == "n1" && m >= 96 => return Err(unsupported()),
        96 => 128,
        m if m >= 128 => return Err(unsupported()),
        m => m * 2,
    };

    Ok(format!("{family}-standard-{multiplier}"))
}
