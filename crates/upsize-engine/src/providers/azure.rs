//! Azure VM sizes — `Standard_<family><multiplier><subfamily>?<_vN>?`.
//!
//! Multipliers double until 32, then follow Azure's published tiers
//! (32 → 48 → 64). Sizes at 64 and above have no successor here.

use std::sync::LazyLock;

use tracing::debug;
use upsize_core::{EscalateError, EscalateResult};

use crate::grammar::Grammar;

static GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| {
    Grammar::new(
        r"^Standard_(?P<family>[A-Za-z]+)(?P<multiplier>[0-9]+)(?P<subfamily>[a-z]*)(?P<version>_v[0-9]+)?$",
        &["family", "multiplier", "subfamily"],
    )
});

/// Checks that `candidate` matches the Azure VM size grammar.
pub fn validate(candidate: &str) -> EscalateResult<()> {
    GRAMMAR.parse(candidate).map(|_| ())
}

/// Returns the next Azure VM size in the series. Family, subfamily, and
/// version suffix pass through unchanged.
pub fn next_vm_size(current: &str) -> EscalateResult<String> {
    let fields = GRAMMAR.parse(current)?;
    let family = fields.require("family")?;
    let subfamily = fields.require("subfamily")?;
    let version = fields.get("version").unwrap_or("");
    let multiplier = fields.int("multiplier")?;

    let multiplier = match multiplier {
        32 => 48,
        48 => 64,
        m if m >= 64 => return Err(EscalateError::NotSupported(current.to_string())),
        m => m * 2,
    };

    let next = format!("Standard_{family}{multiplier}{subfamily}{version}");
    debug!(current, next = %next, "escalated azure vm size");

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_multipliers_double() {
        assert_eq!(next_vm_size("Standard_D4s_v3").unwrap(), "Standard_D8s_v3");
        assert_eq!(next_vm_size("Standard_D8s_v3").unwrap(), "Standard_D16s_v3");
    }

    #[test]
    fn stepped_tiers_above_32() {
        assert_eq!(next_vm_size("Standard_D32s_v3").unwrap(), "Standard_D48s_v3");
        assert_eq!(next_vm_size("Standard_D48s_v3").unwrap(), "Standard_D64s_v3");
    }

    #[test]
    fn ceiling_at_64() {
        assert_eq!(
            next_vm_size("Standard_D64s_v3").unwrap_err(),
            EscalateError::NotSupported("Standard_D64s_v3".into())
        );
        assert_eq!(
            next_vm_size("Standard_M128ms").unwrap_err(),
            EscalateError::NotSupported("Standard_M128ms".into())
        );
    }

    #[test]
    fn version_suffix_is_optional() {
        assert_eq!(next_vm_size("Standard_A4").unwrap(), "Standard_A8");
    }

    #[test]
    fn subfamily_and_version_pass_through() {
        assert_eq!(
            next_vm_size("Standard_E2ads_v5").unwrap(),
            "Standard_E4ads_v5"
        );
    }

    #[test]
    fn malformed_identifiers_are_a_format_error() {
        for bad in ["Basic_D4s_v3", "Standard_D", "Standard_4s", "D4s_v3", ""] {
            assert_eq!(
                next_vm_size(bad).unwrap_err(),
                EscalateError::UnsupportedFormat(bad.into()),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn output_reparses_in_the_same_grammar() {
        let next = next_vm_size("Standard_D32s_v3").unwrap();
        let fields = GRAMMAR.parse(&next).unwrap();
        assert_eq!(fields.require("family").unwrap(), "D");
        assert_eq!(fields.int("multiplier").unwrap(), 48);
        assert_eq!(fields.require("subfamily").unwrap(), "s");
        assert_eq!(fields.get("version"), Some("_v3"));
    }
}
