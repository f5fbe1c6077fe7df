//! AWS instance types — `<family>.<multiplier>?<size>`.
//!
//! Escalation doubles the underlying instance:
//! `m6i.large` → `m6i.xlarge` → `m6i.2xlarge` → `m6i.4xlarge`, so the
//! rules keep working when the default instance size changes upstream.

use std::sync::LazyLock;

use tracing::debug;
use upsize_core::{EscalateError, EscalateResult};

use crate::grammar::Grammar;

static GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| {
    Grammar::new(
        r"^(?P<family>[a-z0-9]+)\.(?P<multiplier>[0-9]+)?(?P<size>[a-z]+)$",
        &["family", "size"],
    )
});

/// Checks that `candidate` matches the AWS instance-type grammar.
pub fn validate(candidate: &str) -> EscalateResult<()> {
    GRAMMAR.parse(candidate).map(|_| ())
}

/// Returns the next AWS instance type in the series.
pub fn next_instance_type(current: &str) -> EscalateResult<String> {
    let fields = GRAMMAR.parse(current)?;
    let family = fields.require("family")?;
    let size = fields.require("size")?;

    let next = match fields.opt_int("multiplier")? {
        // Bare sizes below the numbered tiers.
        None => match size {
            "large" => format!("{family}.xlarge"),
            "xlarge" => format!("{family}.2xlarge"),
            _ => return Err(EscalateError::NotSupported(current.to_string())),
        },
        Some(multiplier) => format!("{family}.{}{size}", multiplier * 2),
    };

    debug!(current, next = %next, "escalated aws instance type");

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_steps_to_xlarge() {
        assert_eq!(next_instance_type("m6i.large").unwrap(), "m6i.xlarge");
    }

    #[test]
    fn xlarge_steps_to_2xlarge() {
        assert_eq!(next_instance_type("m6i.xlarge").unwrap(), "m6i.2xlarge");
    }

    #[test]
    fn numbered_tiers_double() {
        assert_eq!(next_instance_type("m6i.2xlarge").unwrap(), "m6i.4xlarge");
        assert_eq!(next_instance_type("c5.4xlarge").unwrap(), "c5.8xlarge");
        assert_eq!(next_instance_type("r5a.12xlarge").unwrap(), "r5a.24xlarge");
    }

    #[test]
    fn bare_sizes_without_successor_are_not_supported() {
        assert_eq!(
            next_instance_type("m6i.medium").unwrap_err(),
            EscalateError::NotSupported("m6i.medium".into())
        );
        assert_eq!(
            next_instance_type("t3.micro").unwrap_err(),
            EscalateError::NotSupported("t3.micro".into())
        );
    }

    #[test]
    fn malformed_identifiers_are_a_format_error() {
        for bad in ["m6ilarge", "m6i.", ".large", "m6i.large.extra", ""] {
            assert_eq!(
                next_instance_type(bad).unwrap_err(),
                EscalateError::UnsupportedFormat(bad.into()),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn output_reparses_in_the_same_grammar() {
        let next = next_instance_type("m6i.2xlarge").unwrap();
        let fields = GRAMMAR.parse(&next).unwrap();
        assert_eq!(fields.require("family").unwrap(), "m6i");
        assert_eq!(fields.opt_int("multiplier").unwrap(), Some(4));
    }
}
