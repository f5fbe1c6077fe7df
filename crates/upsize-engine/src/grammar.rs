//! Named-capture-group grammar helper.
//!
//! Each provider identifier grammar is an anchored regex with named
//! groups. A parse succeeds only when the whole identifier matches and
//! every required group captured something; an optional group that did
//! not participate stays absent, which is distinct from capturing an
//! empty string.

use regex::{Captures, Regex};
use upsize_core::{EscalateError, EscalateResult};

/// A provider identifier grammar.
pub struct Grammar {
    re: Regex,
    required: &'static [&'static str],
}

/// Fields extracted from one identifier by a [`Grammar`].
#[derive(Debug)]
pub struct ParsedFields<'a> {
    identifier: &'a str,
    caps: Captures<'a>,
}

impl Grammar {
    /// Compile a grammar from an anchored pattern.
    ///
    /// Panics on an invalid pattern: grammars are compile-time constants,
    /// so a bad one is a programmer error, not a runtime condition.
    pub fn new(pattern: &str, required: &'static [&'static str]) -> Self {
        let re = Regex::new(pattern).expect("grammar pattern must be valid regex");
        Grammar { re, required }
    }

    /// Parse an identifier, enforcing presence of all required groups.
    pub fn parse<'a>(&self, identifier: &'a str) -> EscalateResult<ParsedFields<'a>> {
        let caps = self
            .re
            .captures(identifier)
            .ok_or_else(|| EscalateError::UnsupportedFormat(identifier.to_string()))?;

        for &name in self.required {
            if caps.name(name).is_none() {
                return Err(EscalateError::UnsupportedFormat(identifier.to_string()));
            }
        }

        Ok(ParsedFields { identifier, caps })
    }
}

impl<'a> ParsedFields<'a> {
    pub fn identifier(&self) -> &'a str {
        self.identifier
    }

    /// The captured text for `name`, if the group participated.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.caps.name(name).map(|m| m.as_str())
    }

    /// The captured text for a group the grammar guarantees present.
    pub fn require(&self, name: &'static str) -> EscalateResult<&'a str> {
        self.get(name).ok_or_else(|| self.contract(name))
    }

    /// A required integer field. The grammar matched digits, so a
    /// conversion failure is a contract violation.
    pub fn int(&self, name: &'static str) -> EscalateResult<u64> {
        self.require(name)?
            .parse()
            .map_err(|_| self.contract(name))
    }

    /// An optional integer field.
    pub fn opt_int(&self, name: &'static str) -> EscalateResult<Option<u64>> {
        match self.get(name) {
            Some(raw) => raw.parse().map(Some).map_err(|_| self.contract(name)),
            None => Ok(None),
        }
    }

    /// A required float field (fractional vCPU counts in GCP custom types).
    pub fn float(&self, name: &'static str) -> EscalateResult<f64> {
        self.require(name)?
            .parse()
            .map_err(|_| self.contract(name))
    }

    fn contract(&self, field: &'static str) -> EscalateError {
        EscalateError::Contract {
            identifier: self.identifier.to_string(),
            field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar() -> Grammar {
        Grammar::new(
            r"^(?P<family>[a-z]+)\.(?P<multiplier>[0-9]+)?(?P<size>[a-z]+)$",
            &["family", "size"],
        )
    }

    #[test]
    fn parse_extracts_named_fields() {
        let g = grammar();
        let fields = g.parse("m.2xlarge").unwrap();
        assert_eq!(fields.require("family").unwrap(), "m");
        assert_eq!(fields.opt_int("multiplier").unwrap(), Some(2));
        assert_eq!(fields.require("size").unwrap(), "xlarge");
    }

    #[test]
    fn optional_group_is_absent_not_empty() {
        let g = grammar();
        let fields = g.parse("m.large").unwrap();
        assert_eq!(fields.get("multiplier"), None);
        assert_eq!(fields.opt_int("multiplier").unwrap(), None);
    }

    #[test]
    fn no_match_is_a_format_error() {
        let g = grammar();
        let err = g.parse("not-an-identifier").unwrap_err();
        assert_eq!(
            err,
            EscalateError::UnsupportedFormat("not-an-identifier".into())
        );
    }

    #[test]
    fn anchoring_rejects_surrounding_garbage() {
        let g = grammar();
        assert!(g.parse("m.large.extra").is_err());
        assert!(g.parse("xx m.large").is_err());
    }

    #[test]
    fn missing_unrequired_field_is_a_contract_violation() {
        let g = grammar();
        let fields = g.parse("m.large").unwrap();
        let err = fields.require("multiplier").unwrap_err();
        assert!(matches!(err, EscalateError::Contract { field, .. } if field == "multiplier"));
    }

    #[test]
    fn float_field_parses() {
        let g = Grammar::new(r"^(?P<vcpu>[0-9.]+)$", &["vcpu"]);
        let fields = g.parse("0.25").unwrap();
        assert_eq!(fields.float("vcpu").unwrap(), 0.25);
    }

    #[test]
    fn unparsable_numeric_is_a_contract_violation() {
        // "1.2.3" satisfies the character class but is not a number.
        let g = Grammar::new(r"^(?P<vcpu>[0-9.]+)$", &["vcpu"]);
        let fields = g.parse("1.2.3").unwrap();
        assert!(matches!(
            fields.float("vcpu").unwrap_err(),
            EscalateError::Contract { .. }
        ));
    }
}
