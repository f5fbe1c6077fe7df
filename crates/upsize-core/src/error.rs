//! Error types for instance-size escalation.

use thiserror::Error;

/// Result type alias for escalation operations.
pub type EscalateResult<T> = Result<T, EscalateError>;

/// Errors that can occur while computing the next instance size.
///
/// All variants are terminal: a malformed identifier will not become
/// valid on retry, and a size past its ceiling has no successor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscalateError {
    /// The platform discriminator is not recognised by the dispatch layer.
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The identifier did not match the provider's expected grammar.
    /// Each platform has its own format, and an identifier we cannot
    /// parse is one we cannot escalate.
    #[error("instance type did not match expected format: {0}")]
    UnsupportedFormat(String),

    /// The identifier parsed, but no successor rule exists for it —
    /// either the ceiling was reached or the family/flavor combination
    /// has no stepping rule.
    #[error("instance type is not supported: {0}")]
    NotSupported(String),

    /// Escalation requested but the required size value is absent
    /// (OpenStack with no alternate flavor configured).
    #[error("instance size is missing: {0}")]
    MissingSize(String),

    /// A field that matched its grammar failed numeric conversion.
    /// This is a parser/calculator contract violation, not bad input;
    /// it aborts the call, never the process.
    #[error("parser contract violated for {identifier}: field {field} is not numeric")]
    Contract {
        identifier: String,
        field: &'static str,
    },
}
