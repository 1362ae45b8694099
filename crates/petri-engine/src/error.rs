//! Error types for the digest engine.

use petri_codec::CodecError;
use petri_core::RuleError;
use std::fmt;

/// Errors from constructing a digest engine.
///
/// Both variants are construction-time precondition failures with no side
/// effects: no grid is built and no engine exists until every input
/// validates. Evolution itself cannot fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DigestError {
    /// The rule descriptor failed to parse.
    Rule(RuleError),
    /// The input bytes could not be packed into the requested grid.
    Codec(CodecError),
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(e) => write!(f, "invalid rule descriptor: {e}"),
            Self::Codec(e) => write!(f, "invalid digest input: {e}"),
        }
    }
}

impl std::error::Error for DigestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rule(e) => Some(e),
            Self::Codec(e) => Some(e),
        }
    }
}

impl From<RuleError> for DigestError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}

impl From<CodecError> for DigestError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}
