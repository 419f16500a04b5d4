//! Errors raised while parsing user-facing type representations.

use thiserror::Error;

/// A derivation path component that is not an unsigned 32-bit decimal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid BIP44 path component {token:?}: {kind}")]
pub struct PathParseError {
    /// The offending component, trimmed.
    pub token: String,
    pub kind: PathComponentError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathComponentError {
    /// Contains something other than the digits `0-9` (signs included).
    #[error("not an unsigned decimal number")]
    NotDecimal,
    #[error("value does not fit in 32 bits")]
    OutOfRange,
}
