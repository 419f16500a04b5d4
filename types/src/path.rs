//! BIP44-style derivation paths.
//!
//! A path is an ordered list of `u32` components. Every component is
//! promoted to a hardened index at derivation time, so the textual form
//! carries no `'` markers: `44/7337/0/0`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{PathComponentError, PathParseError};

/// Path used when the caller supplies none: purpose 44, coin type 7337,
/// account 0, index 0.
pub const DEFAULT_DERIVATION_PATH: [u32; 4] = [44, 7337, 0, 0];

/// An ordered sequence of (unhardened) path components.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DerivationPath(Vec<u32>);

impl DerivationPath {
    /// Build a path from raw components. An empty list is kept as-is; use
    /// [`DerivationPath::or_default`] to apply the default.
    pub fn new(components: Vec<u32>) -> Self {
        Self(components)
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `self`, or the default path if `self` has no components.
    pub fn or_default(self) -> Self {
        if self.is_empty() {
            Self::default()
        } else {
            self
        }
    }
}

impl Default for DerivationPath {
    fn default() -> Self {
        Self(DEFAULT_DERIVATION_PATH.to_vec())
    }
}

impl From<Vec<u32>> for DerivationPath {
    fn from(components: Vec<u32>) -> Self {
        Self::new(components)
    }
}

/// Parses `/`-separated decimal components. Blank components are skipped;
/// input with no components at all yields the default path.
impl FromStr for DerivationPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut components = Vec::new();
        for part in s.split('/') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let fail = |kind| PathParseError {
                token: part.to_string(),
                kind,
            };
            // `u32::from_str` also takes a leading `+`.
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(fail(PathComponentError::NotDecimal));
            }
            let value = part
                .parse::<u32>()
                .map_err(|_| fail(PathComponentError::OutOfRange))?;
            components.push(value);
        }
        Ok(Self(components).or_default())
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slash_separated_components() {
        let path: DerivationPath = "44/7337/1/2".parse().unwrap();
        assert_eq!(path.components(), &[44, 7337, 1, 2]);
    }

    #[test]
    fn empty_input_selects_default() {
        let path: DerivationPath = "".parse().unwrap();
        assert_eq!(path.components(), &DEFAULT_DERIVATION_PATH);
        let path: DerivationPath = "  ".parse().unwrap();
        assert_eq!(path, DerivationPath::default());
        let path: DerivationPath = "//".parse().unwrap();
        assert_eq!(path, DerivationPath::default());
    }

    #[test]
    fn blank_components_are_skipped() {
        let path: DerivationPath = "/44// 7337 /0/0/".parse().unwrap();
        assert_eq!(path.components(), &[44, 7337, 0, 0]);
    }

    #[test]
    fn non_numeric_component_is_named() {
        let err = "44/abc/0".parse::<DerivationPath>().unwrap_err();
        assert_eq!(err.token, "abc");
        assert_eq!(err.kind, PathComponentError::NotDecimal);
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn out_of_range_component_rejected() {
        let err = "44/4294967296".parse::<DerivationPath>().unwrap_err();
        assert_eq!(err.token, "4294967296");
        assert_eq!(err.kind, PathComponentError::OutOfRange);
        let max: DerivationPath = "4294967295".parse().unwrap();
        assert_eq!(max.components(), &[u32::MAX]);
    }

    #[test]
    fn negative_component_rejected() {
        let err = "44/-1".parse::<DerivationPath>().unwrap_err();
        assert_eq!(err.token, "-1");
        assert_eq!(err.kind, PathComponentError::NotDecimal);
    }

    #[test]
    fn signed_component_rejected() {
        let err = "+44/7337".parse::<DerivationPath>().unwrap_err();
        assert_eq!(err.token, "+44");
        assert_eq!(err.kind, PathComponentError::NotDecimal);
        assert!(err.to_string().contains("\"+44\""));
    }

    #[test]
    fn display_uses_slashes() {
        assert_eq!(DerivationPath::default().to_string(), "44/7337/0/0");
    }

    #[test]
    fn or_default_keeps_non_empty_paths() {
        let path = DerivationPath::new(vec![1]).or_default();
        assert_eq!(path.components(), &[1]);
        assert_eq!(
            DerivationPath::new(Vec::new()).or_default(),
            DerivationPath::default()
        );
    }
}
