//! Cryptographic key types for node identity and signing.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Signature algorithms a [`KeyPair`] can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    Ed25519,
}

impl KeyAlgorithm {
    /// Dotted-decimal object identifier used in SPKI / PKCS#8 containers.
    pub const fn oid(self) -> &'static str {
        match self {
            KeyAlgorithm::Ed25519 => "1.3.101.112",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            KeyAlgorithm::Ed25519 => "ed25519",
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 32-byte Ed25519 public key (compressed Edwards point).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey(pub [u8; 32]);

/// A 32-byte Ed25519 private key (the RFC 8032 secret seed).
///
/// This type intentionally does not implement `Debug`, `Serialize`, or `Clone`
/// to prevent accidental exposure. Key bytes are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(pub [u8; 32]);

/// A 64-byte Ed25519 signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(pub [u8; 64]);

/// A signing key pair, tagged by algorithm.
///
/// Ed25519 is the only member today; new curves become new variants rather
/// than runtime type checks at the call sites.
pub enum KeyPair {
    Ed25519 {
        public: PublicKey,
        private: PrivateKey,
    },
}

impl KeyPair {
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            KeyPair::Ed25519 { .. } => KeyAlgorithm::Ed25519,
        }
    }

    pub fn public(&self) -> &PublicKey {
        match self {
            KeyPair::Ed25519 { public, .. } => public,
        }
    }

    pub fn private(&self) -> &PrivateKey {
        match self {
            KeyPair::Ed25519 { private, .. } => private,
        }
    }
}

impl PublicKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl PrivateKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Signature {
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}
