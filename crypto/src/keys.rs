//! Ed25519 key pair construction.

use ed25519_dalek::SigningKey;
use netspawner_types::{KeyPair, PrivateKey, PublicKey};

/// Derive the public key from a private key.
pub fn public_from_private(private: &PrivateKey) -> PublicKey {
    let signing_key = SigningKey::from_bytes(&private.0);
    PublicKey(signing_key.verifying_key().to_bytes())
}

/// Reconstruct a full key pair from a private key.
pub fn keypair_from_private(private: PrivateKey) -> KeyPair {
    let public = public_from_private(&private);
    KeyPair::Ed25519 { public, private }
}

/// Build a key pair from a 32-byte secret seed (deterministic).
///
/// The seed is expanded with SHA-512 and clamped per RFC 8032; every 32-byte
/// input is accepted. The leaf of a derivation path feeds in here.
pub fn keypair_from_seed(seed: &[u8; 32]) -> KeyPair {
    keypair_from_private(PrivateKey(*seed))
}
