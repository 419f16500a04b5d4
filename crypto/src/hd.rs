//! Hardened-only BIP32 private key derivation.
//!
//! The tree is the standard secp256k1 BIP32 construction: the master key is
//! `HMAC-SHA512("Bitcoin seed", seed)` and each child adds the left half of
//! `HMAC-SHA512(chain_code, 0x00 || key || be32(index))` to the parent key
//! modulo the secp256k1 group order. The 32-byte leaf key is then used as an
//! Ed25519 secret seed.
//!
//! Every path component `p` is derived as `HARDENED_OFFSET + p`. Ed25519 has
//! no public (non-hardened) derivation, so none is offered here.

use hmac::{Hmac, Mac};
use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, Scalar, U256};
use netspawner_types::DerivationPath;
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{CryptoError, Seed};

type HmacSha512 = Hmac<Sha512>;

/// Offset added to every path component (index >= 2^31 is hardened).
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// Marker byte that precedes the parent private key in hardened derivation.
const HARDENED_MARKER: u8 = 0x00;

/// A node in the derivation tree: 32 bytes of key material plus a 32-byte
/// chain code. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ExtendedKey {
    key: [u8; 32],
    chain_code: [u8; 32],
}

impl ExtendedKey {
    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }
}

/// Derive the master extended key from a 64-byte seed.
pub fn master_key(seed: &Seed) -> Result<ExtendedKey, CryptoError> {
    let (il, ir) = hmac_sha512(MASTER_HMAC_KEY, &[seed.as_bytes()])?;
    // IL must already be a valid secp256k1 secret: non-zero and below n.
    let scalar = Option::<Scalar>::from(Scalar::from_repr(FieldBytes::from(il)))
        .ok_or(CryptoError::InvalidExtendedKey)?;
    if bool::from(scalar.is_zero()) {
        return Err(CryptoError::InvalidExtendedKey);
    }
    Ok(ExtendedKey {
        key: il,
        chain_code: ir,
    })
}

/// Derive the hardened child `HARDENED_OFFSET + index` of `parent`.
///
/// The addition wraps in `u32`, like the reference tooling, but the hardened
/// input layout is used for every index.
pub fn derive_child(parent: &ExtendedKey, index: u32) -> Result<ExtendedKey, CryptoError> {
    ckd_priv(parent, HARDENED_OFFSET.wrapping_add(index))
}

/// Fold [`derive_child`] over `path`, starting from `master`.
///
/// An empty path returns a copy of `master`.
pub fn derive_path(master: &ExtendedKey, path: &DerivationPath) -> Result<ExtendedKey, CryptoError> {
    path.components()
        .iter()
        .try_fold(master.clone(), |key, &index| derive_child(&key, index))
}

/// CKDpriv with the hardened input layout and an already-offset index.
fn ckd_priv(parent: &ExtendedKey, raw_index: u32) -> Result<ExtendedKey, CryptoError> {
    let (il, ir) = hmac_sha512(
        &parent.chain_code,
        &[&[HARDENED_MARKER], &parent.key, &raw_index.to_be_bytes()],
    )?;

    let tweak = <Scalar as Reduce<U256>>::reduce(U256::from_be_slice(&il));
    let parent_scalar = <Scalar as Reduce<U256>>::reduce(U256::from_be_slice(&parent.key));
    let child = tweak + parent_scalar;
    if bool::from(child.is_zero()) {
        return Err(CryptoError::InvalidExtendedKey);
    }

    let mut key = [0u8; 32];
    key.copy_from_slice(&child.to_bytes());
    Ok(ExtendedKey {
        key,
        chain_code: ir,
    })
}

/// HMAC-SHA512 over the concatenation of `parts`, split into halves.
fn hmac_sha512(key: &[u8], parts: &[&[u8]]) -> Result<([u8; 32], [u8; 32]), CryptoError> {
    let mut mac = HmacSha512::new_from_slice(key).map_err(|_| CryptoError::InvalidExtendedKey)?;
    for part in parts {
        mac.update(part);
    }
    let output = mac.finalize().into_bytes();

    let mut left = [0u8; 32];
    let mut right = [0u8; 32];
    left.copy_from_slice(&output[..32]);
    right.copy_from_slice(&output[32..]);
    Ok((left, right))
}
