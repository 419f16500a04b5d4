//! BIP39 mnemonic generation and seed stretching.
//!
//! New phrases carry 256 bits of entropy (24 words). Seeds are stretched
//! with PBKDF2-HMAC-SHA512 over the phrase exactly as given: caller phrases
//! are neither normalized nor checked against the wordlist, so any string
//! produces a seed, matching identities already deployed.

use bip39::Mnemonic;
use pbkdf2::pbkdf2_hmac;
use rand::{CryptoRng, RngCore};
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::CryptoError;

/// Bytes of entropy behind a freshly generated phrase.
const ENTROPY_BYTES: usize = 32;

const PBKDF2_ROUNDS: u32 = 2048;

const SALT_PREFIX: &str = "mnemonic";

/// A 64-byte BIP39 seed. Zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; 64]);

impl Seed {
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

/// Generate a new 24-word BIP39 mnemonic from the given entropy source.
pub fn generate_mnemonic<R: RngCore + CryptoRng>(rng: &mut R) -> Result<String, CryptoError> {
    let mut entropy = Zeroizing::new([0u8; ENTROPY_BYTES]);
    rng.fill_bytes(&mut entropy[..]);
    let mnemonic = Mnemonic::from_entropy(&entropy[..])
        .map_err(|e| CryptoError::SeedDerivation(e.to_string()))?;
    Ok(mnemonic.to_string())
}

/// Return `existing` unchanged, or a freshly generated phrase if it is empty.
pub fn provide_mnemonic<R: RngCore + CryptoRng>(
    existing: &str,
    rng: &mut R,
) -> Result<String, CryptoError> {
    if existing.is_empty() {
        let mnemonic = generate_mnemonic(rng)?;
        tracing::debug!("generated new 24-word mnemonic");
        Ok(mnemonic)
    } else {
        Ok(existing.to_string())
    }
}

/// Stretch a phrase and passphrase into a 64-byte seed.
///
/// PBKDF2-HMAC-SHA512, 2048 rounds, salt `"mnemonic" || passphrase`.
pub fn derive_seed(words: &str, passphrase: &str) -> Seed {
    let salt = Zeroizing::new(format!("{SALT_PREFIX}{passphrase}"));
    let mut seed = Seed([0u8; 64]);
    pbkdf2_hmac::<Sha512>(words.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed.0);
    seed
}

/// Whether `words` is a checksum-valid BIP39 English phrase.
pub fn validate_mnemonic(words: &str) -> bool {
    Mnemonic::parse_normalized(words).is_ok()
}
