//! Mnemonic to exportable key box: the full derivation pipeline.

use netspawner_types::{DerivationPath, KeyBox, KeyPair};
use rand::{CryptoRng, RngCore};

use crate::{
    derive_path, derive_seed, encode_private_key, encode_public_key, keypair_from_seed,
    master_key, provide_mnemonic, CryptoError,
};

/// Derive the key pair at `path` for a mnemonic and passphrase.
///
/// The path is used as given; an empty path yields the master key's pair.
pub fn derive_keypair(
    mnemonic: &str,
    passphrase: &str,
    path: &DerivationPath,
) -> Result<KeyPair, CryptoError> {
    let seed = derive_seed(mnemonic, passphrase);
    let master = master_key(&seed)?;
    let leaf = derive_path(&master, path)?;
    Ok(keypair_from_seed(leaf.key()))
}

/// Build a key box for `mnemonic`, generating a phrase from `rng` when it is
/// empty. An empty `path` selects the default `44/7337/0/0`.
pub fn generate_key_box<R: RngCore + CryptoRng>(
    mnemonic: &str,
    passphrase: &str,
    path: DerivationPath,
    rng: &mut R,
) -> Result<KeyBox, CryptoError> {
    let mnemonic = provide_mnemonic(mnemonic, rng)?;
    let path = path.or_default();
    let keypair = derive_keypair(&mnemonic, passphrase, &path)?;

    let public_key = encode_public_key(keypair.public());
    let private_key = encode_private_key(keypair.private());
    tracing::debug!(path = %path, public_key = %public_key, "derived key box");

    Ok(KeyBox {
        mnemonic,
        bip44_path: path,
        public_key,
        private_key,
    })
}
