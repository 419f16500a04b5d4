//! Deterministic node identities for NetSpawner.
//!
//! - **BIP39** mnemonics and PBKDF2-HMAC-SHA512 seed stretching
//! - **BIP32** hardened-only private derivation (HMAC-SHA512, secp256k1 order)
//! - **Ed25519** key pairs built from the derived leaf key
//! - Portable encodings: base58 for public keys (SPKI prefix stripped),
//!   base64 PKCS#8 for private keys, base64 signatures

pub mod encoding;
pub mod error;
pub mod hd;
pub mod key_box;
pub mod keys;
pub mod mnemonic;
pub mod sign;

pub use encoding::{
    decode_private_key, decode_public_key, decode_signature, encode_private_key,
    encode_public_key, encode_signature, PKCS8_ED25519_PREFIX, SPKI_ED25519_PREFIX,
};
pub use error::CryptoError;
pub use hd::{derive_child, derive_path, master_key, ExtendedKey, HARDENED_OFFSET};
pub use key_box::{derive_keypair, generate_key_box};
pub use keys::{keypair_from_private, keypair_from_seed, public_from_private};
pub use mnemonic::{derive_seed, generate_mnemonic, provide_mnemonic, validate_mnemonic, Seed};
pub use sign::{sign_encoded, sign_message, verify_encoded, verify_signature};
