use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("seed derivation failed: {0}")]
    SeedDerivation(String),

    /// BIP32 produced a zero or out-of-range secp256k1 scalar.
    #[error("derived key material is not a valid extended key")]
    InvalidExtendedKey,

    #[error("decode error: {0}")]
    Decode(String),

    /// Valid base64 that does not hold exactly 64 bytes.
    #[error("signature must be 64 bytes, got {0}")]
    SignatureLength(usize),

    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),
}
