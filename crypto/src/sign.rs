//! Ed25519 message signing and verification.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use netspawner_types::{KeyPair, PrivateKey, PublicKey, Signature};

use crate::{
    decode_private_key, decode_public_key, decode_signature, encode_signature, CryptoError,
};

/// Sign a message with a private key, returning the signature.
///
/// Ed25519 derives its nonce from the key and message, so the same inputs
/// always give the same signature.
pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> Signature {
    let signing_key = SigningKey::from_bytes(&private_key.0);
    let sig = signing_key.sign(message);
    Signature(sig.to_bytes())
}

/// Verify a signature against a message and public key.
///
/// Returns `true` if the signature is valid, `false` otherwise.
pub fn verify_signature(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(&public_key.0) else {
        return false;
    };
    let dalek_sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    verifying_key.verify(message, &dalek_sig).is_ok()
}

/// Sign `message` with a base64 PKCS#8 private key; returns a base64 signature.
pub fn sign_encoded(private_key: &str, message: &[u8]) -> Result<String, CryptoError> {
    let signature = match decode_private_key(private_key)? {
        KeyPair::Ed25519 { private, .. } => sign_message(message, &private),
    };
    Ok(encode_signature(&signature))
}

/// Verify a base64 signature against a base58 public key.
///
/// A key that does not decode, or a signature that is not base64, is a usage
/// error and returns `Err`. A signature of the wrong length, or one that does
/// not match the key and message, is an ordinary negative result: `Ok(false)`.
pub fn verify_encoded(
    message: &[u8],
    public_key: &str,
    signature: &str,
) -> Result<bool, CryptoError> {
    let public_key = decode_public_key(public_key)?;
    match decode_signature(signature) {
        Ok(signature) => Ok(verify_signature(message, &signature, &public_key)),
        Err(CryptoError::SignatureLength(len)) => {
            tracing::debug!(len, "signature has wrong length");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
