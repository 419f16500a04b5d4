//! Portable string encodings for keys and signatures.
//!
//! - Public keys: DER `SubjectPublicKeyInfo` with its fixed 12-byte Ed25519
//!   header removed, rendered in base58 (Bitcoin alphabet).
//! - Private keys: DER PKCS#8 v1 (RFC 8410, no embedded public key), rendered
//!   in standard padded base64.
//! - Signatures: the raw 64 bytes in standard padded base64.
//!
//! Encoders only ever produce Ed25519 containers, so they write the constant
//! headers directly. Decoders hand the full DER to the PKCS#8/SPKI parsers.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use ed25519_dalek::pkcs8::{DecodePrivateKey, DecodePublicKey, PrivateKeyInfo, ALGORITHM_OID};
use ed25519_dalek::{SigningKey, VerifyingKey};
use netspawner_types::{KeyAlgorithm, KeyPair, PrivateKey, PublicKey, Signature};
use zeroize::Zeroizing;

use crate::{keypair_from_seed, CryptoError};

/// DER header of an Ed25519 `SubjectPublicKeyInfo`:
/// `SEQUENCE(42) { SEQUENCE(5) { OID 1.3.101.112 } BIT STRING(33, 0 unused) }`.
/// The 32-byte point follows immediately.
pub const SPKI_ED25519_PREFIX: [u8; 12] = [
    0x30, 0x2a, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x03, 0x21, 0x00,
];

/// DER header of an Ed25519 PKCS#8 v1 `PrivateKeyInfo`:
/// `SEQUENCE(46) { INTEGER 0, SEQUENCE(5) { OID 1.3.101.112 }, OCTET STRING(34) { OCTET STRING(32) } }`.
/// The 32-byte secret seed follows immediately.
pub const PKCS8_ED25519_PREFIX: [u8; 16] = [
    0x30, 0x2e, 0x02, 0x01, 0x00, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x04, 0x22, 0x04,
    0x20,
];

/// Encode a public key as base58 of its SPKI body (header stripped).
///
/// For Ed25519 the SPKI body after [`SPKI_ED25519_PREFIX`] is exactly the
/// 32-byte compressed point.
pub fn encode_public_key(public_key: &PublicKey) -> String {
    bs58::encode(public_key.as_bytes()).into_string()
}

/// Encode a private key as base64 PKCS#8 v1 DER.
pub fn encode_private_key(private_key: &PrivateKey) -> String {
    let mut der = Zeroizing::new([0u8; PKCS8_ED25519_PREFIX.len() + 32]);
    der[..PKCS8_ED25519_PREFIX.len()].copy_from_slice(&PKCS8_ED25519_PREFIX);
    der[PKCS8_ED25519_PREFIX.len()..].copy_from_slice(private_key.as_bytes());
    BASE64.encode(&der[..])
}

pub fn encode_signature(signature: &Signature) -> String {
    BASE64.encode(signature.as_bytes())
}

/// Decode a base58 public key produced by [`encode_public_key`].
///
/// The SPKI header is re-prepended and the result parsed as a full DER
/// `SubjectPublicKeyInfo`; wrong lengths and off-curve points are rejected.
pub fn decode_public_key(encoded: &str) -> Result<PublicKey, CryptoError> {
    let body = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| CryptoError::Decode(format!("public key is not base58: {e}")))?;

    let mut der = Vec::with_capacity(SPKI_ED25519_PREFIX.len() + body.len());
    der.extend_from_slice(&SPKI_ED25519_PREFIX);
    der.extend_from_slice(&body);

    let verifying_key = VerifyingKey::from_public_key_der(&der)
        .map_err(|e| CryptoError::Decode(format!("public key is not an Ed25519 SPKI: {e}")))?;
    Ok(PublicKey(verifying_key.to_bytes()))
}

/// Decode a base64 PKCS#8 private key into a full key pair.
///
/// Accepts PKCS#8 v1 and v2 (v2's embedded public key must match). A
/// well-formed container for any other algorithm fails with
/// [`CryptoError::UnsupportedKeyType`].
pub fn decode_private_key(encoded: &str) -> Result<KeyPair, CryptoError> {
    let der = Zeroizing::new(decode_base64(encoded, "private key")?);

    let info = PrivateKeyInfo::try_from(der.as_slice())
        .map_err(|e| CryptoError::Decode(format!("private key is not PKCS#8: {e}")))?;
    if info.algorithm.oid != ALGORITHM_OID {
        return Err(CryptoError::UnsupportedKeyType(format!(
            "expected {} ({}), found OID {}",
            KeyAlgorithm::Ed25519,
            KeyAlgorithm::Ed25519.oid(),
            info.algorithm.oid
        )));
    }

    let signing_key = SigningKey::from_pkcs8_der(&der)
        .map_err(|e| CryptoError::Decode(format!("malformed Ed25519 private key: {e}")))?;
    Ok(keypair_from_seed(&signing_key.to_bytes()))
}

/// Decode a base64 signature.
///
/// Input that is not base64 fails with [`CryptoError::Decode`]; base64 of
/// anything but 64 bytes fails with [`CryptoError::SignatureLength`], which
/// [`verify_encoded`](crate::verify_encoded) reports as a non-matching
/// signature rather than an error.
pub fn decode_signature(encoded: &str) -> Result<Signature, CryptoError> {
    let bytes = decode_base64(encoded, "signature")?;
    let bytes: [u8; 64] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| CryptoError::SignatureLength(bytes.len()))?;
    Ok(Signature(bytes))
}

fn decode_base64(encoded: &str, what: &str) -> Result<Vec<u8>, CryptoError> {
    BASE64
        .decode(encoded)
        .map_err(|e| CryptoError::Decode(format!("{what} is not base64: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::pkcs8::{EncodePrivateKey, EncodePublicKey, KeypairBytes};

    /// Leaf key of `abandon x23 art` / "" / 44/7337/0/0.
    const LEAF_SEED: &str = "bdec628947d79345504198d09c7bc81fcb0ca21ff5e091d9b6aaedd64ed2a776";
    const LEAF_PUBLIC_B58: &str = "7KMNzdK2dRD3HG9fz5Yb15RUy68N1jNZi3jPwjiEV57M";
    const LEAF_PRIVATE_B64: &str = "MC4CAQAwBQYDK2VwBCIEIL3sYolH15NFUEGY0Jx7yB/LDKIf9eCR2baq7dZO0qd2";

    fn leaf() -> KeyPair {
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&hex::decode(LEAF_SEED).unwrap());
        keypair_from_seed(&seed)
    }

    #[test]
    fn spki_prefix_bytes_are_pinned() {
        assert_eq!(
            SPKI_ED25519_PREFIX,
            [0x30, 0x2A, 0x30, 0x05, 0x06, 0x03, 0x2B, 0x65, 0x70, 0x03, 0x21, 0x00]
        );
        assert_eq!(SPKI_ED25519_PREFIX.len(), 12);
    }

    #[test]
    fn spki_prefix_matches_der_encoder() {
        let kp = leaf();
        let verifying_key = VerifyingKey::from_bytes(kp.public().as_bytes()).unwrap();
        let der = verifying_key.to_public_key_der().unwrap();
        let der = der.as_bytes();
        assert_eq!(der.len(), 44);
        assert_eq!(&der[..12], &SPKI_ED25519_PREFIX);
        assert_eq!(&der[12..], kp.public().as_bytes());
    }

    #[test]
    fn pkcs8_prefix_matches_der_encoder() {
        let kp = leaf();
        let keypair_bytes = KeypairBytes {
            secret_key: *kp.private().as_bytes(),
            public_key: None,
        };
        let der = keypair_bytes.to_pkcs8_der().unwrap();
        let der = der.as_bytes();
        assert_eq!(der.len(), 48);
        assert_eq!(&der[..16], &PKCS8_ED25519_PREFIX);
        assert_eq!(&der[16..], kp.private().as_bytes());
    }

    #[test]
    fn encodes_known_leaf_key() {
        let kp = leaf();
        assert_eq!(encode_public_key(kp.public()), LEAF_PUBLIC_B58);
        assert_eq!(encode_private_key(kp.private()), LEAF_PRIVATE_B64);
    }

    #[test]
    fn public_key_roundtrip() {
        let kp = leaf();
        let decoded = decode_public_key(&encode_public_key(kp.public())).unwrap();
        assert_eq!(&decoded, kp.public());
    }

    #[test]
    fn private_key_roundtrip() {
        let kp = leaf();
        let decoded = decode_private_key(&encode_private_key(kp.private())).unwrap();
        assert_eq!(decoded.algorithm(), KeyAlgorithm::Ed25519);
        assert_eq!(decoded.private().as_bytes(), kp.private().as_bytes());
        assert_eq!(decoded.public(), kp.public());
    }

    #[test]
    fn pkcs8_v2_with_public_key_is_accepted() {
        let v2 = "MFECAQEwBQYDK2VwBCIEIL3sYolH15NFUEGY0Jx7yB/LDKIf9eCR2baq7dZO0qd2gSEAXdmec90lINFyGl8wjBDlQhRgsuerOoUPTbFhI8ouWlA=";
        let decoded = decode_private_key(v2).unwrap();
        assert_eq!(encode_public_key(decoded.public()), LEAF_PUBLIC_B58);
    }

    #[test]
    fn non_ed25519_private_key_is_unsupported() {
        // PKCS#8 v1 container holding an X25519 (1.3.101.110) key.
        let x25519 = "MC4CAQAwBQYDK2VuBCIEIAkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJ";
        match decode_private_key(x25519) {
            Err(CryptoError::UnsupportedKeyType(msg)) => assert!(msg.contains("1.3.101.110")),
            Err(other) => panic!("expected UnsupportedKeyType, got {other}"),
            Ok(_) => panic!("expected UnsupportedKeyType, got a key"),
        }
    }

    #[test]
    fn malformed_private_key_is_decode_error() {
        assert!(matches!(
            decode_private_key("not base64!"),
            Err(CryptoError::Decode(_))
        ));
        assert!(matches!(
            decode_private_key("AAAA"),
            Err(CryptoError::Decode(_))
        ));
        // Truncated container.
        assert!(matches!(
            decode_private_key(&LEAF_PRIVATE_B64[..40]),
            Err(CryptoError::Decode(_))
        ));
    }

    #[test]
    fn malformed_public_key_is_decode_error() {
        // '0', 'O', 'I' and 'l' are outside the base58 alphabet.
        assert!(matches!(
            decode_public_key("0OIl"),
            Err(CryptoError::Decode(_))
        ));
        assert!(matches!(decode_public_key(""), Err(CryptoError::Decode(_))));
        // 31 bytes.
        assert!(matches!(
            decode_public_key("2S15z1XNDL5YL6FCYxrkW217LWFouGwjJTSvEJqK1UD"),
            Err(CryptoError::Decode(_))
        ));
        // 32 bytes, but y = 2 is not on the curve.
        assert!(matches!(
            decode_public_key("8opHzTAnfzRpPEx21XtnrVTX28YQuCpAjcn1PczScKh"),
            Err(CryptoError::Decode(_))
        ));
    }

    #[test]
    fn signature_roundtrip_and_length_check() {
        let sig = Signature([0xAB; 64]);
        assert_eq!(decode_signature(&encode_signature(&sig)).unwrap(), sig);
        let short = BASE64.encode([0u8; 63]);
        assert!(matches!(
            decode_signature(&short),
            Err(CryptoError::SignatureLength(63))
        ));
        assert!(matches!(
            decode_signature(""),
            Err(CryptoError::SignatureLength(0))
        ));
        assert!(matches!(
            decode_signature("%%%"),
            Err(CryptoError::Decode(_))
        ));
    }
}
