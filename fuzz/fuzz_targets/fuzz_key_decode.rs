#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct VerifyInput<'a> {
    public_key: &'a str,
    signature: &'a str,
    message: &'a [u8],
}

fuzz_target!(|input: VerifyInput| {
    // Decoders must reject malformed input with an error, never a panic.
    let _ = netspawner_crypto::decode_public_key(input.public_key);
    let _ = netspawner_crypto::decode_signature(input.signature);

    if let Ok(pair) = netspawner_crypto::decode_private_key(input.signature) {
        // Anything that decodes must re-encode to a key that decodes to itself.
        let encoded = netspawner_crypto::encode_private_key(pair.private());
        let again = netspawner_crypto::decode_private_key(&encoded).expect("re-encoded key decodes");
        assert_eq!(again.public(), pair.public());
    }

    let _ = netspawner_crypto::verify_encoded(input.message, input.public_key, input.signature);
});
