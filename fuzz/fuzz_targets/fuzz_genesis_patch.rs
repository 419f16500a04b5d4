#![no_main]

use libfuzzer_sys::fuzz_target;
use netspawner_launcher::{set_genesis_timestamp, GENESIS_TIMESTAMP_FIELD};

fuzz_target!(|input: (&str, u64)| {
    let (document, now_ms) = input;
    if let Ok(patched) = set_genesis_timestamp(document, now_ms) {
        // A patched document is a genesis that patches again to the same text.
        let again = set_genesis_timestamp(&patched, now_ms).expect("patched genesis is valid");
        assert_eq!(again, patched);
        assert!(patched.contains(GENESIS_TIMESTAMP_FIELD));
    }
});
