#![no_main]

use libfuzzer_sys::fuzz_target;
use netspawner_types::DerivationPath;

fuzz_target!(|data: &str| {
    if let Ok(path) = data.parse::<DerivationPath>() {
        // Display output must parse back to the same components.
        let reparsed: DerivationPath = path.to_string().parse().expect("display output parses");
        assert_eq!(reparsed, path);
    }
});
