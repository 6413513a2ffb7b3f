#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(alias) = stagehand::domain::value_objects::Alias::parse(s) {
            assert!(!alias.as_str().is_empty());
        }
    }
});
