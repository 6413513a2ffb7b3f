#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = stagehand::config::parse_with_warnings(s, Path::new("stagehand.toml"));
    }
});
