//! Fuzz target for prefix decomposition

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        if let Some(prefix) = slirc_scanner::parse_prefix(input) {
            assert_eq!(prefix.raw, input);
        }
    }
});
