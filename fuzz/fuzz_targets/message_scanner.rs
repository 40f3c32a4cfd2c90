//! Fuzz target for the IRC message scanner
//!
//! Feeds arbitrary bytes to the scanner and checks that every message it
//! emits is well-formed.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slirc_scanner::Scanner;

fuzz_target!(|data: &[u8]| {
    for result in Scanner::new(data) {
        match result {
            Ok(msg) => {
                assert!(!msg.command.is_empty());
                assert!(msg.raw.ends_with("\r\n"));
                let _ = msg.source();
            }
            Err(_) => break,
        }
    }
});
