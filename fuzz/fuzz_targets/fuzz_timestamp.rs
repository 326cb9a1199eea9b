#![no_main]

use ariss_clock::clock::{format_instant, parse_instant};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(instant) = parse_instant(text) {
            let shown = format_instant(&instant);
            assert_eq!(parse_instant(&shown).ok(), Some(instant), "{shown}");
        }
    }
});
