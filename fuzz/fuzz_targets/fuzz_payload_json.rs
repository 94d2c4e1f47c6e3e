#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, whatever the amounts. Errors are fine.
        if let Ok(payload) = bijak::payload::QuotePayload::from_json(s) {
            let _ = payload.verify("Delhi");
            let _ = payload.to_json();
        }
    }
});
