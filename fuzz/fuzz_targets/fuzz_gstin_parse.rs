#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Errors are fine, panics are bugs.
        if let Ok(gstin) = bijak::gstin::validate_gstin_format(s) {
            assert_eq!(gstin.as_str().len(), 15);
            let _ = gstin.state();
        }
    }
});
