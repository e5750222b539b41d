#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — rejections are fine, panics are bugs.
        if let Ok((cc, number)) = bizverify::core::split_vat_id(s) {
            assert!(bizverify::core::is_eu_member_code(&cc));
            assert!(!number.is_empty());
        }
    }
});
