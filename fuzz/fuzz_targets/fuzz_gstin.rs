#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic on any input, and classification must agree with
        // the state code of anything that validates.
        let jurisdiction = gstbill::core::classify(s);
        if let Ok(parts) = gstbill::core::validate_gstin(s) {
            let home = parts.state_code == gstbill::core::HOME_STATE_CODE;
            assert_eq!(jurisdiction == gstbill::core::Jurisdiction::SameState, home);
        }
    }
});
