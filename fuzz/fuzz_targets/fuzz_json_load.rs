#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Stored values are taken as they are; checking, printing and
        // recalculating them must not panic.
        if let Ok(mut invoice) = gstbill::json::from_json(s) {
            let _ = gstbill::core::validate_arithmetic(&invoice);
            let _ = gstbill::core::layout(&invoice).to_text();
            invoice.recalculate();
            let _ = gstbill::core::validate_invoice(&invoice);
            let _ = gstbill::core::layout(&invoice).to_text();
        }
    }
});
