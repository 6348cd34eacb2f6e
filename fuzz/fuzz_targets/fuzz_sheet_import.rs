#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Ok(report) = gstbill::sheet::import_products(s, &[]) {
            assert!(report.imported.iter().all(|p| !p.rate.is_zero() && !p.rate.is_sign_negative()));
        }
        let _ = gstbill::sheet::import_customers(s, &[]);
    }
});
