#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|n: u64| {
    let words = gstbill::core::to_words(n);
    assert!(words.ends_with("Rupees Only"));
    assert_eq!(words.matches("Rupees Only").count(), 1);
});
