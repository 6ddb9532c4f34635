#![no_main]

use ledger_marshal::core::encoding::{encode_ascii, encode_ascii_strict, encode_u64_be_decimal, text_to_bytes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let lossy = encode_ascii(text);
    assert_eq!(lossy.len(), text.chars().count());
    assert_eq!(lossy, text_to_bytes(text));

    if let Ok(strict) = encode_ascii_strict(text) {
        assert_eq!(strict, lossy);
    }

    let _ = encode_u64_be_decimal(text);
});
