#![no_main]

use ledger_marshal::core::object::{extract_payload, PayloadKind, RawObjectResponse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    // Malformed wire JSON must come back as an error, never a panic
    if let Ok(raw) = RawObjectResponse::from_json(json) {
        let _ = extract_payload(&raw.clone().into_response(PayloadKind::Object));
        let _ = extract_payload(&raw.into_response(PayloadKind::Content));
    }
});
