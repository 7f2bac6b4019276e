#![no_main]

use libfuzzer_sys::fuzz_target;

const SECRET: [u8; 32] = [7u8; 32];

fuzz_target!(|data: &[u8]| {
    // Arbitrary payloads must be rejected with an error, never a panic.
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = kyc_crypto::open_sealed(s, &SECRET);
    }
});
