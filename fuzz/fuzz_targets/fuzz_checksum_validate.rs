#![no_main]

use kyc_verification::checksum;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must never panic, and validate/verify must agree.
        let valid = checksum::validate(s);
        assert_eq!(valid, checksum::verify(s).is_ok());

        if valid {
            let digits: String = s.chars().filter(char::is_ascii_digit).collect();
            let expected = checksum::check_digit(&digits[..11]);
            assert_eq!(expected, digits[11..].parse::<u8>().ok());
        }
    }
});
