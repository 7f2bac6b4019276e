use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use kyc_types::VerificationResult;
use kyc_verification::checksum::{check_digit, validate};
use kyc_verification::{age_from_birth_date, AgeVerifier, DevRegistry, SystemClock};

fn with_check_digit(payload: &str) -> String {
    let check = check_digit(payload).expect("payload is all digits");
    format!("{payload}{check}")
}

proptest! {
    /// Anything that is not 12 digits after stripping is invalid.
    #[test]
    fn wrong_digit_count_is_invalid(
        digits in prop_oneof!["[0-9]{0,11}", "[0-9]{13,24}"],
    ) {
        prop_assert!(!validate(&digits));
    }

    /// Non-digit characters never make up for missing digits.
    #[test]
    fn letters_do_not_pad_to_twelve(
        digits in "[0-9]{1,11}",
        letters in "[a-zA-Z]{1,11}",
    ) {
        let mixed = format!("{digits}{letters}");
        prop_assert!(!validate(&mixed));
    }

    /// Appending the computed check digit always yields a valid number.
    #[test]
    fn generated_numbers_are_valid(payload in "[0-9]{11}") {
        prop_assert!(validate(&with_check_digit(&payload)));
    }

    /// Separators between digits are ignored.
    #[test]
    fn separators_are_stripped(payload in "[0-9]{11}", sep in "[ \\-./]") {
        let number = with_check_digit(&payload);
        let spaced = format!("{}{sep}{}{sep}{}", &number[..4], &number[4..8], &number[8..]);
        prop_assert!(validate(&spaced));
    }

    /// Every single-digit substitution is detected.
    ///
    /// Adjacent transpositions are not exercised here: they are caught by
    /// Verhoeff in general but are not part of the validator's contract.
    #[test]
    fn single_digit_substitution_is_invalid(
        payload in "[0-9]{11}",
        pos in 0usize..12,
        delta in 1u8..10,
    ) {
        let mut bytes = with_check_digit(&payload).into_bytes();
        bytes[pos] = b'0' + (bytes[pos] - b'0' + delta) % 10;
        let mutated = String::from_utf8(bytes).unwrap();
        prop_assert!(!validate(&mutated));
    }

    /// Age on the n-th anniversary is exactly n, and n - 1 the day before.
    #[test]
    fn age_on_anniversary(
        year in 1900i32..2080,
        month in 1u32..=12,
        day in 1u32..=28,
        years in 0i32..100,
    ) {
        let birth = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let anniversary = NaiveDate::from_ymd_opt(year + years, month, day).unwrap();
        prop_assert_eq!(age_from_birth_date(birth, anniversary), years);
        if years > 0 {
            let eve = anniversary.pred_opt().unwrap();
            prop_assert_eq!(age_from_birth_date(birth, eve), years - 1);
        }
    }

    /// Age never decreases as the reference date moves forward.
    #[test]
    fn age_is_monotonic(
        birth_days in 0u64..40_000,
        offset in 0u64..40_000,
        step in 0u64..1_000,
    ) {
        let epoch = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let birth = epoch + chrono::Days::new(birth_days);
        let earlier = birth + chrono::Days::new(offset);
        let later = earlier + chrono::Days::new(step);
        let a = age_from_birth_date(birth, earlier);
        let b = age_from_birth_date(birth, later);
        prop_assert!(a <= b, "age went backwards: {} -> {}", a, b);
        prop_assert!(a >= 0);
        prop_assert!(later.year() - birth.year() - b <= 1);
    }

    /// No returned field ever contains the submitted digits.
    #[test]
    fn results_never_echo_input(digits in "[0-9]{12}") {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let verifier = AgeVerifier::new(
            std::sync::Arc::new(kyc_crypto::HexEncoder),
            std::sync::Arc::new(DevRegistry),
            std::sync::Arc::new(SystemClock),
        );
        let result: VerificationResult = rt.block_on(verifier.verify_age(&digits));
        let json = serde_json::to_string(&result).unwrap();
        prop_assert!(!json.contains(&digits));
        prop_assert_eq!(result.success, validate(&digits));
    }
}
