use proptest::prelude::*;

use kyc_types::{FormatError, IdentityNumber, VerificationResult, IDENTITY_NUMBER_LEN};

proptest! {
    /// Separators between digits never change the normalized number.
    #[test]
    fn separators_are_ignored(
        digits in prop::collection::vec(0u8..10, IDENTITY_NUMBER_LEN),
        sep in prop::sample::select(vec![" ", "-", ".", "/", "\t"]),
    ) {
        let plain: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let spaced = plain
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(sep);
        let a = IdentityNumber::normalize(&plain).unwrap();
        let b = IdentityNumber::normalize(&spaced).unwrap();
        prop_assert_eq!(a.digits(), b.digits());
        prop_assert_eq!(a.digits().as_slice(), digits.as_slice());
    }

    /// Any digit count other than twelve reports how many digits were found.
    #[test]
    fn wrong_length_reports_count(n in 0usize..40) {
        prop_assume!(n != IDENTITY_NUMBER_LEN);
        let raw = "7".repeat(n);
        prop_assert_eq!(
            IdentityNumber::normalize(&raw),
            Err(FormatError::WrongLength { found: n })
        );
    }

    /// Debug output never contains the digits.
    #[test]
    fn debug_never_prints_digits(digits in "[0-9]{12}") {
        let id = IdentityNumber::normalize(&digits).unwrap();
        let debug = format!("{id:?}");
        prop_assert!(!debug.contains(&digits));
    }

    /// Completed results always carry `success` and the `isAdult` flag.
    #[test]
    fn completed_result_shape(is_adult in any::<bool>()) {
        let json = serde_json::to_value(VerificationResult::completed(is_adult)).unwrap();
        prop_assert_eq!(&json["success"], &serde_json::json!(true));
        prop_assert_eq!(&json["isAdult"], &serde_json::json!(is_adult));
    }
}
