//! The 12-digit national identity number.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::FormatError;

/// Number of decimal digits in a normalized identity number.
pub const IDENTITY_NUMBER_LEN: usize = 12;

/// A normalized identity number: exactly 12 ASCII digits.
///
/// Lives for the duration of a single verification call. It intentionally
/// does not implement `Clone`, `Display` or `Serialize`, its `Debug` output is
/// redacted, and the digits are zeroized on drop.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct IdentityNumber {
    digits: [u8; IDENTITY_NUMBER_LEN],
}

impl IdentityNumber {
    /// Strip every non-digit character and require exactly 12 digits.
    ///
    /// Only ASCII `0`-`9` count as digits. The checksum is not checked here.
    pub fn normalize(raw: &str) -> Result<Self, FormatError> {
        let mut digits = [0u8; IDENTITY_NUMBER_LEN];
        let mut found = 0usize;
        for b in raw.bytes().filter(u8::is_ascii_digit) {
            if found < IDENTITY_NUMBER_LEN {
                digits[found] = b - b'0';
            }
            found += 1;
        }
        if found != IDENTITY_NUMBER_LEN {
            digits.zeroize();
            return Err(FormatError::WrongLength { found });
        }
        Ok(Self { digits })
    }

    /// Digit values (0-9), most significant first.
    pub fn digits(&self) -> &[u8; IDENTITY_NUMBER_LEN] {
        &self.digits
    }

    /// The digits as an ASCII string, for handing to the privacy boundary.
    ///
    /// Callers must not log or persist the returned value.
    pub fn expose(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

impl fmt::Debug for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdentityNumber(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators() {
        let id = IdentityNumber::normalize("1234 5678-9012").unwrap();
        assert_eq!(id.expose(), "123456789012");
        assert_eq!(id.digits()[0], 1);
        assert_eq!(id.digits()[11], 2);
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(
            IdentityNumber::normalize(""),
            Err(FormatError::WrongLength { found: 0 })
        );
        assert_eq!(
            IdentityNumber::normalize("12345678901"),
            Err(FormatError::WrongLength { found: 11 })
        );
        assert_eq!(
            IdentityNumber::normalize("1234567890123"),
            Err(FormatError::WrongLength { found: 13 })
        );
    }

    #[test]
    fn letters_do_not_count_as_digits() {
        assert!(IdentityNumber::normalize("12345678901a").is_err());
        assert!(IdentityNumber::normalize("abcdefghijkl").is_err());
    }

    #[test]
    fn non_ascii_digits_are_stripped() {
        // Arabic-Indic digits are not ASCII digits.
        assert!(IdentityNumber::normalize("١٢٣٤٥٦٧٨٩٠١٢").is_err());
    }

    #[test]
    fn debug_is_redacted() {
        let id = IdentityNumber::normalize("123456789012").unwrap();
        let printed = format!("{id:?}");
        assert!(!printed.contains("123456789012"));
        assert!(printed.contains("redacted"));
    }
}
