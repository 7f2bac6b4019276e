//! Calendar-aware age arithmetic.

use chrono::{Datelike, NaiveDate};

use crate::error::VerificationError;

/// Age of majority.
pub const ADULT_AGE: i32 = 18;

/// Whole years between `birth` and `reference`.
///
/// One year is subtracted when `reference`'s (month, day) falls before
/// `birth`'s, so a 29 February birthday is reached on 1 March in common years.
pub fn age_from_birth_date(birth: NaiveDate, reference: NaiveDate) -> i32 {
    let mut age = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Whether someone born on `birth` is an adult on `reference`.
///
/// A birth date after the reference date can only come from a broken
/// registry response and is reported as an error.
pub fn is_adult(birth: NaiveDate, reference: NaiveDate) -> Result<bool, VerificationError> {
    if birth > reference {
        return Err(VerificationError::ImplausibleBirthDate);
    }
    Ok(age_from_birth_date(birth, reference) >= ADULT_AGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_before_eighteenth_birthday() {
        assert_eq!(age_from_birth_date(date(2006, 3, 15), date(2024, 3, 14)), 17);
        assert!(!is_adult(date(2006, 3, 15), date(2024, 3, 14)).unwrap());
    }

    #[test]
    fn on_eighteenth_birthday() {
        assert_eq!(age_from_birth_date(date(2006, 3, 15), date(2024, 3, 15)), 18);
        assert!(is_adult(date(2006, 3, 15), date(2024, 3, 15)).unwrap());
    }

    #[test]
    fn leap_day_birthday() {
        assert_eq!(age_from_birth_date(date(2000, 2, 29), date(2024, 2, 28)), 23);
        assert_eq!(age_from_birth_date(date(2000, 2, 29), date(2024, 2, 29)), 24);
        assert_eq!(age_from_birth_date(date(2000, 2, 29), date(2024, 3, 1)), 24);
        assert_eq!(age_from_birth_date(date(2000, 2, 29), date(2023, 2, 28)), 22);
        assert_eq!(age_from_birth_date(date(2000, 2, 29), date(2023, 3, 1)), 23);
    }

    #[test]
    fn month_lengths_do_not_matter() {
        assert_eq!(age_from_birth_date(date(2000, 1, 31), date(2018, 1, 30)), 17);
        assert_eq!(age_from_birth_date(date(2000, 1, 31), date(2018, 2, 1)), 18);
    }

    #[test]
    fn born_today_is_zero() {
        assert_eq!(age_from_birth_date(date(2024, 6, 1), date(2024, 6, 1)), 0);
        assert!(!is_adult(date(2024, 6, 1), date(2024, 6, 1)).unwrap());
    }

    #[test]
    fn future_birth_date_is_an_error() {
        assert!(matches!(
            is_adult(date(2030, 1, 1), date(2024, 1, 1)),
            Err(VerificationError::ImplausibleBirthDate)
        ));
    }
}
