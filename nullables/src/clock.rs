//! Nullable clock: a fixed calendar date.

use chrono::{Days, NaiveDate};
use kyc_verification::Clock;
use std::sync::Mutex;

/// A deterministic clock for testing.
///
/// The date only changes when you tell it to.
pub struct NullClock {
    today: Mutex<NaiveDate>,
}

impl NullClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    /// Convenience constructor; panics on an invalid date.
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self::new(NaiveDate::from_ymd_opt(year, month, day).expect("valid date"))
    }

    /// Advance the date by a number of days.
    pub fn advance_days(&self, days: u64) {
        let mut today = self.today.lock().unwrap();
        *today = *today + Days::new(days);
    }

    /// Set the date to a specific value.
    pub fn set(&self, date: NaiveDate) {
        *self.today.lock().unwrap() = date;
    }
}

impl Clock for NullClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap()
    }
}
