//! Nullable registry: scripted birth dates without a network.

use chrono::NaiveDate;
use futures_util::future::{self, BoxFuture, FutureExt};
use kyc_verification::{BirthDateRegistry, RegistryError};
use std::sync::Mutex;

/// What the registry does when asked.
#[derive(Clone, Debug)]
pub enum RegistryBehavior {
    /// Answer with this birth date.
    BirthDate(NaiveDate),
    /// Fail with this error.
    Fail(RegistryError),
    /// Never answer.
    Hang,
    /// Panic inside the lookup.
    Panic,
}

/// A registry double that records the encoded identities it receives.
pub struct NullRegistry {
    behavior: Mutex<RegistryBehavior>,
    received: Mutex<Vec<String>>,
}

impl NullRegistry {
    pub fn new(behavior: RegistryBehavior) -> Self {
        Self {
            behavior: Mutex::new(behavior),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with `birth_date`.
    pub fn with_birth_date(birth_date: NaiveDate) -> Self {
        Self::new(RegistryBehavior::BirthDate(birth_date))
    }

    /// Convenience constructor; panics on an invalid date.
    pub fn born(year: i32, month: u32, day: u32) -> Self {
        Self::with_birth_date(NaiveDate::from_ymd_opt(year, month, day).expect("valid date"))
    }

    pub fn failing(error: RegistryError) -> Self {
        Self::new(RegistryBehavior::Fail(error))
    }

    pub fn hanging() -> Self {
        Self::new(RegistryBehavior::Hang)
    }

    pub fn panicking() -> Self {
        Self::new(RegistryBehavior::Panic)
    }

    pub fn set_behavior(&self, behavior: RegistryBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    /// Encoded identities received so far (for assertions).
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }

    /// Number of lookups so far.
    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl BirthDateRegistry for NullRegistry {
    fn name(&self) -> &str {
        "null-registry"
    }

    fn resolve_birth_date<'a>(
        &'a self,
        encoded_id: &'a str,
    ) -> BoxFuture<'a, Result<NaiveDate, RegistryError>> {
        self.received.lock().unwrap().push(encoded_id.to_string());
        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            RegistryBehavior::BirthDate(date) => future::ready(Ok(date)).boxed(),
            RegistryBehavior::Fail(err) => future::ready(Err(err)).boxed(),
            RegistryBehavior::Hang => future::pending().boxed(),
            RegistryBehavior::Panic => {
                future::lazy(|_| -> Result<NaiveDate, RegistryError> {
                    panic!("null registry asked to panic")
                })
                .boxed()
            }
        }
    }
}
