//! Registry collaborator seam.
//!
//! The identity authority is external. The pipeline only ever hands it the
//! encoded identity and only ever receives a birth date back.

use chrono::NaiveDate;
use futures_util::future::{BoxFuture, FutureExt};
use kyc_crypto::blake2b_256_multi;

use crate::error::RegistryError;

/// Resolves an encoded identity number to a birth date.
pub trait BirthDateRegistry: Send + Sync {
    /// Human-readable name of this registry.
    fn name(&self) -> &str;

    /// Look up the birth date for `encoded_id`.
    ///
    /// This is the single point at which the pipeline suspends.
    fn resolve_birth_date<'a>(
        &'a self,
        encoded_id: &'a str,
    ) -> BoxFuture<'a, Result<NaiveDate, RegistryError>>;
}

/// Development stand-in for the identity authority.
///
/// Derives a stable birth date between 1950 and 2019 from a digest of the
/// encoded identity. It knows nothing about the real holder.
#[derive(Clone, Copy, Debug, Default)]
pub struct DevRegistry;

impl BirthDateRegistry for DevRegistry {
    fn name(&self) -> &str {
        "dev-placeholder"
    }

    fn resolve_birth_date<'a>(
        &'a self,
        encoded_id: &'a str,
    ) -> BoxFuture<'a, Result<NaiveDate, RegistryError>> {
        let resolved = placeholder_birth_date(encoded_id);
        async move { resolved }.boxed()
    }
}

fn placeholder_birth_date(encoded_id: &str) -> Result<NaiveDate, RegistryError> {
    let digest = blake2b_256_multi(&[b"kyc-dev-registry", encoded_id.as_bytes()]);
    let year = 1950 + i32::from(u16::from_le_bytes([digest[0], digest[1]]) % 70);
    let month = u32::from(digest[2] % 12) + 1;
    let day = u32::from(digest[3] % 28) + 1;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| RegistryError::MalformedResponse("placeholder date out of range".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[tokio::test]
    async fn dev_registry_is_deterministic() {
        let registry = DevRegistry;
        let a = registry.resolve_birth_date("abc").await.unwrap();
        let b = registry.resolve_birth_date("abc").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn dev_registry_dates_are_in_range() {
        let registry = DevRegistry;
        for id in ["a", "b", "c", "d", "e", "f", "0123", "ffff"] {
            let d = registry.resolve_birth_date(id).await.unwrap();
            assert!((1950..2020).contains(&d.year()));
            assert!(d.day() <= 28);
        }
    }
}
