//! Typed access to a visitor's marketplace storage.
//!
//! # Keys
//!
//! Every record lives under a fixed key of the visitor's [`Storage`] (see
//! [`keys`]). Values are JSON text; collections are read and written as
//! whole snapshots, so the last write wins.
//!
//! # Repositories
//!
//! - [`AccountRepository`] - user ID and login/role session state
//! - [`GigRepository`] - gig listings (upsert/delete by ID)
//! - [`BillingRepository`] - billing history and payment methods (seeded on first read)
//! - [`OnboardingRepository`] - seller onboarding payload
//! - [`ConnectionRepository`] - append-only connection requests
//!
//! Reads never fail: a missing or unparsable value is replaced by the
//! caller's default. Only serialization on write can return an error.

pub mod account;
pub mod billing;
pub mod connections;
pub mod gigs;
pub mod keys;
pub mod onboarding;

use rand::Rng;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use workforge_core::Storage;

pub use account::AccountRepository;
pub use billing::BillingRepository;
pub use connections::ConnectionRepository;
pub use gigs::GigRepository;
pub use onboarding::OnboardingRepository;

/// Errors writing to visitor storage.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record could not be encoded as JSON.
    #[error("failed to serialize {key}: {source}")]
    Serialize {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse the value under `key`.
///
/// Returns `default` when the key is absent or holds invalid JSON.
pub fn read<S, T>(storage: &S, key: &'static str, default: T) -> T
where
    S: Storage + ?Sized,
    T: DeserializeOwned,
{
    parse(storage, key).unwrap_or(default)
}

/// Serialize `value` and store it under `key`, replacing what was there.
///
/// # Errors
///
/// Returns `StoreError::Serialize` if the value cannot be encoded.
pub fn write<S, T>(storage: &mut S, key: &'static str, value: &T) -> Result<(), StoreError>
where
    S: Storage + ?Sized,
    T: Serialize + ?Sized,
{
    let json =
        serde_json::to_string(value).map_err(|source| StoreError::Serialize { key, source })?;
    storage.set(key, json);
    Ok(())
}

/// Return the value under `key`, seeding it with `init()` on first read.
///
/// A stored value that parses is returned untouched, even if it has since
/// been edited. An absent, `null` or unparsable value is replaced by
/// `init()`, written back once, and returned.
///
/// # Errors
///
/// Returns `StoreError::Serialize` if the seed cannot be encoded.
pub fn get_or_init<S, T, F>(storage: &mut S, key: &'static str, init: F) -> Result<T, StoreError>
where
    S: Storage + ?Sized,
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> T,
{
    if let Some(existing) = parse::<S, Option<T>>(storage, key).flatten() {
        return Ok(existing);
    }

    let seed = init();
    write(storage, key, &seed)?;
    tracing::debug!(key, "seeded visitor storage");
    Ok(seed)
}

fn parse<S, T>(storage: &S, key: &'static str) -> Option<T>
where
    S: Storage + ?Sized,
    T: DeserializeOwned,
{
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(key, error = %e, "ignoring unreadable stored value");
            None
        }
    }
}

/// Random lowercase base-36 suffix for generated IDs.
#[must_use]
pub fn random_suffix(len: usize) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..DIGITS.len());
            DIGITS.get(idx).map_or('0', |b| char::from(*b))
        })
        .collect()
}
