//! Seller onboarding payload.

use workforge_core::{OnboardingPayload, Storage};

use super::{StoreError, keys, read, write};

/// Repository for the onboarding payload.
pub struct OnboardingRepository<'a, S: Storage + ?Sized> {
    storage: &'a mut S,
}

impl<'a, S: Storage + ?Sized> OnboardingRepository<'a, S> {
    /// Create a new onboarding repository.
    pub const fn new(storage: &'a mut S) -> Self {
        Self { storage }
    }

    /// The stored payload, `None` until onboarding has been completed.
    #[must_use]
    pub fn get(&self) -> Option<OnboardingPayload> {
        read(&*self.storage, keys::ONBOARDING, None)
    }

    /// Store the payload, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the payload cannot be serialized.
    pub fn save(&mut self, payload: &OnboardingPayload) -> Result<(), StoreError> {
        write(self.storage, keys::ONBOARDING, payload)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use workforge_core::{MemoryStorage, OnboardingProfile, Role};

    #[test]
    fn test_absent_payload_is_none() {
        let mut storage = MemoryStorage::new();
        assert!(OnboardingRepository::new(&mut storage).get().is_none());
    }

    #[test]
    fn test_save_and_get() {
        let mut storage = MemoryStorage::new();
        let payload = OnboardingPayload {
            role: Some(Role::Seller),
            profile: OnboardingProfile {
                full_name: "Neha Joshi".to_string(),
                skills: vec!["Copywriting".to_string()],
                ..OnboardingProfile::default()
            },
        };

        let mut repo = OnboardingRepository::new(&mut storage);
        repo.save(&payload).unwrap();
        assert_eq!(repo.get(), Some(payload));
    }
}
