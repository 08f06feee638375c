//! User identity and login/role state.

use chrono::Utc;
use workforge_core::{Role, Session, Storage, UserId};

use super::{StoreError, keys, random_suffix, read, write};

/// Repository for the visitor's identity and session gate.
pub struct AccountRepository<'a, S: Storage + ?Sized> {
    storage: &'a mut S,
}

impl<'a, S: Storage + ?Sized> AccountRepository<'a, S> {
    /// Create a new account repository.
    pub const fn new(storage: &'a mut S) -> Self {
        Self { storage }
    }

    /// Return the visitor's user ID, generating and storing one on first use.
    ///
    /// The ID is never regenerated once stored. It is kept as a raw string
    /// rather than JSON text.
    pub fn ensure_user_id(&mut self) -> UserId {
        if let Some(id) = self.storage.get(keys::USER_ID).filter(|id| !id.is_empty()) {
            return UserId::new(id);
        }

        let id = UserId::generate(Utc::now(), &random_suffix(6));
        self.storage.set(keys::USER_ID, id.to_string());
        tracing::info!(user_id = %id, "generated visitor user id");
        id
    }

    /// Stored role, `None` when absent, `null` or unreadable.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        read(&*self.storage, keys::ROLE, None)
    }

    #[must_use]
    pub fn logged_in(&self) -> bool {
        read(&*self.storage, keys::LOGGED_IN, false)
    }

    #[must_use]
    pub fn session(&self) -> Session {
        Session {
            logged_in: self.logged_in(),
            role: self.role(),
        }
    }

    /// Log in with a role (registration step 1).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the values cannot be serialized.
    pub fn start_session(&mut self, role: Role) -> Result<(), StoreError> {
        write(self.storage, keys::LOGGED_IN, &true)?;
        write(self.storage, keys::ROLE, &Some(role))
    }

    /// Log in without touching the stored role (returning visitors).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the value cannot be serialized.
    pub fn log_in(&mut self) -> Result<(), StoreError> {
        write(self.storage, keys::LOGGED_IN, &true)
    }

    /// Log out and forget the role.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the values cannot be serialized.
    pub fn log_out(&mut self) -> Result<(), StoreError> {
        write(self.storage, keys::LOGGED_IN, &false)?;
        write(self.storage, keys::ROLE, &None::<Role>)
    }
}
