//! Per-visitor marketplace storage extractor.
//!
//! A visitor's storage is a [`MemoryStorage`] snapshot kept in their session.
//! Handlers take a [`VisitorStorage`], read and write it synchronously through
//! the store repositories, and call [`VisitorStorage::commit`] once before
//! responding. Concurrent requests of the same visitor are last-write-wins.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;
use workforge_core::{MemoryStorage, Storage};

use crate::error::AppError;

/// Session key holding the storage snapshot.
pub const STORAGE_SESSION_KEY: &str = "local_storage";

/// Largest snapshot a visitor may keep, counting keys and values.
pub const STORAGE_QUOTA_BYTES: usize = 10 * 1024 * 1024;

/// The requesting visitor's storage, loaded from their session.
pub struct VisitorStorage {
    session: Session,
    storage: MemoryStorage,
    dirty: bool,
}

impl VisitorStorage {
    /// Write the snapshot back to the session if anything changed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::QuotaExceeded` without writing when the snapshot is
    /// larger than [`STORAGE_QUOTA_BYTES`], or `AppError::Session` if the
    /// session store rejects the write.
    pub async fn commit(self) -> Result<(), AppError> {
        if !self.dirty {
            return Ok(());
        }
        let size = self.storage.byte_size();
        if size > STORAGE_QUOTA_BYTES {
            tracing::warn!(size, limit = STORAGE_QUOTA_BYTES, "visitor storage over quota");
            return Err(AppError::QuotaExceeded {
                size,
                limit: STORAGE_QUOTA_BYTES,
            });
        }
        self.session
            .insert(STORAGE_SESSION_KEY, &self.storage)
            .await?;
        tracing::debug!(keys = self.storage.len(), "committed visitor storage");
        Ok(())
    }

    #[must_use]
    pub const fn snapshot(&self) -> &MemoryStorage {
        &self.storage
    }
}

impl Storage for VisitorStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        self.dirty = true;
        self.storage.set(key, value);
    }

    fn remove(&mut self, key: &str) {
        self.dirty = true;
        self.storage.remove(key);
    }
}

impl<S> FromRequestParts<S> for VisitorStorage
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        let storage = session
            .get::<MemoryStorage>(STORAGE_SESSION_KEY)
            .await?
            .unwrap_or_default();

        Ok(Self {
            session,
            storage,
            dirty: false,
        })
    }
}
