//! Connection requests from visitors to sellers. Append-only.

use chrono::{DateTime, Utc};
use workforge_core::{ConnectionRequest, ConnectionRequestId, Storage, UserId};

use super::{StoreError, keys, random_suffix, read, write};

/// Repository for connection requests.
pub struct ConnectionRepository<'a, S: Storage + ?Sized> {
    storage: &'a mut S,
}

impl<'a, S: Storage + ?Sized> ConnectionRepository<'a, S> {
    /// Create a new connection repository.
    pub const fn new(storage: &'a mut S) -> Self {
        Self { storage }
    }

    #[must_use]
    pub fn all(&self) -> Vec<ConnectionRequest> {
        read(&*self.storage, keys::CONNECTION_REQUESTS, Vec::new())
    }

    /// Append a request from `from` to `to_seller` dated `now`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the requests cannot be serialized.
    pub fn request(
        &mut self,
        to_seller: UserId,
        from: UserId,
        now: DateTime<Utc>,
    ) -> Result<ConnectionRequest, StoreError> {
        let request = ConnectionRequest {
            id: ConnectionRequestId::generate(now, &random_suffix(6)),
            to_seller_id: to_seller,
            from_user_id: from,
            date: now,
        };

        let mut requests = self.all();
        requests.push(request.clone());
        write(self.storage, keys::CONNECTION_REQUESTS, &requests)?;
        Ok(request)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use workforge_core::MemoryStorage;

    #[test]
    fn test_requests_append() {
        let mut storage = MemoryStorage::new();
        let mut repo = ConnectionRepository::new(&mut storage);
        let now = Utc::now();

        let first = repo
            .request(UserId::new("f1"), UserId::new("u_me"), now)
            .unwrap();
        let second = repo
            .request(UserId::new("f2"), UserId::new("u_me"), now)
            .unwrap();

        let all = repo.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all.first(), Some(&first));
        assert_eq!(first.to_seller_id.as_str(), "f1");
        assert_ne!(first.id, second.id);
    }
}
