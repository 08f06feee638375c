//! Session middleware configuration.
//!
//! Visitor sessions live in an in-memory store behind a signed cookie. Each
//! session carries that visitor's marketplace storage snapshot (see
//! [`super::visitor_storage`]). Expired sessions are removed by a periodic
//! sweep ([`spawn_expired_sweep`]).

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tower_sessions::cookie::time::OffsetDateTime;
use tower_sessions::cookie::{Key, SameSite};
use tower_sessions::service::SignedCookie;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store;
use tower_sessions::{ExpiredDeletion, Expiry, SessionManagerLayer, SessionStore};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "wf_session";

/// How often expired sessions are removed from the store.
pub const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// In-memory session store that can drop expired records.
#[derive(Debug, Clone, Default)]
pub struct VisitorSessionStore(Arc<Mutex<HashMap<Id, Record>>>);

impl VisitorSessionStore {
    /// Number of stored sessions, expired ones included.
    pub async fn len(&self) -> usize {
        self.0.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.0.lock().await.is_empty()
    }
}

fn is_active(expiry_date: OffsetDateTime) -> bool {
    expiry_date > OffsetDateTime::now_utc()
}

#[async_trait]
impl SessionStore for VisitorSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        let mut sessions = self.0.lock().await;
        while sessions.contains_key(&record.id) {
            record.id = Id::default();
        }
        sessions.insert(record.id, record.clone());
        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.0.lock().await.insert(record.id, record.clone());
        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        Ok(self
            .0
            .lock()
            .await
            .get(session_id)
            .filter(|record| is_active(record.expiry_date))
            .cloned())
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.0.lock().await.remove(session_id);
        Ok(())
    }
}

#[async_trait]
impl ExpiredDeletion for VisitorSessionStore {
    async fn delete_expired(&self) -> session_store::Result<()> {
        let mut sessions = self.0.lock().await;
        let before = sessions.len();
        sessions.retain(|_, record| is_active(record.expiry_date));
        let removed = before - sessions.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = sessions.len(), "removed expired sessions");
        }
        Ok(())
    }
}

/// Remove expired sessions every `period` until the runtime shuts down.
pub fn spawn_expired_sweep(store: VisitorSessionStore, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // First tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            if let Err(e) = store.delete_expired().await {
                tracing::warn!(error = %e, "expired session sweep failed");
            }
        }
    })
}

/// Create the session layer over `store` with signed cookies.
///
/// # Panics
///
/// Panics if the session secret is shorter than 64 bytes, which
/// [`StorefrontConfig::from_env`] already rejects.
#[must_use]
pub fn create_session_layer(
    config: &StorefrontConfig,
    store: VisitorSessionStore,
) -> SessionManagerLayer<VisitorSessionStore, SignedCookie> {
    let key = Key::from(config.session_secret.expose_secret().as_bytes());

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(config.session_ttl_seconds()),
        ))
        .with_secure(config.is_secure())
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
        .with_signed(key)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tower_sessions::cookie::time::Duration as CookieDuration;

    use super::*;

    fn record(expires_in: CookieDuration) -> Record {
        Record {
            id: Id::default(),
            data: HashMap::default(),
            expiry_date: OffsetDateTime::now_utc() + expires_in,
        }
    }

    #[tokio::test]
    async fn test_load_hides_expired_records() {
        let store = VisitorSessionStore::default();
        let mut expired = record(CookieDuration::seconds(-1));
        store.create(&mut expired).await.unwrap();

        assert!(store.load(&expired.id).await.unwrap().is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_expired_keeps_active_sessions() {
        let store = VisitorSessionStore::default();
        let mut expired = record(CookieDuration::seconds(-1));
        let mut active = record(CookieDuration::days(1));
        store.create(&mut expired).await.unwrap();
        store.create(&mut active).await.unwrap();

        store.delete_expired().await.unwrap();

        assert_eq!(store.len().await, 1);
        assert!(store.load(&active.id).await.unwrap().is_some());
        assert!(store.load(&expired.id).await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_task_reclaims_expired_sessions() {
        let store = VisitorSessionStore::default();
        let mut expired = record(CookieDuration::seconds(-1));
        store.create(&mut expired).await.unwrap();

        let sweep = spawn_expired_sweep(store.clone(), Duration::from_secs(60));
        tokio::time::sleep(Duration::from_secs(61)).await;

        assert!(store.is_empty().await);
        sweep.abort();
    }
}
