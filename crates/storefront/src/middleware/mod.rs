//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request span with a `request_id` field)
//! 3. Request ID (fill the span field, tag Sentry, echo the header)
//! 4. Security headers (CSP without scripts, no caching)
//! 5. Session layer (tower-sessions, in-memory store, signed cookie)
//!
//! [`VisitorStorage::commit`] rejects snapshots over
//! [`visitor_storage::STORAGE_QUOTA_BYTES`].
//!
//! Handlers then extract [`VisitorStorage`] from the session.

pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod visitor_storage;

pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::{SESSION_COOKIE_NAME, VisitorSessionStore, create_session_layer};
pub use visitor_storage::VisitorStorage;
