//! Integration tests for WorkForge.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p workforge-integration-tests
//! ```
//!
//! Tests drive the full storefront router in-process: no server, no
//! network. [`TestClient`] plays one browser, carrying its session cookie
//! between requests, so each client is a separate visitor with separate
//! marketplace storage. Clients built with [`TestClient::visitor`] share the
//! same application (and session store).

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use secrecy::SecretString;
use tower::ServiceExt;
use workforge_storefront::config::StorefrontConfig;
use workforge_storefront::middleware::SESSION_COOKIE_NAME;
use workforge_storefront::routes;
use workforge_storefront::state::AppState;

/// 64-character session secret with enough entropy for config validation.
pub const TEST_SESSION_SECRET: &str =
    "aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6%dF8(gH1)jK3_lM5+nP7=qR9[sT2]vX4{";

/// Configuration for in-process tests (plain http, so cookies are not `Secure`).
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 3000,
        base_url: "http://localhost:3000".to_string(),
        session_secret: SecretString::from(TEST_SESSION_SECRET),
        session_days: 365,
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// Build the storefront application with [`test_config`].
#[must_use]
pub fn test_app() -> Router {
    routes::app(AppState::new(test_config()))
}

/// A response with its body read to text.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    #[must_use]
    pub fn is_redirect_to(&self, path: &str) -> bool {
        self.status.is_redirection() && self.location.as_deref() == Some(path)
    }
}

/// One visitor's browser: an app handle plus a cookie jar of one cookie.
#[derive(Clone)]
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// A visitor on a fresh application.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: test_app(),
            cookie: None,
        }
    }

    /// Another visitor on the same application.
    #[must_use]
    pub fn visitor(&self) -> Self {
        Self {
            app: self.app.clone(),
            cookie: None,
        }
    }

    /// GET `path`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = self.request("GET", path).body(Body::empty()).expect("request");
        self.send(request).await
    }

    /// POST a urlencoded form.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let request = self
            .request("POST", path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("request");
        self.send(request).await
    }

    /// POST a multipart form.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn post_multipart(&mut self, path: &str, form: MultipartForm) -> TestResponse {
        let request = self
            .request("POST", path)
            .header(header::CONTENT_TYPE, form.content_type())
            .body(Body::from(form.into_body()))
            .expect("request");
        self.send(request).await
    }

    /// Register as a seller and finish onboarding as `full_name`.
    ///
    /// # Panics
    ///
    /// Panics if either step does not redirect as expected.
    pub async fn register_seller(&mut self, full_name: &str) {
        let resp = self
            .post_form(
                "/register",
                &[
                    ("role", "seller"),
                    ("first_name", full_name),
                    ("last_name", "Seller"),
                    ("email", "seller@example.com"),
                    ("password", "hunter22"),
                    ("country", "India"),
                ],
            )
            .await;
        assert!(resp.status.is_redirection(), "step 1 failed: {resp:?}");

        let form = MultipartForm::new()
            .text("full_name", full_name)
            .text("email", "seller@example.com")
            .text("occupations", "Designer");
        let resp = self.post_multipart("/register/onboarding", form).await;
        assert!(resp.is_redirect_to("/gigs"), "onboarding failed: {resp:?}");
    }

    /// Register as a buyer.
    ///
    /// # Panics
    ///
    /// Panics if registration does not redirect to explore.
    pub async fn register_buyer(&mut self) {
        let resp = self
            .post_form(
                "/register",
                &[
                    ("role", "buyer"),
                    ("first_name", "Bea"),
                    ("last_name", "Buyer"),
                    ("email", "buyer@example.com"),
                    ("password", "hunter22"),
                    ("country", "India"),
                ],
            )
            .await;
        assert!(resp.is_redirect_to("/explore"), "registration failed: {resp:?}");
    }

    fn request(&self, method: &str, path: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(path);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        for value in response.headers().get_all(header::SET_COOKIE) {
            let Ok(value) = value.to_str() else { continue };
            if let Some(pair) = value.split(';').next() {
                if pair.starts_with(&format!("{SESSION_COOKIE_NAME}=")) {
                    self.cookie = Some(pair.to_string());
                }
            }
        }

        let status = response.status();
        let headers = response.headers().clone();
        let location = headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");

        TestResponse {
            status,
            headers,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// A `multipart/form-data` body under construction.
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            boundary: format!("----workforge{}", uuid::Uuid::new_v4().simple()),
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self
    }

    #[must_use]
    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    fn into_body(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        self.body
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}
