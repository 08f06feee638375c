//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Home page with login form
//! POST /login                    - Log in (role untouched)
//! POST /logout                   - Log out
//! GET  /health                   - Liveness check
//!
//! # Registration
//! GET  /register                 - Step 1: role and account basics
//! POST /register                 - Submit step 1
//! GET  /register/onboarding      - Step 2: seller onboarding
//! POST /register/onboarding      - Submit step 2 (multipart)
//!
//! # Buyers
//! GET  /explore                  - Freelancer directory
//! GET  /freelancer/{id}          - Freelancer profile
//! POST /freelancer/{id}/connect  - Send a connection request
//! GET  /gig/{id}                 - Gig details
//!
//! # Sellers
//! GET  /gigs                     - Gig editor (?edit=<id>)
//! POST /gigs                     - Create or update a gig (multipart)
//! POST /gigs/{id}/delete         - Delete a gig
//! GET  /billing                  - Billing history (?range=&document=&currency=)
//! POST /billing/payment-methods  - Add a payment method
//!
//! # Placeholders
//! GET  /orders /earnings /messages /profile
//! ```

pub mod billing;
pub mod explore;
pub mod freelancers;
pub mod gig_details;
pub mod gigs;
pub mod home;
pub mod not_found;
pub mod placeholders;
pub mod register;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    body::Body,
    extract::DefaultBodyLimit,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::field::Empty;
use workforge_core::{Session, Storage};

use crate::filters;
use crate::middleware::{
    create_session_layer, request_id_middleware, security_headers_middleware,
};
use crate::models::Nav;
use crate::state::AppState;
use crate::store::AccountRepository;

/// Directory served under `/static`, relative to the workspace root.
pub const STATIC_DIR: &str = "crates/storefront/static";

/// Request body limit for the multipart forms (thumbnails, gallery media,
/// seller documents).
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// An `<option>` or checkbox with its checked state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    /// Options whose value and label are the same text.
    pub fn list<'a, I>(values: I, is_selected: impl Fn(&str) -> bool) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        values
            .into_iter()
            .map(|value| Self {
                value: value.to_string(),
                label: value.to_string(),
                selected: is_selected(value),
            })
            .collect()
    }
}

/// Session state and header for the page at `path`.
pub fn page_nav<S: Storage + ?Sized>(storage: &mut S, path: &str) -> (Session, Nav) {
    let session = AccountRepository::new(storage).session();
    (session, Nav::new(session, path))
}

/// Gate shown to visitors without the seller role.
#[derive(Template, WebTemplate)]
#[template(path = "seller_only.html")]
pub struct SellerOnlyTemplate {
    pub nav: Nav,
    pub message: &'static str,
}

/// Render the seller-only gate with a 403 status.
#[must_use]
pub fn seller_only(nav: Nav, message: &'static str) -> Response {
    (StatusCode::FORBIDDEN, SellerOnlyTemplate { nav, message }).into_response()
}

/// Routes for the registration wizard.
pub fn register_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(register::step_one).post(register::submit_step_one))
        .route(
            "/onboarding",
            get(register::onboarding).post(register::submit_onboarding),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// Routes for the seller's gig editor.
pub fn gig_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(gigs::editor).post(gigs::save))
        .route("/{id}/delete", post(gigs::delete))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// Routes for billing and payment methods.
pub fn billing_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(billing::show))
        .route("/payment-methods", post(billing::add_payment_method))
}

/// Create all page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/login", post(home::login))
        .route("/logout", post(home::logout))
        .nest("/register", register_routes())
        .route("/explore", get(explore::index))
        .nest("/gigs", gig_routes())
        .nest("/billing", billing_routes())
        .route("/freelancer/{id}", get(freelancers::show))
        .route("/freelancer/{id}/connect", post(freelancers::connect))
        .route("/gig/{id}", get(gig_details::show))
        .route("/orders", get(placeholders::orders))
        .route("/earnings", get(placeholders::earnings))
        .route("/messages", get(placeholders::messages))
        .route("/profile", get(placeholders::profile))
}

/// Build the complete application: pages, health check, static assets and
/// the middleware stack.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config(), state.session_store().clone());

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(not_found::fallback)
        .layer(session_layer)
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = Empty,
            )
        }))
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
