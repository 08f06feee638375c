//! 404 page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use super::page_nav;
use crate::filters;
use crate::middleware::VisitorStorage;
use crate::models::Nav;

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub nav: Nav,
    pub message: String,
}

/// Render the 404 page with `message`.
#[must_use]
pub fn page(nav: Nav, message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            nav,
            message: message.to_string(),
        },
    )
        .into_response()
}

/// Fallback for unmatched paths.
#[instrument(skip(visitor))]
pub async fn fallback(mut visitor: VisitorStorage, uri: Uri) -> Response {
    let (_, nav) = page_nav(&mut visitor, uri.path());
    page(nav, "The page you are looking for does not exist.")
}
