//! Home page, login and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use super::page_nav;
use crate::error::Result;
use crate::filters;
use crate::middleware::VisitorStorage;
use crate::models::Nav;
use crate::store::AccountRepository;

/// Marketplace highlights listed under the hero.
pub const FEATURES: [&str; 4] = [
    "Seller Dashboard: Gigs, Orders, Earnings, Billing & Payments",
    "Buyer Dashboard: Explore, Messages, Account/Profile",
    "Explore freelancers by skills, projects, certifications",
    "Chat, project updates, and secure billing",
];

/// Login form data.
///
/// Credentials are required but not checked; there is no account backend.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub nav: Nav,
    pub features: &'static [&'static str],
    pub error: Option<String>,
}

/// Display the home page.
#[instrument(skip(visitor))]
pub async fn index(mut visitor: VisitorStorage) -> IndexTemplate {
    let (_, nav) = page_nav(&mut visitor, "/");
    IndexTemplate {
        nav,
        features: &FEATURES,
        error: None,
    }
}

/// Log in. Only flips `loggedIn`; the stored role is left as is.
#[instrument(skip(visitor, form))]
pub async fn login(mut visitor: VisitorStorage, Form(form): Form<LoginForm>) -> Result<Response> {
    if form.email.trim().is_empty() || form.password.is_empty() {
        let (_, nav) = page_nav(&mut visitor, "/");
        let page = IndexTemplate {
            nav,
            features: &FEATURES,
            error: Some("Enter your email and password to sign in.".to_string()),
        };
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
    }

    AccountRepository::new(&mut visitor).log_in()?;
    visitor.commit().await?;
    tracing::info!("visitor logged in");
    Ok(Redirect::to("/").into_response())
}

/// Log out and return to the home page.
#[instrument(skip(visitor))]
pub async fn logout(mut visitor: VisitorStorage) -> Result<Redirect> {
    AccountRepository::new(&mut visitor).log_out()?;
    visitor.commit().await?;
    tracing::info!("visitor logged out");
    Ok(Redirect::to("/"))
}
