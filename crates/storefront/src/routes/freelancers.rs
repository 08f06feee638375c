//! Freelancer profile and connection request handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;
use workforge_core::{FreelancerProfile, Gig, UserId};

use super::{not_found, page_nav};
use crate::error::Result;
use crate::filters;
use crate::middleware::VisitorStorage;
use crate::models::Nav;
use crate::services::freelancers::freelancer_by_id;
use crate::store::{AccountRepository, ConnectionRepository, GigRepository};

const FREELANCER_NOT_FOUND: &str = "Freelancer not found.";

/// A gig listed on a profile.
pub struct GigLink {
    pub href: String,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub thumbnail: Option<String>,
}

impl From<Gig> for GigLink {
    fn from(gig: Gig) -> Self {
        Self {
            href: format!("/gig/{}", urlencoding::encode(gig.id.as_str())),
            title: gig.title,
            category: gig.category,
            subcategory: gig.subcategory,
            thumbnail: gig.thumbnail,
        }
    }
}

/// Freelancer profile template.
#[derive(Template, WebTemplate)]
#[template(path = "freelancer.html")]
pub struct FreelancerTemplate {
    pub nav: Nav,
    pub freelancer: FreelancerProfile,
    pub occupations: String,
    pub connect_action: String,
    pub gigs: Vec<GigLink>,
    pub sent: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileQuery {
    #[serde(default)]
    pub sent: Option<String>,
}

/// Display a freelancer profile with their gigs.
#[instrument(skip(visitor))]
pub async fn show(
    mut visitor: VisitorStorage,
    Path(id): Path<String>,
    Query(query): Query<ProfileQuery>,
) -> Result<Response> {
    let (_, nav) = page_nav(&mut visitor, "/explore");
    let id = UserId::new(id);

    let Some(freelancer) = freelancer_by_id(&mut visitor, &id) else {
        visitor.commit().await?;
        return Ok(not_found::page(nav, FREELANCER_NOT_FOUND));
    };
    let gigs = GigRepository::new(&mut visitor)
        .by_seller(&id)
        .into_iter()
        .map(GigLink::from)
        .collect();
    visitor.commit().await?;

    Ok(FreelancerTemplate {
        nav,
        occupations: freelancer.occupations.join(", "),
        connect_action: format!("/freelancer/{}/connect", urlencoding::encode(id.as_str())),
        freelancer,
        gigs,
        sent: query.sent.is_some_and(|s| s == "1"),
    }
    .into_response())
}

/// Record a connection request from the visitor to this freelancer.
#[instrument(skip(visitor))]
pub async fn connect(mut visitor: VisitorStorage, Path(id): Path<String>) -> Result<Response> {
    let to = UserId::new(id);
    if freelancer_by_id(&mut visitor, &to).is_none() {
        let (_, nav) = page_nav(&mut visitor, "/explore");
        visitor.commit().await?;
        return Ok(not_found::page(nav, FREELANCER_NOT_FOUND));
    }

    let from = AccountRepository::new(&mut visitor).ensure_user_id();
    let request = ConnectionRepository::new(&mut visitor).request(to.clone(), from, Utc::now())?;
    visitor.commit().await?;

    tracing::info!(request_id = %request.id, to = %to, "Connection request sent");
    Ok(Redirect::to(&format!(
        "/freelancer/{}?sent=1",
        urlencoding::encode(to.as_str())
    ))
    .into_response())
}
