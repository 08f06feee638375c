//! Freelancer directory route handler.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;
use workforge_core::FreelancerProfile;

use super::page_nav;
use crate::error::Result;
use crate::filters;
use crate::middleware::VisitorStorage;
use crate::models::Nav;
use crate::services::freelancers::freelancers;

/// A directory card.
pub struct FreelancerCard {
    pub href: String,
    pub name: String,
    pub headline: String,
    pub country: Option<String>,
    pub skills: Vec<String>,
    pub rating: String,
}

impl From<FreelancerProfile> for FreelancerCard {
    fn from(profile: FreelancerProfile) -> Self {
        Self {
            href: format!("/freelancer/{}", urlencoding::encode(profile.id.as_str())),
            headline: profile.headline().to_string(),
            rating: profile.rating_display(),
            name: profile.name,
            country: profile.country,
            skills: profile.skills,
        }
    }
}

/// Explore page template.
#[derive(Template, WebTemplate)]
#[template(path = "explore.html")]
pub struct ExploreTemplate {
    pub nav: Nav,
    pub freelancers: Vec<FreelancerCard>,
}

/// Display the freelancer directory.
///
/// Assigns the visitor a user ID on first view, so a seller's own card
/// links to the same ID as their gigs.
#[instrument(skip(visitor))]
pub async fn index(mut visitor: VisitorStorage) -> Result<ExploreTemplate> {
    let (_, nav) = page_nav(&mut visitor, "/explore");
    let freelancers = freelancers(&mut visitor)
        .into_iter()
        .map(FreelancerCard::from)
        .collect();
    visitor.commit().await?;

    Ok(ExploreTemplate { nav, freelancers })
}
