//! Pages that exist in the navigation but have no content yet.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use super::page_nav;
use crate::filters;
use crate::middleware::VisitorStorage;
use crate::models::Nav;

#[derive(Template, WebTemplate)]
#[template(path = "placeholder.html")]
pub struct PlaceholderTemplate {
    pub nav: Nav,
    pub title: &'static str,
    pub description: &'static str,
}

fn render(
    visitor: &mut VisitorStorage,
    path: &str,
    title: &'static str,
    description: &'static str,
) -> PlaceholderTemplate {
    let (_, nav) = page_nav(visitor, path);
    PlaceholderTemplate {
        nav,
        title,
        description,
    }
}

#[instrument(skip(visitor))]
pub async fn orders(mut visitor: VisitorStorage) -> PlaceholderTemplate {
    render(
        &mut visitor,
        "/orders",
        "Orders",
        "Track active, pending, and completed orders.",
    )
}

#[instrument(skip(visitor))]
pub async fn earnings(mut visitor: VisitorStorage) -> PlaceholderTemplate {
    render(&mut visitor, "/earnings", "Earnings", "View total earnings and payouts.")
}

#[instrument(skip(visitor))]
pub async fn messages(mut visitor: VisitorStorage) -> PlaceholderTemplate {
    render(
        &mut visitor,
        "/messages",
        "Messages",
        "Chat between buyers and freelancers.",
    )
}

#[instrument(skip(visitor))]
pub async fn profile(mut visitor: VisitorStorage) -> PlaceholderTemplate {
    render(
        &mut visitor,
        "/profile",
        "Profile",
        "View and edit your profile and onboarding details.",
    )
}
