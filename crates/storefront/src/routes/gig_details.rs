//! Gig details page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::Path,
    response::{IntoResponse, Response},
};
use tracing::instrument;
use workforge_core::{Gig, GigId, GigMedia, PackageTier};

use super::{not_found, page_nav};
use crate::filters;
use crate::middleware::VisitorStorage;
use crate::models::Nav;
use crate::store::GigRepository;

/// One enabled add-on of a tier.
pub struct ExtraLine {
    pub label: &'static str,
    pub price: String,
}

/// A pricing tier as displayed.
pub struct TierCard {
    pub name: &'static str,
    pub price: String,
    pub delivery_days: u32,
    pub revisions: u32,
    pub extras: Vec<ExtraLine>,
}

impl From<&PackageTier> for TierCard {
    fn from(tier: &PackageTier) -> Self {
        Self {
            name: tier.name.as_str(),
            price: format!("${}", tier.price.normalize()),
            delivery_days: tier.delivery_days,
            revisions: tier.revisions,
            extras: tier
                .extras
                .iter()
                .map(|(extra, price)| ExtraLine {
                    label: extra.label(),
                    price: format!("${}", price.normalize()),
                })
                .collect(),
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "gig.html")]
pub struct GigTemplate {
    pub nav: Nav,
    pub gig: Gig,
    pub seller_href: String,
    pub tiers: Vec<TierCard>,
    pub gallery: Vec<GigMedia>,
}

/// Display a gig.
///
/// The description is seller-authored HTML and is rendered as-is.
#[instrument(skip(visitor))]
pub async fn show(mut visitor: VisitorStorage, Path(id): Path<String>) -> Response {
    let (_, nav) = page_nav(&mut visitor, "/gig");
    let Some(mut gig) = GigRepository::new(&mut visitor).find(&GigId::new(id)) else {
        return not_found::page(nav, "Gig not found.");
    };

    GigTemplate {
        nav,
        seller_href: format!("/freelancer/{}", urlencoding::encode(gig.seller_id.as_str())),
        tiers: gig.packages.iter().map(TierCard::from).collect(),
        gallery: std::mem::take(&mut gig.gallery),
        gig,
    }
    .into_response()
}
