//! Seller gig editor route handlers.
//!
//! One page holds both the create/update form and the seller's own listing.
//! The form is multipart so thumbnails and gallery media can be uploaded.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;
use workforge_core::{Extra, Gig, GigId, GigMedia, PackageName, PackageTier, UserId};

use super::{SelectOption, page_nav, seller_only};
use crate::error::Result;
use crate::filters;
use crate::middleware::VisitorStorage;
use crate::models::Nav;
use crate::services::gig_editor::CATEGORIES;
use crate::services::{FormFields, GigDraft};
use crate::store::{AccountRepository, GigRepository, random_suffix};

const SELLER_ONLY: &str = "This section is only available to sellers. Please register as a Freelancer or switch account.";

/// Upper bound of the delivery-days menu.
const MAX_DELIVERY_DAYS: u32 = 30;

/// An extra's checkbox and price input for one tier.
pub struct ExtraField {
    pub name: String,
    pub label: &'static str,
    pub enabled: bool,
    pub price: String,
}

/// One tier's pricing inputs.
pub struct TierFields {
    pub name: &'static str,
    pub prefix: &'static str,
    pub price: String,
    pub delivery_days: Vec<SelectOption>,
    pub revisions: u32,
    pub extras: Vec<ExtraField>,
}

impl From<&PackageTier> for TierFields {
    fn from(tier: &PackageTier) -> Self {
        let prefix = tier.name.field_prefix();
        let delivery_days = (1..=MAX_DELIVERY_DAYS)
            .map(|day| SelectOption {
                value: day.to_string(),
                label: day.to_string(),
                selected: day == tier.delivery_days,
            })
            .collect();
        let extras = Extra::ALL
            .into_iter()
            .map(|extra| ExtraField {
                name: format!("{prefix}_extra_{}", extra.field_suffix()),
                label: extra.label(),
                enabled: tier.extras.is_enabled(extra),
                price: tier
                    .extras
                    .get(extra)
                    .map(|p| p.normalize().to_string())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            name: tier.name.as_str(),
            prefix,
            price: tier.price.normalize().to_string(),
            delivery_days,
            revisions: tier.revisions,
            extras,
        }
    }
}

/// Subcategory options grouped by category.
pub struct SubcategoryGroup {
    pub category: &'static str,
    pub options: Vec<SelectOption>,
}

/// A row of the "My Gigs" list.
pub struct GigRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub thumbnail: Option<String>,
    pub view_href: String,
    pub edit_href: String,
    pub delete_action: String,
}

impl From<Gig> for GigRow {
    fn from(gig: Gig) -> Self {
        let encoded = urlencoding::encode(gig.id.as_str()).into_owned();
        Self {
            view_href: format!("/gig/{encoded}"),
            edit_href: format!("/gigs?edit={encoded}"),
            delete_action: format!("/gigs/{encoded}/delete"),
            id: gig.id.into_inner(),
            title: gig.title,
            category: gig.category,
            subcategory: gig.subcategory,
            thumbnail: gig.thumbnail,
        }
    }
}

/// Gig editor page template.
#[derive(Template, WebTemplate)]
#[template(path = "gigs.html")]
pub struct GigsTemplate {
    pub nav: Nav,
    pub editing_id: Option<String>,
    pub title: String,
    pub categories: Vec<SelectOption>,
    pub subcategory_groups: Vec<SubcategoryGroup>,
    pub other_subcategory: String,
    pub description_html: String,
    pub skills: String,
    pub requirements: String,
    pub tiers: Vec<TierFields>,
    pub thumbnail: Option<String>,
    pub gallery: Vec<GigMedia>,
    pub gigs: Vec<GigRow>,
    pub error: Option<String>,
}

impl GigsTemplate {
    fn new(nav: Nav, draft: &GigDraft, gigs: Vec<Gig>, error: Option<String>) -> Self {
        let categories = SelectOption::list(CATEGORIES.iter().map(|c| c.name), |c| {
            c == draft.category
        });
        let subcategory_groups = CATEGORIES
            .iter()
            .map(|c| SubcategoryGroup {
                category: c.name,
                options: SelectOption::list(c.subcategories.iter().copied(), |s| {
                    c.name == draft.category && s == draft.subcategory
                }),
            })
            .collect();

        Self {
            nav,
            editing_id: draft.editing_id.as_ref().map(ToString::to_string),
            title: draft.title.clone(),
            categories,
            subcategory_groups,
            other_subcategory: draft.other_subcategory.clone(),
            description_html: draft.description_html.clone(),
            skills: draft.skills.join(", "),
            requirements: draft.requirements.join("\n"),
            tiers: PackageName::ALL
                .into_iter()
                .map(|name| TierFields::from(draft.packages.get(name)))
                .collect(),
            thumbnail: draft.thumbnail.clone(),
            gallery: draft.gallery.clone(),
            gigs: gigs.into_iter().map(GigRow::from).collect(),
            error,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EditorQuery {
    pub edit: Option<String>,
}

/// Seller's own gig with `id`, if any.
fn own_gig(visitor: &mut VisitorStorage, seller: &UserId, id: &str) -> Option<Gig> {
    GigRepository::new(visitor)
        .find(&GigId::new(id))
        .filter(|gig| &gig.seller_id == seller)
}

/// Display the gig editor and the seller's listings.
///
/// `?edit=<id>` loads one of the seller's gigs into the form; unknown or
/// foreign IDs fall back to a blank form.
#[instrument(skip(visitor))]
pub async fn editor(
    mut visitor: VisitorStorage,
    Query(query): Query<EditorQuery>,
) -> Result<Response> {
    let (session, nav) = page_nav(&mut visitor, "/gigs");
    if !session.is_seller() {
        return Ok(seller_only(nav, SELLER_ONLY));
    }

    let seller = AccountRepository::new(&mut visitor).ensure_user_id();
    let draft = query
        .edit
        .as_deref()
        .and_then(|id| own_gig(&mut visitor, &seller, id))
        .map(|gig| GigDraft::from_gig(&gig))
        .unwrap_or_default();
    let gigs = GigRepository::new(&mut visitor).by_seller(&seller);
    visitor.commit().await?;

    Ok(GigsTemplate::new(nav, &draft, gigs, None).into_response())
}

/// Create or update a gig.
///
/// The hidden `editing_id` field selects the gig being updated. A missing
/// title re-renders the form with a 422 and stores nothing.
#[instrument(skip(visitor, multipart))]
pub async fn save(mut visitor: VisitorStorage, multipart: Multipart) -> Result<Response> {
    let (session, nav) = page_nav(&mut visitor, "/gigs");
    if !session.is_seller() {
        return Ok(seller_only(nav, SELLER_ONLY));
    }

    let fields = FormFields::from_multipart(multipart).await?;
    let seller = AccountRepository::new(&mut visitor).ensure_user_id();

    let mut draft = match fields.text("editing_id").trim() {
        "" => GigDraft::default(),
        id => own_gig(&mut visitor, &seller, id)
            .map(|gig| GigDraft::from_gig(&gig))
            .unwrap_or_default(),
    };
    draft.apply_form(&fields);

    if draft.is_missing_title() {
        let gigs = GigRepository::new(&mut visitor).by_seller(&seller);
        visitor.commit().await?;
        let page = GigsTemplate::new(nav, &draft, gigs, Some("Please add a gig title.".to_string()));
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
    }

    let new_id = GigId::generate(Utc::now(), &random_suffix(4));
    let gig = draft.into_gig(seller, new_id);
    let id = gig.id.clone();
    GigRepository::new(&mut visitor).upsert(gig)?;
    visitor.commit().await?;

    tracing::info!(gig_id = %id, "Gig saved");
    Ok(Redirect::to(&format!("/gigs?edit={}", urlencoding::encode(id.as_str()))).into_response())
}

/// Delete one of the seller's gigs.
#[instrument(skip(visitor))]
pub async fn delete(mut visitor: VisitorStorage, Path(id): Path<String>) -> Result<Response> {
    let (session, nav) = page_nav(&mut visitor, "/gigs");
    if !session.is_seller() {
        return Ok(seller_only(nav, SELLER_ONLY));
    }

    let seller = AccountRepository::new(&mut visitor).ensure_user_id();
    if let Some(gig) = own_gig(&mut visitor, &seller, &id) {
        GigRepository::new(&mut visitor).delete(&gig.id)?;
        tracing::info!(gig_id = %gig.id, "Gig deleted");
    }
    visitor.commit().await?;

    Ok(Redirect::to("/gigs").into_response())
}
