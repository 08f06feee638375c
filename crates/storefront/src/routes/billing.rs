//! Seller billing history and payment methods.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Query,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;
use workforge_core::{BillingEntry, CurrencyCode, PaymentMethod};

use super::{SelectOption, page_nav, seller_only};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::VisitorStorage;
use crate::models::Nav;
use crate::services::{BillingFilter, BillingQuery, DateRange, DocumentFilter};
use crate::store::BillingRepository;

const SELLER_ONLY: &str = "This section is only available to sellers.";

/// A billing table row.
pub struct BillingRow {
    pub date: String,
    pub document: &'static str,
    pub service: String,
    pub order: String,
    pub currency: &'static str,
    pub total: String,
}

impl From<&BillingEntry> for BillingRow {
    fn from(entry: &BillingEntry) -> Self {
        Self {
            date: entry.date.format("%Y-%m-%d").to_string(),
            document: entry.document.as_str(),
            service: entry.service.clone(),
            order: entry.order.clone(),
            currency: entry.currency.code(),
            total: entry.display_total(),
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "billing.html")]
pub struct BillingTemplate {
    pub nav: Nav,
    pub ranges: Vec<SelectOption>,
    pub documents: Vec<SelectOption>,
    pub currencies: Vec<SelectOption>,
    pub rows: Vec<BillingRow>,
    pub methods: Vec<PaymentMethod>,
}

/// Display the filtered billing history and saved payment methods.
///
/// Both are seeded with sample data on a seller's first visit.
#[instrument(skip(visitor))]
pub async fn show(
    mut visitor: VisitorStorage,
    Query(query): Query<BillingQuery>,
) -> Result<Response> {
    let (session, nav) = page_nav(&mut visitor, "/billing");
    if !session.is_seller() {
        return Ok(seller_only(nav, SELLER_ONLY));
    }

    let now = Utc::now();
    let filter = BillingFilter::from_query(&query);
    let mut repo = BillingRepository::new(&mut visitor);
    let entries = repo.billing(now)?;
    let methods = repo.payment_methods()?;
    visitor.commit().await?;

    let rows = filter
        .apply(&entries, now)
        .into_iter()
        .map(BillingRow::from)
        .collect();

    Ok(BillingTemplate {
        nav,
        ranges: DateRange::ALL
            .into_iter()
            .map(|range| SelectOption {
                value: range.param().to_string(),
                label: range.label().to_string(),
                selected: range == filter.range,
            })
            .collect(),
        documents: SelectOption::list(
            DocumentFilter::options().iter().map(DocumentFilter::as_str),
            |d| d == filter.document.as_str(),
        ),
        currencies: SelectOption::list(CurrencyCode::ALL.iter().map(CurrencyCode::code), |c| {
            c == filter.currency.code()
        }),
        rows,
        methods,
    }
    .into_response())
}

/// Add payment method form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PaymentMethodForm {
    pub provider: String,
    pub account: String,
}

/// Save a payment method. Blank fields are ignored.
#[instrument(skip(visitor, form))]
pub async fn add_payment_method(
    mut visitor: VisitorStorage,
    Form(form): Form<PaymentMethodForm>,
) -> Result<Response> {
    let (session, nav) = page_nav(&mut visitor, "/billing");
    if !session.is_seller() {
        return Ok(seller_only(nav, SELLER_ONLY));
    }

    let added = BillingRepository::new(&mut visitor).add_payment_method(&form.provider, &form.account)?;
    if added {
        add_breadcrumb("billing", "Payment method added", Some(&[("provider", form.provider.trim())]));
    }
    visitor.commit().await?;

    Ok(Redirect::to("/billing").into_response())
}
