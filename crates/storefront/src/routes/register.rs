//! Registration wizard route handlers.
//!
//! Step 1 is a urlencoded form. Step 2 (seller onboarding) is multipart
//! because it carries repeated checkboxes and file inputs.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Multipart, Query},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;
use workforge_core::Role;

use super::{SelectOption, page_nav};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::VisitorStorage;
use crate::models::Nav;
use crate::services::registration::{
    COUNTRIES, LANGUAGES, OCCUPATIONS, ONBOARDING_ROWS, finish_onboarding, start_registration,
};
use crate::services::{FormFields, OnboardingForm, RegistrationError, RegistrationForm};

/// A selectable role card.
pub struct RoleCard {
    pub value: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub selected: bool,
}

/// Step 1 page template.
#[derive(Template, WebTemplate)]
#[template(path = "register/step_one.html")]
pub struct StepOneTemplate {
    pub nav: Nav,
    pub form: RegistrationForm,
    pub roles: Vec<RoleCard>,
    pub countries: Vec<SelectOption>,
    pub error: Option<String>,
}

impl StepOneTemplate {
    fn new(nav: Nav, form: RegistrationForm, error: Option<String>) -> Self {
        let roles = Role::ALL
            .iter()
            .map(|role| RoleCard {
                value: role.as_str(),
                title: role.label(),
                tagline: role.tagline(),
                selected: form.role == role.as_str(),
            })
            .collect();
        let countries = SelectOption::list(COUNTRIES, |c| c == form.country);
        Self {
            nav,
            form,
            roles,
            countries,
            error,
        }
    }
}

/// One numbered row of the projects, certifications or education sections.
pub struct OnboardingRow {
    pub index: usize,
    pub first: String,
    pub second: String,
    pub third: String,
}

/// Step 2 page template.
#[derive(Template, WebTemplate)]
#[template(path = "register/onboarding.html")]
pub struct OnboardingTemplate {
    pub nav: Nav,
    pub form: OnboardingForm,
    pub countries: Vec<SelectOption>,
    pub occupations: Vec<SelectOption>,
    pub languages: Vec<SelectOption>,
    pub skills: String,
    pub projects: Vec<OnboardingRow>,
    pub certifications: Vec<OnboardingRow>,
    pub education: Vec<OnboardingRow>,
    pub error: Option<String>,
}

impl OnboardingTemplate {
    fn new(nav: Nav, form: OnboardingForm, error: Option<String>) -> Self {
        let countries = SelectOption::list(COUNTRIES, |c| c == form.country);
        let occupations = SelectOption::list(OCCUPATIONS, |o| form.occupations.iter().any(|s| s == o));
        let languages = SelectOption::list(LANGUAGES, |l| form.languages.iter().any(|s| s == l));

        let row = |index: usize, values: Option<[String; 3]>| {
            let [first, second, third] = values.unwrap_or_default();
            OnboardingRow {
                index,
                first,
                second,
                third,
            }
        };
        let projects = (1..=ONBOARDING_ROWS)
            .map(|i| {
                row(
                    i,
                    form.projects.get(i - 1).map(|p| {
                        [
                            p.link.clone().unwrap_or_default(),
                            p.description.clone().unwrap_or_default(),
                            String::new(),
                        ]
                    }),
                )
            })
            .collect();
        let certifications = (1..=ONBOARDING_ROWS)
            .map(|i| {
                row(
                    i,
                    form.certifications
                        .get(i - 1)
                        .map(|c| [c.name.clone(), c.by.clone(), c.year.clone()]),
                )
            })
            .collect();
        let education = (1..=ONBOARDING_ROWS)
            .map(|i| {
                row(
                    i,
                    form.education
                        .get(i - 1)
                        .map(|e| [e.college.clone(), e.degree.clone(), e.year.clone()]),
                )
            })
            .collect();

        Self {
            nav,
            skills: form.skills.join(", "),
            form,
            countries,
            occupations,
            languages,
            projects,
            certifications,
            education,
            error,
        }
    }
}

/// Query for step 2; carries the email entered in step 1.
#[derive(Debug, Default, Deserialize)]
pub struct OnboardingQuery {
    pub email: Option<String>,
}

fn missing_message(missing: &[&str]) -> String {
    format!("Please fill in: {}.", missing.join(", "))
}

/// Display registration step 1.
#[instrument(skip(visitor))]
pub async fn step_one(mut visitor: VisitorStorage) -> StepOneTemplate {
    let (_, nav) = page_nav(&mut visitor, "/register");
    StepOneTemplate::new(nav, RegistrationForm::blank(), None)
}

/// Submit step 1. Buyers go to explore, sellers on to onboarding.
#[instrument(skip(visitor, form))]
pub async fn submit_step_one(
    mut visitor: VisitorStorage,
    Form(form): Form<RegistrationForm>,
) -> Result<Response> {
    match start_registration(&mut visitor, &form) {
        Ok(next) => {
            visitor.commit().await?;
            Ok(Redirect::to(&next.redirect_to()).into_response())
        }
        Err(RegistrationError::Incomplete(missing)) => {
            let (_, nav) = page_nav(&mut visitor, "/register");
            let error = Some(missing_message(&missing));
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                StepOneTemplate::new(nav, form, error),
            )
                .into_response())
        }
        Err(RegistrationError::Store(e)) => Err(AppError::Store(e)),
        Err(RegistrationError::NotSeller) => Err(AppError::Internal(
            "registration step 1 reported a seller gate".to_string(),
        )),
    }
}

/// Display the seller onboarding step.
///
/// Visitors whose stored role is not seller are sent back to step 1.
#[instrument(skip(visitor))]
pub async fn onboarding(
    mut visitor: VisitorStorage,
    Query(query): Query<OnboardingQuery>,
) -> Response {
    let (session, nav) = page_nav(&mut visitor, "/register");
    if session.role != Some(Role::Seller) {
        return Redirect::to("/register").into_response();
    }

    let form = OnboardingForm {
        email: query.email.unwrap_or_default(),
        ..OnboardingForm::default()
    };
    OnboardingTemplate::new(nav, form, None).into_response()
}

/// Submit seller onboarding and continue to the gig editor.
#[instrument(skip(visitor, multipart))]
pub async fn submit_onboarding(
    mut visitor: VisitorStorage,
    multipart: Multipart,
) -> Result<Response> {
    let fields = FormFields::from_multipart(multipart).await?;
    let form = OnboardingForm::from_fields(&fields);

    match finish_onboarding(&mut visitor, form.clone()) {
        Ok(()) => {
            visitor.commit().await?;
            Ok(Redirect::to("/gigs").into_response())
        }
        Err(RegistrationError::NotSeller) => Ok(Redirect::to("/register").into_response()),
        Err(RegistrationError::Incomplete(missing)) => {
            let (_, nav) = page_nav(&mut visitor, "/register");
            let error = Some(missing_message(&missing));
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                OnboardingTemplate::new(nav, form, error),
            )
                .into_response())
        }
        Err(RegistrationError::Store(e)) => Err(AppError::Store(e)),
    }
}
