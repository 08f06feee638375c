//! Two-step registration wizard.
//!
//! Step 1 collects the account basics and starts a session. Buyers are done
//! after step 1; sellers continue to onboarding, which writes a single
//! [`OnboardingPayload`] when submitted. Nothing is stored between the two
//! steps other than the session itself.

use serde::Deserialize;
use thiserror::Error;
use workforge_core::{
    Certification, Education, OnboardingPayload, OnboardingProfile, Project, Role, Storage,
};

use super::uploads::FormFields;
use crate::store::{AccountRepository, OnboardingRepository, StoreError};

pub const COUNTRIES: [&str; 7] = [
    "India",
    "USA",
    "UK",
    "Germany",
    "Japan",
    "Canada",
    "Australia",
];

pub const DEFAULT_COUNTRY: &str = "India";

pub const OCCUPATIONS: [&str; 6] = [
    "Designer",
    "Developer",
    "Marketer",
    "Writer",
    "Consultant",
    "Other",
];

pub const LANGUAGES: [&str; 7] = [
    "Marathi",
    "Hindi",
    "English",
    "Japanese",
    "German",
    "South Indian Languages",
    "Other",
];

/// Number of project, certification and education rows on the onboarding form.
pub const ONBOARDING_ROWS: usize = 3;

#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Required fields were left empty; nothing was stored.
    #[error("missing required fields: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    /// Onboarding was submitted without a seller session.
    #[error("onboarding is only available to sellers")]
    NotSeller,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Step 1 form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub country: String,
}

impl RegistrationForm {
    /// A blank form with the default country selected.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }

    /// Labels of required fields that are empty.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.role().is_none() {
            missing.push("Role");
        }
        for (label, value) in [
            ("First Name", &self.first_name),
            ("Last Name", &self.last_name),
            ("Email Address", &self.email),
            ("Password", &self.password),
            ("Country", &self.country),
        ] {
            if value.is_empty() {
                missing.push(label);
            }
        }
        missing
    }

    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Where the visitor goes after step 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStep {
    Explore,
    /// Seller onboarding, carrying the step 1 email forward.
    Onboarding { email: String },
}

impl NextStep {
    #[must_use]
    pub fn redirect_to(&self) -> String {
        match self {
            Self::Explore => "/explore".to_string(),
            Self::Onboarding { email } => {
                format!("/register/onboarding?email={}", urlencoding::encode(email))
            }
        }
    }
}

/// Submit step 1: log in with the chosen role.
///
/// # Errors
///
/// Returns `RegistrationError::Incomplete` without touching storage when a
/// required field is empty, or `RegistrationError::Store` if the session
/// cannot be written.
pub fn start_registration<S: Storage + ?Sized>(
    storage: &mut S,
    form: &RegistrationForm,
) -> Result<NextStep, RegistrationError> {
    let missing = form.missing_fields();
    let Some(role) = form.role().filter(|_| missing.is_empty()) else {
        return Err(RegistrationError::Incomplete(missing));
    };

    AccountRepository::new(storage).start_session(role)?;
    tracing::info!(%role, "registration started");

    Ok(match role {
        Role::Buyer => NextStep::Explore,
        Role::Seller => NextStep::Onboarding {
            email: form.email.clone(),
        },
    })
}

/// Step 2 form (seller onboarding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub occupations: Vec<String>,
    pub other_occupation: String,
    pub experience_years: String,
    pub languages: Vec<String>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub education: Vec<Education>,
    pub seller_docs_count: u32,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            occupations: Vec::new(),
            other_occupation: String::new(),
            experience_years: "0".to_string(),
            languages: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
            certifications: Vec::new(),
            education: Vec::new(),
            seller_docs_count: 0,
        }
    }
}

impl OnboardingForm {
    /// Read the submitted onboarding form.
    ///
    /// Project, certification and education rows are kept when any of their
    /// inputs was filled in. Only the number of seller documents is kept.
    #[must_use]
    pub fn from_fields(fields: &FormFields) -> Self {
        let projects = (1..=ONBOARDING_ROWS)
            .filter_map(|i| {
                let project = Project {
                    link: non_empty(fields.text(&format!("project_{i}_link"))),
                    description: non_empty(fields.text(&format!("project_{i}_description"))),
                    image: fields
                        .file(&format!("project_{i}_image"))
                        .map(|f| f.file_name.clone()),
                };
                (project != Project::default()).then_some(project)
            })
            .collect();

        let certifications = (1..=ONBOARDING_ROWS)
            .map(|i| Certification {
                name: fields.text(&format!("cert_{i}_name")).trim().to_string(),
                by: fields.text(&format!("cert_{i}_by")).trim().to_string(),
                year: fields.text(&format!("cert_{i}_year")).trim().to_string(),
            })
            .filter(|c| c != &Certification::default())
            .collect();

        let education = (1..=ONBOARDING_ROWS)
            .map(|i| Education {
                college: fields.text(&format!("edu_{i}_college")).trim().to_string(),
                degree: fields.text(&format!("edu_{i}_degree")).trim().to_string(),
                year: fields.text(&format!("edu_{i}_year")).trim().to_string(),
            })
            .filter(|e| e != &Education::default())
            .collect();

        let seller_docs_count = u32::try_from(fields.files("seller_docs").count()).unwrap_or(u32::MAX);

        Self {
            full_name: fields.text("full_name").trim().to_string(),
            email: fields.text("email").trim().to_string(),
            phone: fields.text("phone").trim().to_string(),
            country: fields.text("country").to_string(),
            occupations: dedup(fields.all("occupations")),
            other_occupation: fields.text("other_occupation").trim().to_string(),
            experience_years: fields.text("experience_years").trim().to_string(),
            languages: dedup(fields.all("languages")),
            skills: fields
                .text("skills")
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
                .collect(),
            projects,
            certifications,
            education,
            seller_docs_count,
        }
    }

    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [("Full Name", &self.full_name), ("Email", &self.email)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(label, _)| label)
            .collect()
    }

    /// Occupations with the "Other" free text appended when "Other" is
    /// selected.
    #[must_use]
    pub fn resolved_occupations(&self) -> Vec<String> {
        let mut occupations = self.occupations.clone();
        if occupations.iter().any(|o| o == "Other") && !self.other_occupation.is_empty() {
            occupations.push(self.other_occupation.clone());
        }
        occupations
    }

    #[must_use]
    pub fn into_payload(self) -> OnboardingPayload {
        let occupations = self.resolved_occupations();
        OnboardingPayload {
            role: Some(Role::Seller),
            profile: OnboardingProfile {
                full_name: self.full_name,
                email: self.email,
                phone: self.phone,
                country: non_empty(&self.country),
                occupations,
                experience_years: self.experience_years,
                languages: self.languages,
                skills: self.skills,
                projects: self.projects,
                certifications: self.certifications,
                education: self.education,
                seller_docs_count: self.seller_docs_count,
            },
        }
    }
}

/// Submit step 2: store the onboarding payload.
///
/// # Errors
///
/// Returns `RegistrationError::NotSeller` unless the stored role is seller,
/// `RegistrationError::Incomplete` when a required field is empty, or
/// `RegistrationError::Store` if the payload cannot be written.
pub fn finish_onboarding<S: Storage + ?Sized>(
    storage: &mut S,
    form: OnboardingForm,
) -> Result<(), RegistrationError> {
    if AccountRepository::new(storage).role() != Some(Role::Seller) {
        return Err(RegistrationError::NotSeller);
    }

    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(RegistrationError::Incomplete(missing));
    }

    let payload = form.into_payload();
    OnboardingRepository::new(storage).save(&payload)?;
    tracing::info!(
        occupations = payload.profile.occupations.len(),
        seller_docs = payload.profile.seller_docs_count,
        "seller onboarding completed"
    );
    Ok(())
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn dedup(values: Vec<&str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !value.is_empty() && !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}
