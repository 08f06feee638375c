//! Seller onboarding data, freelancer profiles and connection requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{ConnectionRequestId, UserId};
use super::role::Role;

/// A portfolio entry captured during onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// File name of the uploaded project image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub by: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Education {
    pub college: String,
    pub degree: String,
    pub year: String,
}

/// Profile details collected by the seller onboarding step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub country: Option<String>,
    pub occupations: Vec<String>,
    /// Kept as typed; the form does not coerce it to a number.
    pub experience_years: String,
    pub languages: Vec<String>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub education: Vec<Education>,
    pub seller_docs_count: u32,
}

/// Written once when a seller finishes onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingPayload {
    pub role: Option<Role>,
    #[serde(default)]
    pub profile: OnboardingProfile,
}

/// A freelancer as shown in the directory.
///
/// Always derived (sample data, onboarding payload, or a gig); never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerProfile {
    /// Same value as the seller ID on that freelancer's gigs.
    pub id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub occupations: Vec<String>,
    pub languages: Vec<String>,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl FreelancerProfile {
    /// Headline occupation, `"Freelancer"` when none is listed.
    #[must_use]
    pub fn headline(&self) -> &str {
        self.occupations.first().map_or("Freelancer", String::as_str)
    }

    /// Rating with one decimal place (e.g. "4.9").
    #[must_use]
    pub fn rating_display(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// A buyer's request to connect with a seller. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequest {
    pub id: ConnectionRequestId,
    pub to_seller_id: UserId,
    pub from_user_id: UserId,
    pub date: DateTime<Utc>,
}
