//! Marketplace logic built on top of the visitor store.
//!
//! # Services
//!
//! - `freelancers` - Freelancer directory and profile lookup (derived views)
//! - `billing` - Billing history filter
//! - `gig_editor` - Transient gig editor state and form mapping
//! - `registration` - Two-step registration / seller onboarding wizard
//! - `uploads` - Multipart form fields and data-URL encoding of uploads

pub mod billing;
pub mod freelancers;
pub mod gig_editor;
pub mod registration;
pub mod uploads;

pub use billing::{BillingFilter, BillingQuery, DateRange, DocumentFilter};
pub use gig_editor::{CATEGORIES, Category, GigDraft};
pub use registration::{NextStep, OnboardingForm, RegistrationError, RegistrationForm};
pub use uploads::{FormFields, UploadedFile};
