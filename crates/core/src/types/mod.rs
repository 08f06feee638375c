//! Core types for WorkForge.
//!
//! This module provides type-safe wrappers for the marketplace records kept
//! in a visitor's storage.

pub mod billing;
pub mod gig;
pub mod id;
pub mod price;
pub mod profile;
pub mod role;

pub use billing::{BillingEntry, DocumentType, PaymentMethod};
pub use gig::{Extra, Gig, GigMedia, MediaType, PackageExtras, PackageName, PackageTier, Packages};
pub use id::*;
pub use price::CurrencyCode;
pub use profile::{
    Certification, ConnectionRequest, Education, FreelancerProfile, OnboardingPayload,
    OnboardingProfile, Project,
};
pub use role::{ParseRoleError, Role, Session};
