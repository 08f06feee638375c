//! WorkForge Storefront library.
//!
//! The marketplace site: registration and seller onboarding, the freelancer
//! directory, the seller's gig editor and billing pages. Every visitor's
//! marketplace data lives in a key-value snapshot held in their session
//! (see [`middleware::VisitorStorage`]); there is no database.
//!
//! The binary in `main.rs` only loads configuration, sets up Sentry and
//! tracing, and serves [`routes::app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
