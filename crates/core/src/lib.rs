//! WorkForge Core - Shared marketplace types.
//!
//! This crate provides the types used across the WorkForge components:
//! - `storefront` - The marketplace site (registration, gigs, directory, billing)
//! - `integration-tests` - End-to-end tests driving the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP, no
//! session handling. Marketplace records are serialized with the same
//! camelCase JSON layout the visitor storage has always used, so stored
//! snapshots stay readable across releases.
//!
//! # Modules
//!
//! - [`types`] - IDs, roles, gigs, billing rows, profiles
//! - [`storage`] - The key-value [`Storage`](storage::Storage) trait and its in-memory implementation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod storage;
pub mod types;

pub use storage::{MemoryStorage, Storage};
pub use types::*;
