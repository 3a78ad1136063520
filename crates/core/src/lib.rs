//! Vitrine Core - Shared types library.
//!
//! This crate provides common types used across all Vitrine components:
//! - `wordpress` - Typed WPGraphQL client for the headless WordPress backend
//! - consuming frontends and tools built on top of it
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
