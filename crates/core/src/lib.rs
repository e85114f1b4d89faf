//! Pizza Stand Core - Shared types library.
//!
//! This crate provides common types used across all Pizza Stand components:
//! - `backend` - The in-memory mock backend served to the front-end under test
//! - `integration-tests` - Black-box tests driving the backend over HTTP
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no fixture state.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and role
//!   assignments

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
