//! Pizza Stand Backend - an in-memory stand-in for the pizza storefront API.
//!
//! This crate provides the mock backend as a library, allowing UI test
//! suites to spawn one isolated instance per test and point a front-end at
//! it over real HTTP.
//!
//! # Architecture
//!
//! - Axum method routers over a fixed set of resource paths
//! - An explicit [`state::FixtureState`] object per instance: user
//!   directory, single session slot, franchise/store collections, static
//!   menu
//! - Canned or lightly computed JSON responses; the only modeled failure is
//!   `unauthorized` on bad credentials
//!
//! Nothing is persisted. State lives for the lifetime of one fixture
//! instance and is discarded with it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;
pub mod server;
pub mod state;
pub mod token;

pub use config::{FixtureOptions, ServerConfig};
pub use seed::FixtureBuilder;
pub use server::Backend;
pub use state::FixtureState;
