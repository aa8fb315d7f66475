//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] : Builders for [`SecurityRecord`](crate::domain::SecurityRecord) rows.
//! - [`catalog`] : A fixed in-memory [`CatalogSet`](crate::application::catalog::CatalogSet).
//! - [`config`] : Canonical pipeline configuration.

pub mod catalog;
pub mod config;
pub mod domain;
