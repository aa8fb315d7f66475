//! Handlers for the `check` command group.

pub mod config;

pub use config::execute_config;
