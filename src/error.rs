use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Catalog access errors.
///
/// The resolution core never propagates these: each one degrades to the
/// catalog-unavailable behaviour of the stage that hit it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("{catalog} catalog unavailable")]
    Unavailable { catalog: &'static str },

    #[error("failed to read {catalog} catalog at {path}: {reason}")]
    Read {
        catalog: &'static str,
        path: PathBuf,
        reason: String,
    },

    #[error("failed to parse {catalog} catalog at {path}: {reason}")]
    Parse {
        catalog: &'static str,
        path: PathBuf,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
