//! Configuration lookup shared by the CLI handlers.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Resolve which config file, if any, a command should read.
///
/// An explicit path is always returned so that a missing file is reported.
#[must_use]
pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        }
    }
}

/// Load the configuration for a command.
///
/// # Errors
///
/// Returns an error if an explicit or discovered file cannot be read,
/// parsed or validated.
#[allow(clippy::result_large_err)]
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match resolve_path(explicit) {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration");
            Config::load(&path)
        }
        None => {
            debug!("No configuration file, using defaults");
            Ok(Config::default())
        }
    }
}
