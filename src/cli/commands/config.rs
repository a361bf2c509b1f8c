//! Config file bootstrap command.

use std::path::{Path, PathBuf};

use crate::config::{self, Config, ConfigError};
use crate::error::Result;

/// Write a default config file to `path` (or the OS config location).
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn cmd_init_config(path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config::config_path().ok_or(ConfigError::NoConfigDir)?,
    };

    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path).into());
    }

    config::save(&Config::default(), &path)?;
    Ok(path)
}
