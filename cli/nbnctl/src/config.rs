//! Profile configuration.
//!
//! Profiles are named configurations (network abbreviation, library
//! identifier, sub-namespace prefix) read from a TOML file:
//!
//! ```toml
//! [profiles.qucosa]
//! network_abbreviation = "bsz"
//! library_identifier = "14"
//! sub_namespace_prefix = "qucosa"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use nbn_urn::ConfigurationRegistry;
use serde::Deserialize;
use tracing::debug;

use crate::error::CliError;

/// Profiles file name.
const PROFILES_FILE: &str = "profiles.toml";

/// Get the default profiles file path.
fn default_path() -> Result<PathBuf> {
    ProjectDirs::from("de", "nbn", "nbn")
        .map(|dirs| dirs.config_dir().join(PROFILES_FILE))
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Named configurations keyed by profile name.
    #[serde(default)]
    pub profiles: ConfigurationRegistry,
}

impl Config {
    /// Load the profiles file.
    ///
    /// An explicit path must exist; a missing default file yields no profiles.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::ConfigNotFound(path.to_path_buf()).into());
                }
                Self::from_file(path)
            }
            None => {
                let path = default_path()?;
                if !path.exists() {
                    debug!(path = %path.display(), "No profiles file, using empty registry");
                    return Ok(Self::default());
                }
                Self::from_file(&path)
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profiles from {:?}", path))?;

        let config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse profiles from {:?}", path))?;

        debug!(path = %path.display(), profiles = config.profiles.len(), "Profiles loaded");
        Ok(config)
    }

    /// Parse profiles from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
