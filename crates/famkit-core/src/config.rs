//! TOML configuration file.
//!
//! ```toml
//! [resolution]
//! mode = "strict"
//!
//! [broadcast]
//! longer_inputs = "reject"
//!
//! [association]
//! visibility_keywords = ["visibility", "show", "hidden"]
//! force_visibility = true
//! ```
//!
//! Every table and key is optional.

use std::path::{Path, PathBuf};

use famkit_model::{BroadcastPolicy, NormalizationOptions, ResolutionMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ops::AssociationOptions;
use crate::visibility::{DEFAULT_VISIBILITY_KEYWORDS, VisibilityRule};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolutionSettings {
    #[serde(default)]
    pub mode: ResolutionMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BroadcastSettings {
    #[serde(default)]
    pub longer_inputs: BroadcastPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssociationSettings {
    #[serde(default = "default_visibility_keywords")]
    pub visibility_keywords: Vec<String>,
    #[serde(default = "default_force_visibility")]
    pub force_visibility: bool,
}

impl Default for AssociationSettings {
    fn default() -> Self {
        Self {
            visibility_keywords: default_visibility_keywords(),
            force_visibility: default_force_visibility(),
        }
    }
}

fn default_visibility_keywords() -> Vec<String> {
    DEFAULT_VISIBILITY_KEYWORDS
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_force_visibility() -> bool {
    true
}

/// Settings read from a famkit config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FamkitConfig {
    #[serde(default)]
    pub resolution: ResolutionSettings,
    #[serde(default)]
    pub broadcast: BroadcastSettings,
    #[serde(default)]
    pub association: AssociationSettings,
}

impl FamkitConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn normalization_options(&self) -> NormalizationOptions {
        NormalizationOptions::new()
            .with_resolution(self.resolution.mode)
            .with_broadcast(self.broadcast.longer_inputs)
    }

    pub fn association_options(&self) -> AssociationOptions {
        AssociationOptions::default()
            .with_visibility(VisibilityRule::keywords(
                &self.association.visibility_keywords,
            ))
            .with_force_visibility(self.association.force_visibility)
    }
}
