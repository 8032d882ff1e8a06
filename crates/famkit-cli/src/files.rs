//! Reading the config file, request files and family snapshots.

use std::path::Path;

use anyhow::{Context, Result, bail};
use famkit_core::{FamkitConfig, MemoryFamily};
use famkit_model::ParameterInputs;
use tracing::debug;

/// Loads the `--config` file, or the defaults when none was given.
pub fn load_config(path: Option<&Path>) -> Result<FamkitConfig> {
    match path {
        Some(path) => FamkitConfig::load(path).context("load config"),
        None => Ok(FamkitConfig::default()),
    }
}

/// Request file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Json,
    Toml,
}

impl RequestFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => bail!(
                "unsupported request file {}: expected a .json or .toml extension",
                path.display()
            ),
        }
    }
}

pub fn parse_request(contents: &str, format: RequestFormat) -> Result<ParameterInputs> {
    match format {
        RequestFormat::Json => serde_json::from_str(contents).context("parse JSON request"),
        RequestFormat::Toml => toml::from_str(contents).context("parse TOML request"),
    }
}

pub fn load_request(path: &Path) -> Result<ParameterInputs> {
    let format = RequestFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read request file {}", path.display()))?;
    let inputs = parse_request(&contents, format)
        .with_context(|| format!("load request file {}", path.display()))?;
    debug!(path = %path.display(), names = inputs.names.len(), "request loaded");
    Ok(inputs)
}

pub fn load_family(path: &Path) -> Result<MemoryFamily> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read family snapshot {}", path.display()))?;
    let family = MemoryFamily::from_json(&contents)
        .with_context(|| format!("parse family snapshot {}", path.display()))?;
    debug!(
        path = %path.display(),
        title = %family.title,
        parameters = family.parameters.len(),
        "family loaded"
    );
    Ok(family)
}

pub fn save_family(family: &MemoryFamily, path: &Path) -> Result<()> {
    let json = family.to_json().context("serialize family snapshot")?;
    std::fs::write(path, json)
        .with_context(|| format!("write family snapshot {}", path.display()))?;
    debug!(path = %path.display(), "family saved");
    Ok(())
}
