//! Configuration file loading.

use anyhow::{Context, Result, bail};
use jts_common::JtsConfig;
use std::path::Path;

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml" | "yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => bail!(
                "unsupported configuration file '{}': expected .yaml, .yml or .json",
                path.display()
            ),
        }
    }
}

pub fn parse_config(source: &str, format: ConfigFormat) -> Result<JtsConfig> {
    let config: JtsConfig = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(source)?,
        ConfigFormat::Json => serde_json::from_str(source)?,
    };
    Ok(config)
}

/// Load a configuration file.
///
/// Relative `inputDirectory` and `outputDirectory` values are taken relative
/// to the directory holding the configuration file.
pub fn load_config(path: &Path) -> Result<JtsConfig> {
    let format = ConfigFormat::from_path(path)?;
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let mut config = parse_config(&source, format)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;

    if config.module_maps.is_empty() {
        bail!("config {} declares no moduleMaps", path.display());
    }

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    if config.input_directory.is_relative() {
        config.input_directory = base.join(&config.input_directory);
    }
    if config.output_directory.is_relative() {
        config.output_directory = base.join(&config.output_directory);
    }
    Ok(config)
}

#[cfg(test)]
#[path = "../tests/config.rs"]
mod tests;
