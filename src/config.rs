//! Configuration file support for sonar-export.
//!
//! Provides YAML-based configuration through `sonar-export.config.yml`
//! files, including data structures, file loading, and validation. The
//! file only tunes the export; server, project, token and output paths
//! always come from the command line.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::ExporterConfigBuilder;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sonar-export.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub page_size: Option<u32>,
    pub rating_metrics: Option<Vec<String>>,
    pub report_metrics: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Applies the values present in the file on top of `builder`
    pub fn apply(&self, mut builder: ExporterConfigBuilder) -> ExporterConfigBuilder {
        if let Some(page_size) = self.page_size {
            builder = builder.page_size(page_size);
        }
        if let Some(ref metrics) = self.rating_metrics {
            builder = builder.rating_metrics(metrics.clone());
        }
        if let Some(ref metrics) = self.report_metrics {
            builder = builder.report_metrics(metrics.clone());
        }
        builder
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    log::debug!("using config file {}", config_path.display());
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let lists = [
        ("rating_metrics", &config.rating_metrics),
        ("report_metrics", &config.report_metrics),
    ];
    for (name, metrics) in lists {
        let Some(metrics) = metrics else { continue };
        if metrics.is_empty() {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the key to use the default metric keys.",
                name
            );
        }
        for (i, metric) in metrics.iter().enumerate() {
            if metric.trim().is_empty() {
                bail!(
                    "Invalid config: {}[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be a metric key (e.g., \"coverage\").",
                    name,
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        log::warn!("Unknown config field '{}' will be ignored.", key);
    }
}
