//! Configuration handling for kiln templates.
//! A template may carry a `kiln.json`, `kiln.yml` or `kiln.yaml` at its root
//! to override the default project name, the git branch and commit message,
//! and the default feature values. The file is optional.

use crate::constants::{
    CONFIG_FILES, DEFAULT_BRANCH, DEFAULT_COMMIT_MESSAGE, DEFAULT_PROJECT_NAME,
};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Template-level settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Name used when the user enters nothing
    pub default_name: String,
    /// Initial branch of the generated repository
    pub branch: String,
    /// MiniJinja template for the initial commit message
    pub commit_message: String,
    /// Default feature values, validated like command-line values
    pub defaults: IndexMap<String, String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_PROJECT_NAME.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            defaults: IndexMap::new(),
        }
    }
}

/// Reads the first configuration file found in `template_dir`.
///
/// # Returns
/// * `Result<Option<String>>` - Contents of the first found configuration file,
///   `None` if the template has none
pub fn load_config<P: AsRef<Path>>(
    template_dir: P,
    config_files: &[&str],
) -> Result<Option<String>> {
    for file in config_files {
        let config_path = template_dir.as_ref().join(file);
        if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }
    debug!("No configuration file found (tried: {})", config_files.join(", "));
    Ok(None)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
///   for [`TemplateConfig`]
pub fn parse_config(content: &str) -> Result<TemplateConfig> {
    if content.trim().is_empty() {
        return Ok(TemplateConfig::default());
    }
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads the template configuration, falling back to the defaults.
pub fn get_config<P: AsRef<Path>>(template_dir: P) -> Result<TemplateConfig> {
    match load_config(template_dir, &CONFIG_FILES)? {
        Some(content) => parse_config(&content),
        None => Ok(TemplateConfig::default()),
    }
}
