use crate::error::{Result, ViewKitError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub const DEFAULT_SUFFIX: &str = "phtml";

/// Resolver configuration with named, typed fields.
///
/// The framework this library grew out of configured resolvers through a
/// loose string-keyed option map. That surface survives as
/// [`ResolverConfig::from_options`]: keys are matched case-insensitively and
/// unrecognized keys are ignored, but a recognized key with a wrong-typed
/// value is rejected up front rather than at first use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Reject template names containing parent-directory traversal
    pub lfi_protection: bool,

    /// Ordered base directories searched during resolution
    pub script_paths: Vec<String>,

    /// Extension appended to names that lack one (no leading dot)
    pub default_suffix: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            lfi_protection: true,
            script_paths: Vec::new(),
            default_suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Load config from a JSON file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(ViewKitError::Io)?;
        let options: Map<String, Value> =
            serde_json::from_str(&content).map_err(ViewKitError::Serialization)?;
        Self::from_options(&options)
    }

    /// Build a config from a loose option map.
    ///
    /// Recognized keys (case-insensitive): `lfi_protection`, `script_paths`,
    /// `default_suffix`. Anything else is silently skipped.
    pub fn from_options(options: &Map<String, Value>) -> Result<Self> {
        let mut config = Self::default();

        for (key, value) in options {
            match key.to_ascii_lowercase().as_str() {
                "lfi_protection" => {
                    config.lfi_protection = value
                        .as_bool()
                        .ok_or_else(|| invalid(key, "expected a boolean"))?;
                }
                "script_paths" => {
                    let items = value
                        .as_array()
                        .ok_or_else(|| invalid(key, "expected an array of strings"))?;
                    let mut paths = Vec::with_capacity(items.len());
                    for item in items {
                        let path = item
                            .as_str()
                            .ok_or_else(|| invalid(key, "expected an array of strings"))?;
                        paths.push(path.to_string());
                    }
                    config.script_paths = paths;
                }
                "default_suffix" => {
                    let suffix = value
                        .as_str()
                        .ok_or_else(|| invalid(key, "expected a string"))?;
                    config.set_default_suffix(suffix);
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// Set the default suffix (normalizes away any leading dots)
    pub fn set_default_suffix(&mut self, suffix: &str) {
        self.default_suffix = suffix.trim_start_matches('.').to_string();
    }

    pub fn default_suffix(&self) -> &str {
        &self.default_suffix
    }
}

fn invalid(key: &str, reason: &str) -> ViewKitError {
    ViewKitError::InvalidOption {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
