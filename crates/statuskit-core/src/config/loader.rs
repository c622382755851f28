//! Settings loading from multiple sources

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StatusError, StatusResult};

use super::settings::{SettingsOverlay, StatusSettings};

/// Prefix of the environment variables read by [`SettingsSource::Environment`]
pub const ENV_PREFIX: &str = "STATUSKIT_";

/// Source of settings data
#[derive(Debug, Clone)]
pub enum SettingsSource {
    /// Settings from a file
    File(PathBuf),
    /// Settings from `STATUSKIT_*` environment variables
    Environment,
    /// Default settings
    Default,
}

/// Settings loader with support for multiple sources
#[derive(Debug, Default)]
pub struct SettingsLoader {
    sources: Vec<SettingsSource>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a settings source
    pub fn add_source(mut self, source: SettingsSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(SettingsSource::File(path.as_ref().to_path_buf()))
    }

    /// Add environment variables source
    pub fn with_env(self) -> Self {
        self.add_source(SettingsSource::Environment)
    }

    /// Add default settings source
    pub fn with_defaults(self) -> Self {
        self.add_source(SettingsSource::Default)
    }

    /// Load settings from all sources, in the order they were added
    pub fn load(&self) -> StatusResult<StatusSettings> {
        self.load_with(|key| env::var(key).ok())
    }

    /// Load settings, resolving environment variables through `lookup`
    pub fn load_with<F>(&self, lookup: F) -> StatusResult<StatusSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = StatusSettings::default();

        for source in &self.sources {
            match source {
                SettingsSource::File(path) => {
                    tracing::debug!("Loading settings from file: {}", path.display());
                    settings.merge(load_from_file(path)?);
                }
                SettingsSource::Environment => {
                    tracing::debug!("Loading settings from environment");
                    settings.merge(overlay_from_env(&lookup)?);
                }
                SettingsSource::Default => {
                    tracing::debug!("Resetting to default settings");
                    settings = StatusSettings::default();
                }
            }
        }

        Ok(settings)
    }
}

/// Load a settings overlay from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns an empty overlay if the file doesn't exist.
pub fn load_from_file(path: &Path) -> StatusResult<SettingsOverlay> {
    if !path.exists() {
        return Ok(SettingsOverlay::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        StatusError::io_with_path(
            format!("Failed to read settings file: {}", e),
            path.display().to_string(),
        )
    })?;

    let overlay: SettingsOverlay = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            StatusError::config_with_context(
                format!("Failed to parse TOML settings: {}", e),
                format!("Deserializing TOML settings from '{}'", path.display()),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            StatusError::config_with_context(
                format!("Failed to parse YAML settings: {}", e),
                format!("Deserializing YAML settings from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            StatusError::config_with_context(
                format!("Failed to parse JSON settings: {}", e),
                format!("Deserializing JSON settings from '{}'", path.display()),
            )
        })?,
    };

    Ok(overlay)
}

fn overlay_from_env<F>(lookup: &F) -> StatusResult<SettingsOverlay>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

    let capture_debug_data = match var("CAPTURE_DEBUG_DATA") {
        Some(raw) => Some(parse_bool(&raw).ok_or_else(|| {
            StatusError::config(format!(
                "Invalid {}CAPTURE_DEBUG_DATA value: {}",
                ENV_PREFIX, raw
            ))
        })?),
        None => None,
    };

    Ok(SettingsOverlay {
        success_message: var("SUCCESS_MESSAGE"),
        capture_debug_data,
        error_separator: var("ERROR_SEPARATOR"),
        log_level: var("LOG_LEVEL"),
        log_format: var("LOG_FORMAT"),
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("status.json");
        fs::write(&path, r#"{ "success_message": "All good", "capture_debug_data": false }"#)
            .unwrap();

        let settings = SettingsLoader::new().with_file(&path).load_with(|_| None).unwrap();
        assert_eq!(settings.success_message, "All good");
        assert!(!settings.capture_debug_data);
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("status.toml");
        fs::write(&path, "error_separator = \"; \"\nlog_format = \"json\"\n").unwrap();

        let settings = SettingsLoader::new().with_file(&path).load_with(|_| None).unwrap();
        assert_eq!(settings.error_separator, "; ");
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn test_load_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("status.yaml");
        fs::write(&path, "log_level: warn\n").unwrap();

        let settings = SettingsLoader::new().with_file(&path).load_with(|_| None).unwrap();
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = SettingsLoader::new()
            .with_file(temp_dir.path().join("absent.json"))
            .load_with(|_| None)
            .unwrap();
        assert_eq!(settings, StatusSettings::default());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("status.json");
        fs::write(&path, "{ not json").unwrap();

        let err = SettingsLoader::new().with_file(&path).load_with(|_| None).unwrap_err();
        assert_eq!(err.error_code(), "STATUS_CONFIG");
        assert!(err.context().unwrap().contains("status.json"));
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("status.json");
        fs::write(&path, r#"{ "success_message": "From file" }"#).unwrap();

        let lookup = lookup_from(&[
            ("STATUSKIT_SUCCESS_MESSAGE", "From env"),
            ("STATUSKIT_CAPTURE_DEBUG_DATA", "off"),
        ]);
        let settings = SettingsLoader::new()
            .with_file(&path)
            .with_env()
            .load_with(lookup)
            .unwrap();

        assert_eq!(settings.success_message, "From env");
        assert!(!settings.capture_debug_data);
    }

    #[test]
    fn test_invalid_env_bool() {
        let lookup = lookup_from(&[("STATUSKIT_CAPTURE_DEBUG_DATA", "maybe")]);
        let err = SettingsLoader::new().with_env().load_with(lookup).unwrap_err();
        assert!(matches!(err, StatusError::Config { .. }));
    }

    #[test]
    fn test_defaults_source_resets() {
        let lookup = lookup_from(&[("STATUSKIT_LOG_LEVEL", "trace")]);
        let settings = SettingsLoader::new()
            .with_env()
            .with_defaults()
            .load_with(lookup)
            .unwrap();
        assert_eq!(settings.logging.level, "info");
    }
}
