//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <file>` if given, else `$XDG_CONFIG_HOME/tripguide/tripguide.toml`
//! 3. Environment variables: `TRIPGUIDE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{IdScheme, OutlineStore, DEFAULT_TITLE};

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub default_title: Option<String>,
    pub id_scheme: Option<IdScheme>,
    pub output_dir: Option<PathBuf>,
}

/// Unified configuration for tripguide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Title given to newly inserted sections
    pub default_title: String,
    /// How new node ids are minted
    pub id_scheme: IdScheme,
    /// Where rendered guides are written
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_string(),
            id_scheme: IdScheme::default(),
            output_dir: PathBuf::from("outputs"),
        }
    }
}

/// Get the XDG config directory for tripguide.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tripguide").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("tripguide.toml"))
}

/// `TRIPGUIDE_DEFAULT_TITLE`, `TRIPGUIDE_ID_SCHEME`, `TRIPGUIDE_OUTPUT_DIR`.
///
/// The prefix separator must be set explicitly: without it the `config` crate
/// reuses `separator` and would only read `TRIPGUIDE__*`.
pub fn env_source() -> Environment {
    Environment::with_prefix("TRIPGUIDE")
        .prefix_separator("_")
        .separator("__")
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// An explicit `config_file` must exist; the global file is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        match config_file {
            Some(path) => {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        debug!("loading global config {}", global_path.display());
                        let raw = load_raw_settings(&global_path)?;
                        current = current.merge_with(&raw);
                    }
                }
            }
        }

        current = Self::apply_environment(current, env_source())?;

        current.expand_paths();
        Ok(current)
    }

    /// Scalar merge: overlay wins if specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            default_title: overlay
                .default_title
                .clone()
                .unwrap_or_else(|| self.default_title.clone()),
            id_scheme: overlay.id_scheme.unwrap_or(self.id_scheme),
            output_dir: overlay
                .output_dir
                .clone()
                .unwrap_or_else(|| self.output_dir.clone()),
        }
    }

    /// Layer an environment source (normally [`env_source`]) on top of `settings`.
    pub fn apply_environment(settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let overrides = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;
        Self::apply_overrides(settings, &overrides)
    }

    /// Apply explicit overrides (environment variables) on top of `settings`.
    pub fn apply_overrides(mut settings: Self, overrides: &Config) -> Result<Self, ApplicationError> {
        if let Ok(val) = overrides.get_string("default_title") {
            settings.default_title = val;
        }
        if let Ok(val) = overrides.get_string("id_scheme") {
            settings.id_scheme = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = overrides.get_string("output_dir") {
            settings.output_dir = PathBuf::from(val);
        }
        Ok(settings)
    }

    /// Expand `~`, `$VAR` and `${VAR}` in path-like fields.
    fn expand_paths(&mut self) {
        let raw = self.output_dir.to_string_lossy().to_string();
        if let Ok(expanded) = shellexpand::full(&raw) {
            self.output_dir = PathBuf::from(expanded.into_owned());
        }
    }

    /// Store configured with this id scheme and default title.
    pub fn outline_store(&self) -> OutlineStore {
        OutlineStore::with_scheme(self.id_scheme, self.default_title.clone())
    }

    /// Render as TOML (for `config show`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_overrides_when_applying_then_replace_values() {
        let overrides = Config::builder()
            .set_override("id_scheme", "sequential")
            .unwrap()
            .set_override("default_title", "Untitled")
            .unwrap()
            .build()
            .unwrap();
        let settings = Settings::apply_overrides(Settings::default(), &overrides).unwrap();
        assert_eq!(settings.id_scheme, IdScheme::Sequential);
        assert_eq!(settings.default_title, "Untitled");
        assert_eq!(settings.output_dir, PathBuf::from("outputs"));
    }

    #[test]
    fn given_unknown_scheme_override_when_applying_then_config_error() {
        let overrides = Config::builder()
            .set_override("id_scheme", "random")
            .unwrap()
            .build()
            .unwrap();
        let err = Settings::apply_overrides(Settings::default(), &overrides).unwrap_err();
        assert!(matches!(err, ApplicationError::Config { .. }));
    }

    #[test]
    fn given_partial_overlay_when_merging_then_unspecified_fields_kept() {
        let overlay = RawSettings {
            default_title: Some("Section".into()),
            ..RawSettings::default()
        };
        let merged = Settings::default().merge_with(&overlay);
        assert_eq!(merged.default_title, "Section");
        assert_eq!(merged.id_scheme, IdScheme::Uuid);
    }
}
