//! Generator configuration (stored in ~/.config/bgfc-syllabus/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SyllabusError};
use crate::render::document::DEFAULT_FONT;

const CONFIG_DIR: &str = "bgfc-syllabus";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "SYLLABUS_CONFIG_DIR";

/// Working record settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordConfig {
    /// Record snapshot used when `--input` is omitted
    #[serde(default = "default_record_path")]
    pub path: PathBuf,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            path: default_record_path(),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for exports written under their default name
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Font family for the rich document
    #[serde(default = "default_font")]
    pub font: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            font: default_font(),
        }
    }
}

fn default_record_path() -> PathBuf {
    PathBuf::from("syllabus.json")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_font() -> String {
    DEFAULT_FONT.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub record: RecordConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl GeneratorConfig {
    /// Default config file location; `SYLLABUS_CONFIG_DIR` overrides the platform directory
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    SyllabusError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from an explicit path, or from the default location.
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// explicit path is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path()?;
                if !path.exists() {
                    debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                Self::load_from(&path)
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SyllabusError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: GeneratorConfig = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SyllabusError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
