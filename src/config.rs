//! Project configuration (pxavatar.yaml).
//!
//! Every field is optional. A missing file means all defaults; command-line
//! flags take precedence over anything set here.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AvatarError, Result};
use crate::types::GenerationParams;

/// Default config filename, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "pxavatar.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding stored avatars.
    pub storage: PathBuf,

    /// Generator type used when a request gives none.
    pub default_type: Option<String>,

    pub default_primary: Option<String>,

    pub default_foreign: Option<String>,

    pub default_scheme: Option<String>,

    /// Gradient angle used when a request gives none.
    pub default_angle: Option<f64>,

    /// Render the six sizes in parallel.
    pub parallel: bool,

    /// Abandon renders that take longer than this many milliseconds.
    pub timeout_ms: Option<u64>,
}

fn default_storage() -> PathBuf {
    PathBuf::from("avatars")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            default_type: None,
            default_primary: None,
            default_foreign: None,
            default_scheme: None,
            default_angle: None,
            parallel: true,
            timeout_ms: None,
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AvatarError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load config if the file exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty or comment-only file is valid.
        if content.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| AvatarError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Fill fields the request left unset from configured defaults.
    pub fn apply_defaults(&self, mut params: GenerationParams) -> GenerationParams {
        fill(&mut params.kind, &self.default_type);
        fill(&mut params.primary_color, &self.default_primary);
        fill(&mut params.foreign_color, &self.default_foreign);
        fill(&mut params.color_scheme, &self.default_scheme);
        if params.angle.is_none() {
            params.angle = self.default_angle;
        }
        params
    }
}

fn fill(field: &mut Option<String>, default: &Option<String>) {
    if field.is_none() {
        field.clone_from(default);
    }
}
