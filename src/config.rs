//! Configuration file loading: output directory, angle, and custom templates.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::output::DEFAULT_OUTPUT_DIR;
use crate::render::DEFAULT_ANGLE;
use crate::template::{parse_shape, Bgr, TemplateSpec, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Top-level configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory the PNG files are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Rotation angle of the `_rotated` variants, in degrees.
    #[serde(default = "default_angle")]
    pub angle: f32,

    /// Custom template list. Empty means the built-in batch.
    #[serde(default)]
    pub templates: Vec<TemplateEntry>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_angle() -> f32 {
    DEFAULT_ANGLE
}

impl Default for Config {
    fn default() -> Self {
        Self { output_dir: default_output_dir(), angle: default_angle(), templates: Vec::new() }
    }
}

/// One `[[templates]]` entry as written in the config file.
#[derive(Debug, Deserialize)]
pub struct TemplateEntry {
    /// Label text and filename stem.
    pub name: String,
    /// Shape name: circle, square, or triangle.
    pub shape: String,
    /// `[width, height]` in pixels; defaults to 100x80.
    pub size: Option<[u32; 2]>,
    /// Foreground color as a BGR triple.
    pub color: [u8; 3],
    /// Background color as a BGR triple; defaults to white.
    pub background: Option<[u8; 3]>,
}

impl TemplateEntry {
    /// Resolve the entry into a validated [`TemplateSpec`].
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown shape name or invalid dimensions.
    pub fn resolve(&self) -> Result<TemplateSpec, String> {
        let [width, height] = self.size.unwrap_or([DEFAULT_WIDTH, DEFAULT_HEIGHT]);
        let spec = TemplateSpec {
            name: self.name.clone(),
            width,
            height,
            shape: parse_shape(&self.shape)?,
            color: Bgr(self.color),
            background: self.background.map_or(Bgr::WHITE, Bgr),
        };
        spec.validate()?;
        Ok(spec)
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `LOGOGEN_CONFIG` environment variable
/// 3. `./logogen.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("LOGOGEN_CONFIG") {
        return PathBuf::from(p);
    }

    PathBuf::from("logogen.toml")
}
